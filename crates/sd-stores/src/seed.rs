//! Bundled seed data
//!
//! Static collections standing in for a future remote source. Records are
//! fully formed (id and timestamps included) so `load()` can replace a
//! collection wholesale.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sd_core::{new_entity_id, ChildRecord, Record};
use sd_models::{
    Amendment, AmendmentDraft, ArchivedJob, ArchivedJobDraft, Availability, BudgetLine,
    BudgetLineDraft, Certificate, CertificateDraft, Condition, Equipment, EquipmentDraft, Job,
    JobDraft, JobStatus, Lead, LeadDraft, LeadStatus, LegalDocType, LegalDocument,
    LegalDocumentDraft, Personnel, PersonnelDraft, Stage, StageDraft, StageStatus, Tender,
    TenderDraft, TenderStatus, UsageStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The instant all seed records are stamped with.
fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn record<T: Record>(draft: T::Draft) -> T {
    T::from_draft(draft, new_entity_id(), seeded_at())
}

fn child<C: ChildRecord>(draft: C::Draft) -> C {
    C::from_draft(draft, new_entity_id())
}

pub fn leads() -> Vec<Lead> {
    vec![
        record(LeadDraft {
            name: "Gudang Logistik Cikarang".to_string(),
            client: "PT Sentosa Makmur".to_string(),
            estimated_value: 3_200_000_000,
            status: LeadStatus::Negotiation,
            start_date: date(2024, 3, 1),
            target_date: date(2024, 11, 30),
            owner: "Budi Santoso".to_string(),
            notes: "Waiting on revised BoQ".to_string(),
        }),
        record(LeadDraft {
            name: "Renovasi Kantor Cabang Surabaya".to_string(),
            client: "Bank Nusantara".to_string(),
            estimated_value: 850_000_000,
            status: LeadStatus::Offer,
            start_date: date(2024, 4, 15),
            target_date: date(2024, 8, 15),
            owner: "Rina Wati".to_string(),
            notes: String::new(),
        }),
        record(LeadDraft {
            name: "Jalan Akses Kawasan Industri".to_string(),
            client: "PT Kawasan Berikat".to_string(),
            estimated_value: 5_600_000_000,
            status: LeadStatus::Prospect,
            start_date: date(2024, 6, 1),
            target_date: date(2025, 3, 31),
            owner: "Budi Santoso".to_string(),
            notes: "Initial survey done".to_string(),
        }),
    ]
}

pub fn tenders() -> Vec<Tender> {
    vec![
        record(TenderDraft {
            name: "Pembangunan Jembatan Desa Sukamaju".to_string(),
            agency: "Dinas PUPR Kab. Bogor".to_string(),
            ceiling_value: 8_500_000_000,
            bid_value: 8_100_000_000,
            status: TenderStatus::Evaluation,
            tender_date: date(2024, 2, 20),
            result_date: None,
            personnel_ids: vec![],
            equipment_ids: vec![],
            documents: vec![
                "surat-penawaran.pdf".to_string(),
                "jaminan-penawaran.pdf".to_string(),
            ],
        }),
        record(TenderDraft {
            name: "Rehabilitasi Saluran Irigasi".to_string(),
            agency: "Dinas PU Provinsi".to_string(),
            ceiling_value: 4_200_000_000,
            bid_value: 3_950_000_000,
            status: TenderStatus::Won,
            tender_date: date(2023, 11, 10),
            result_date: Some(date(2023, 12, 18)),
            personnel_ids: vec![],
            equipment_ids: vec![],
            documents: vec!["kontrak.pdf".to_string()],
        }),
        record(TenderDraft {
            name: "Gedung Serbaguna Kecamatan".to_string(),
            agency: "Pemkab Karawang".to_string(),
            ceiling_value: 2_700_000_000,
            bid_value: 2_680_000_000,
            status: TenderStatus::Preparation,
            tender_date: date(2024, 5, 2),
            result_date: None,
            personnel_ids: vec![],
            equipment_ids: vec![],
            documents: vec![],
        }),
    ]
}

pub fn jobs() -> Vec<Job> {
    let mut irrigation: Job = record(JobDraft {
        contract_number: "KTR/2024/001".to_string(),
        name: "Rehabilitasi Saluran Irigasi".to_string(),
        client: "Dinas PU Provinsi".to_string(),
        contract_value: 3_950_000_000,
        owner: "Siti Rahma".to_string(),
        team: vec![],
        status: JobStatus::Running,
        start_date: date(2024, 1, 15),
        end_date: date(2024, 10, 15),
        progress: 45,
        from_tender: true,
    });
    irrigation.stages = vec![
        child::<Stage>(StageDraft {
            name: "Mobilisasi".to_string(),
            progress: 100,
            start_date: date(2024, 1, 15),
            end_date: date(2024, 2, 1),
            status: StageStatus::Done,
        }),
        child::<Stage>(StageDraft {
            name: "Galian dan Pasangan Batu".to_string(),
            progress: 60,
            start_date: date(2024, 2, 1),
            end_date: date(2024, 7, 31),
            status: StageStatus::InProgress,
        }),
        child::<Stage>(StageDraft {
            name: "Finishing".to_string(),
            progress: 0,
            start_date: date(2024, 8, 1),
            end_date: date(2024, 10, 1),
            status: StageStatus::Pending,
        }),
    ];
    irrigation.budget = vec![
        child::<BudgetLine>(BudgetLineDraft {
            category: "Material".to_string(),
            description: "Batu kali, semen, pasir".to_string(),
            planned: 1_600_000_000,
            realized: 900_000_000,
        }),
        child::<BudgetLine>(BudgetLineDraft {
            category: "Upah".to_string(),
            description: "Tenaga kerja harian".to_string(),
            planned: 800_000_000,
            realized: 420_000_000,
        }),
    ];
    irrigation.amendments = vec![child::<Amendment>(AmendmentDraft {
        number: "ADD-01".to_string(),
        date: date(2024, 4, 10),
        description: "Penambahan panjang saluran 120 m".to_string(),
        value_delta: 210_000_000,
    })];

    let warehouse: Job = record(JobDraft {
        contract_number: "KTR/2024/002".to_string(),
        name: "Gudang Material Cibitung".to_string(),
        client: "PT Sentosa Makmur".to_string(),
        contract_value: 1_850_000_000,
        owner: "Andi Wijaya".to_string(),
        team: vec![],
        status: JobStatus::Preparation,
        start_date: date(2024, 6, 1),
        end_date: date(2025, 1, 31),
        progress: 0,
        from_tender: false,
    });

    vec![irrigation, warehouse]
}

pub fn archive() -> Vec<ArchivedJob> {
    vec![record(ArchivedJobDraft {
        job_id: new_entity_id(),
        name: "Perbaikan Jalan Lingkungan".to_string(),
        client: "Pemkot Bekasi".to_string(),
        contract_value: 1_200_000_000,
        completed_date: date(2023, 12, 20),
        documents: vec!["bast.pdf".to_string(), "as-built-drawing.pdf".to_string()],
        notes: "Serah terima tanpa catatan".to_string(),
    })]
}

pub fn personnel() -> Vec<Personnel> {
    let mut dewi: Personnel = record(PersonnelDraft {
        name: "Dewi Lestari".to_string(),
        title: "Ahli Teknik Jalan".to_string(),
        skills: vec!["perkerasan".to_string(), "drainase".to_string()],
        email: "dewi@example.co.id".to_string(),
        phone: "0812-1111-2222".to_string(),
        availability: Availability::Assigned,
        photo_url: None,
    });
    dewi.certificates = vec![child::<Certificate>(CertificateDraft {
        name: "SKA Ahli Madya Teknik Jalan".to_string(),
        number: "SKA-4411-2022".to_string(),
        issued_date: date(2022, 5, 1),
        valid_until: date(2025, 5, 1),
    })];

    let agus: Personnel = record(PersonnelDraft {
        name: "Agus Pratama".to_string(),
        title: "Quantity Surveyor".to_string(),
        skills: vec!["estimasi".to_string(), "boq".to_string()],
        email: "agus@example.co.id".to_string(),
        phone: "0812-3333-4444".to_string(),
        availability: Availability::Available,
        photo_url: None,
    });

    let maya: Personnel = record(PersonnelDraft {
        name: "Maya Sari".to_string(),
        title: "K3 Konstruksi".to_string(),
        skills: vec!["smk3".to_string()],
        email: "maya@example.co.id".to_string(),
        phone: "0812-5555-6666".to_string(),
        availability: Availability::OnLeave,
        photo_url: None,
    });

    vec![dewi, agus, maya]
}

pub fn equipment() -> Vec<Equipment> {
    vec![
        record(EquipmentDraft {
            name: "Excavator PC200".to_string(),
            category: "Alat Berat".to_string(),
            brand: "Komatsu".to_string(),
            specification: "20 ton, bucket 0.9 m3".to_string(),
            condition: Condition::Good,
            usage: UsageStatus::InUse,
            last_location: "Proyek Irigasi".to_string(),
        }),
        record(EquipmentDraft {
            name: "Concrete Mixer 500L".to_string(),
            category: "Alat Pengecoran".to_string(),
            brand: "Tiger".to_string(),
            specification: "500 liter, diesel".to_string(),
            condition: Condition::MinorDamage,
            usage: UsageStatus::Available,
            last_location: "Gudang Cibitung".to_string(),
        }),
        record(EquipmentDraft {
            name: "Vibro Roller".to_string(),
            category: "Alat Berat".to_string(),
            brand: "Sakai".to_string(),
            specification: "10 ton".to_string(),
            condition: Condition::Maintenance,
            usage: UsageStatus::UnderRepair,
            last_location: "Bengkel Pusat".to_string(),
        }),
    ]
}

pub fn legal_documents() -> Vec<LegalDocument> {
    vec![
        record(LegalDocumentDraft {
            name: "Izin Usaha Jasa Konstruksi".to_string(),
            doc_type: LegalDocType::BusinessPermit,
            number: "IUJK-2021-0457".to_string(),
            issued_date: date(2021, 7, 1),
            valid_until: date(2024, 7, 1),
            file_url: None,
            reminder: true,
        }),
        record(LegalDocumentDraft {
            name: "Sertifikat Badan Usaha".to_string(),
            doc_type: LegalDocType::Certificate,
            number: "SBU-0098-2023".to_string(),
            issued_date: date(2023, 2, 14),
            valid_until: date(2026, 2, 14),
            file_url: None,
            reminder: true,
        }),
        record(LegalDocumentDraft {
            name: "Akta Pendirian Perusahaan".to_string(),
            doc_type: LegalDocType::Deed,
            number: "AKT-17/2010".to_string(),
            issued_date: date(2010, 3, 3),
            valid_until: date(2030, 3, 3),
            file_url: None,
            reminder: false,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_core::Timestamped;

    #[test]
    fn test_seed_records_are_fully_formed() {
        for lead in leads() {
            assert_eq!(lead.created_at(), lead.updated_at());
        }
        assert!(!jobs().is_empty());
        assert!(!personnel().is_empty());
    }

    #[test]
    fn test_seeded_job_carries_children() {
        let jobs = jobs();
        let irrigation = &jobs[0];
        assert_eq!(irrigation.stages.len(), 3);
        assert_eq!(irrigation.budget.len(), 2);
        assert_eq!(irrigation.effective_value(), 4_160_000_000);
    }
}
