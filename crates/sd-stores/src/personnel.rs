//! Personnel store
//!
//! Wraps the generic store and adds certificate operations on the nested
//! list, addressed by (personnel id, certificate id).

use std::sync::Arc;

use sd_core::{EntityId, SharedClock, StoreResult};
use sd_models::{
    Certificate, CertificateDraft, CertificatePatch, Personnel, PersonnelDraft, PersonnelPatch,
};

use crate::source::DataSource;
use crate::store::RecordStore;

pub struct PersonnelStore {
    inner: RecordStore<Personnel>,
}

impl PersonnelStore {
    pub fn new(source: Arc<dyn DataSource<Personnel>>, clock: SharedClock) -> Self {
        Self {
            inner: RecordStore::new(source, clock),
        }
    }

    pub async fn load(&self) {
        self.inner.load().await;
    }

    pub fn add(&self, draft: PersonnelDraft) -> StoreResult<Personnel> {
        self.inner.add(draft)
    }

    pub fn update(&self, id: EntityId, patch: PersonnelPatch) -> StoreResult<Personnel> {
        self.inner.update(id, patch)
    }

    pub fn remove(&self, id: EntityId) -> StoreResult<()> {
        self.inner.remove(id)
    }

    pub fn get(&self, id: EntityId) -> Option<Personnel> {
        self.inner.get(id)
    }

    pub fn all(&self) -> Vec<Personnel> {
        self.inner.all()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    pub fn add_certificate(
        &self,
        personnel_id: EntityId,
        draft: CertificateDraft,
    ) -> StoreResult<Certificate> {
        self.inner
            .add_child(personnel_id, |p| &mut p.certificates, draft)
    }

    pub fn update_certificate(
        &self,
        personnel_id: EntityId,
        certificate_id: EntityId,
        patch: CertificatePatch,
    ) -> StoreResult<Certificate> {
        self.inner
            .update_child(personnel_id, |p| &mut p.certificates, certificate_id, patch)
    }

    pub fn remove_certificate(
        &self,
        personnel_id: EntityId,
        certificate_id: EntityId,
    ) -> StoreResult<()> {
        self.inner
            .remove_child(personnel_id, |p| &mut p.certificates, certificate_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SeedSource;
    use chrono::{NaiveDate, TimeZone, Utc};
    use sd_core::{new_entity_id, FixedClock, StoreError};
    use std::time::Duration;

    fn store() -> PersonnelStore {
        PersonnelStore::new(
            Arc::new(SeedSource::new(vec![]).with_delay(Duration::ZERO)),
            Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            )),
        )
    }

    fn person(name: &str) -> PersonnelDraft {
        PersonnelDraft {
            name: name.to_string(),
            title: "Site Engineer".to_string(),
            skills: vec!["supervision".to_string()],
            email: String::new(),
            phone: String::new(),
            availability: Default::default(),
            photo_url: None,
        }
    }

    #[test]
    fn test_certificate_lifecycle() {
        let store = store();
        let p = store.add(person("Dewi")).unwrap();

        let cert = store
            .add_certificate(
                p.id,
                CertificateDraft {
                    name: "SKA Ahli Madya".to_string(),
                    number: "SKA-4411".to_string(),
                    issued_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
                    valid_until: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                },
            )
            .unwrap();
        assert_eq!(store.get(p.id).unwrap().certificates.len(), 1);

        store
            .update_certificate(
                p.id,
                cert.id,
                CertificatePatch {
                    valid_until: Some(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()),
                    ..Default::default()
                },
            )
            .unwrap();
        let reloaded = store.get(p.id).unwrap();
        assert_eq!(
            reloaded.certificates[0].valid_until,
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
        );

        store.remove_certificate(p.id, cert.id).unwrap();
        assert!(store.get(p.id).unwrap().certificates.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_roster_add_then_remove() {
        let store = PersonnelStore::new(
            Arc::new(SeedSource::new(crate::seed::personnel()).with_delay(Duration::ZERO)),
            Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            )),
        );
        store.load().await;
        assert_eq!(store.len(), 3);

        store.add(person("Taufik")).unwrap();
        assert_eq!(store.len(), 4);

        let original = store.all()[0].id;
        store.remove(original).unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.get(original).is_none());
    }

    #[test]
    fn test_certificate_unknown_parent_is_not_found() {
        let store = store();
        let err = store
            .remove_certificate(new_entity_id(), new_entity_id())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
