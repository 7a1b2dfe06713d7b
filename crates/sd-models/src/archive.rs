//! Archived job model
//!
//! A frozen snapshot of a completed job, kept for records. Archiving
//! copies selected fields from the source job; it never deletes the
//! source, and the back-reference is an unvalidated identifier.

use chrono::{DateTime, NaiveDate, Utc};
use sd_core::{EntityId, Record, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::job::Job;

/// Archived job entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedJob {
    pub id: EntityId,

    /// Origin job reference (unvalidated)
    pub job_id: EntityId,

    pub name: String,
    pub client: String,

    /// Contract value in rupiah, as of completion
    pub contract_value: i64,

    pub completed_date: NaiveDate,

    /// Names of archived documents
    pub documents: Vec<String>,

    pub notes: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for an archive entry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedJobDraft {
    pub job_id: EntityId,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub client: String,

    pub contract_value: i64,
    pub completed_date: NaiveDate,

    #[serde(default)]
    pub documents: Vec<String>,

    #[serde(default)]
    pub notes: String,
}

impl ArchivedJobDraft {
    /// Snapshot a completed job. The amended contract value is what gets
    /// archived, not the original figure.
    pub fn from_job(job: &Job, completed_date: NaiveDate) -> Self {
        Self {
            job_id: job.id,
            name: job.name.clone(),
            client: job.client.clone(),
            contract_value: job.effective_value(),
            completed_date,
            documents: vec![],
            notes: String::new(),
        }
    }
}

/// Partial update for an archive entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedJobPatch {
    pub name: Option<String>,
    pub client: Option<String>,
    pub contract_value: Option<i64>,
    pub completed_date: Option<NaiveDate>,
    pub documents: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl Timestamped for ArchivedJob {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for ArchivedJob {
    type Draft = ArchivedJobDraft;
    type Patch = ArchivedJobPatch;

    const TYPE_NAME: &'static str = "ArchivedJob";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: ArchivedJobDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            job_id: draft.job_id,
            name: draft.name,
            client: draft.client,
            contract_value: draft.contract_value,
            completed_date: draft.completed_date,
            documents: draft.documents,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: ArchivedJobPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(client) = patch.client {
            self.client = client;
        }
        if let Some(value) = patch.contract_value {
            self.contract_value = value;
        }
        if let Some(date) = patch.completed_date {
            self.completed_date = date;
        }
        if let Some(documents) = patch.documents {
            self.documents = documents;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{Amendment, AmendmentDraft, JobDraft, JobStatus};
    use chrono::TimeZone;
    use sd_core::ChildRecord;

    #[test]
    fn test_snapshot_copies_amended_value() {
        let now = Utc.with_ymd_and_hms(2024, 11, 1, 10, 0, 0).unwrap();
        let draft = JobDraft {
            contract_number: "KTR/2023/004".to_string(),
            name: "Clinic Construction".to_string(),
            client: "Yayasan Sehat".to_string(),
            contract_value: 2_000_000_000,
            owner: "Andi".to_string(),
            team: vec![],
            status: JobStatus::Done,
            start_date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 10, 30).unwrap(),
            progress: 100,
            from_tender: false,
        };
        let mut job = Job::from_draft(draft, sd_core::new_entity_id(), now);
        job.amendments.push(Amendment::from_draft(
            AmendmentDraft {
                number: "ADD-01".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                description: "Extra ward".to_string(),
                value_delta: 300_000_000,
            },
            sd_core::new_entity_id(),
        ));

        let completed = NaiveDate::from_ymd_opt(2024, 10, 30).unwrap();
        let snapshot = ArchivedJobDraft::from_job(&job, completed);

        assert_eq!(snapshot.job_id, job.id);
        assert_eq!(snapshot.contract_value, 2_300_000_000);
        assert_eq!(snapshot.completed_date, completed);
    }
}
