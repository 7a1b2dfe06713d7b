//! Active job store
//!
//! Wraps the generic store and adds the nested-child operations for the
//! job aggregate: stages, budget lines, amendments. Every child mutation
//! refreshes the parent's `updated_at`.

use std::sync::Arc;

use sd_core::{EntityId, SharedClock, StoreResult};
use sd_models::{
    Amendment, AmendmentDraft, AmendmentPatch, BudgetLine, BudgetLineDraft, BudgetLinePatch, Job,
    JobDraft, JobPatch, Stage, StageDraft, StagePatch,
};

use crate::source::DataSource;
use crate::store::RecordStore;

pub struct JobStore {
    inner: RecordStore<Job>,
}

impl JobStore {
    pub fn new(source: Arc<dyn DataSource<Job>>, clock: SharedClock) -> Self {
        Self {
            inner: RecordStore::new(source, clock),
        }
    }

    pub async fn load(&self) {
        self.inner.load().await;
    }

    pub fn add(&self, draft: JobDraft) -> StoreResult<Job> {
        self.inner.add(draft)
    }

    pub fn update(&self, id: EntityId, patch: JobPatch) -> StoreResult<Job> {
        self.inner.update(id, patch)
    }

    pub fn remove(&self, id: EntityId) -> StoreResult<()> {
        self.inner.remove(id)
    }

    pub fn get(&self, id: EntityId) -> Option<Job> {
        self.inner.get(id)
    }

    pub fn all(&self) -> Vec<Job> {
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

    // Stages

    pub fn add_stage(&self, job_id: EntityId, draft: StageDraft) -> StoreResult<Stage> {
        self.inner.add_child(job_id, |job| &mut job.stages, draft)
    }

    pub fn update_stage(
        &self,
        job_id: EntityId,
        stage_id: EntityId,
        patch: StagePatch,
    ) -> StoreResult<Stage> {
        self.inner
            .update_child(job_id, |job| &mut job.stages, stage_id, patch)
    }

    pub fn remove_stage(&self, job_id: EntityId, stage_id: EntityId) -> StoreResult<()> {
        self.inner
            .remove_child(job_id, |job| &mut job.stages, stage_id)
    }

    // Budget lines

    pub fn add_budget_line(
        &self,
        job_id: EntityId,
        draft: BudgetLineDraft,
    ) -> StoreResult<BudgetLine> {
        self.inner.add_child(job_id, |job| &mut job.budget, draft)
    }

    pub fn update_budget_line(
        &self,
        job_id: EntityId,
        line_id: EntityId,
        patch: BudgetLinePatch,
    ) -> StoreResult<BudgetLine> {
        self.inner
            .update_child(job_id, |job| &mut job.budget, line_id, patch)
    }

    pub fn remove_budget_line(&self, job_id: EntityId, line_id: EntityId) -> StoreResult<()> {
        self.inner
            .remove_child(job_id, |job| &mut job.budget, line_id)
    }

    // Amendments

    pub fn add_amendment(
        &self,
        job_id: EntityId,
        draft: AmendmentDraft,
    ) -> StoreResult<Amendment> {
        self.inner
            .add_child(job_id, |job| &mut job.amendments, draft)
    }

    pub fn update_amendment(
        &self,
        job_id: EntityId,
        amendment_id: EntityId,
        patch: AmendmentPatch,
    ) -> StoreResult<Amendment> {
        self.inner
            .update_child(job_id, |job| &mut job.amendments, amendment_id, patch)
    }

    pub fn remove_amendment(&self, job_id: EntityId, amendment_id: EntityId) -> StoreResult<()> {
        self.inner
            .remove_child(job_id, |job| &mut job.amendments, amendment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SeedSource;
    use chrono::{NaiveDate, TimeZone, Utc};
    use sd_core::{new_entity_id, FixedClock, StoreError, Timestamped};
    use sd_models::{JobStatus, StageStatus};
    use std::time::Duration;

    fn store() -> JobStore {
        JobStore::new(
            Arc::new(SeedSource::new(vec![]).with_delay(Duration::ZERO)),
            Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap(),
            )),
        )
    }

    fn job_draft(name: &str) -> JobDraft {
        JobDraft {
            contract_number: format!("KTR/2024/{name}"),
            name: name.to_string(),
            client: "PT Klien".to_string(),
            contract_value: 1_000_000_000,
            owner: "Rina".to_string(),
            team: vec![],
            status: JobStatus::Running,
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            progress: 0,
            from_tender: false,
        }
    }

    fn stage_draft(name: &str) -> StageDraft {
        StageDraft {
            name: name.to_string(),
            progress: 0,
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            status: StageStatus::Pending,
        }
    }

    #[test]
    fn test_stage_ops_are_isolated_per_job() {
        let store = store();
        let x = store.add(job_draft("X")).unwrap();
        let y = store.add(job_draft("Y")).unwrap();

        store.add_stage(x.id, stage_draft("Foundation")).unwrap();
        store.add_stage(x.id, stage_draft("Structure")).unwrap();

        assert_eq!(store.get(x.id).unwrap().stages.len(), 2);
        assert!(store.get(y.id).unwrap().stages.is_empty());
    }

    #[test]
    fn test_removing_last_stage_leaves_empty_list() {
        let store = store();
        let job = store.add(job_draft("X")).unwrap();
        let stage = store.add_stage(job.id, stage_draft("Foundation")).unwrap();

        store.remove_stage(job.id, stage.id).unwrap();
        assert!(store.get(job.id).unwrap().stages.is_empty());
    }

    #[test]
    fn test_child_op_on_missing_parent_is_not_found() {
        let store = store();
        let err = store
            .add_stage(new_entity_id(), stage_draft("Foundation"))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_child_update_merges_and_keeps_siblings() {
        let store = store();
        let job = store.add(job_draft("X")).unwrap();
        let a = store.add_stage(job.id, stage_draft("Foundation")).unwrap();
        let b = store.add_stage(job.id, stage_draft("Structure")).unwrap();

        store
            .update_stage(
                job.id,
                a.id,
                StagePatch {
                    progress: Some(60),
                    status: Some(StageStatus::InProgress),
                    ..Default::default()
                },
            )
            .unwrap();

        let reloaded = store.get(job.id).unwrap();
        let updated = reloaded.stages.iter().find(|s| s.id == a.id).unwrap();
        assert_eq!(updated.progress, 60);
        assert_eq!(updated.name, "Foundation");
        let sibling = reloaded.stages.iter().find(|s| s.id == b.id).unwrap();
        assert_eq!(sibling.status, StageStatus::Pending);
    }

    #[tokio::test]
    async fn test_child_mutation_touches_parent() {
        let created = Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 4, 10, 8, 0, 0).unwrap();

        let staging = store();
        let job = staging.add(job_draft("X")).unwrap();

        let store = JobStore::new(
            Arc::new(SeedSource::new(staging.all()).with_delay(Duration::ZERO)),
            Arc::new(FixedClock(later)),
        );
        store.load().await;

        store
            .add_budget_line(
                job.id,
                BudgetLineDraft {
                    category: "Material".to_string(),
                    description: String::new(),
                    planned: 200_000_000,
                    realized: 0,
                },
            )
            .unwrap();

        let reloaded = store.get(job.id).unwrap();
        assert_eq!(reloaded.created_at(), created);
        assert_eq!(reloaded.updated_at(), later);
    }

    #[test]
    fn test_amendment_triad() {
        let store = store();
        let job = store.add(job_draft("X")).unwrap();

        let amendment = store
            .add_amendment(
                job.id,
                AmendmentDraft {
                    number: "ADD-01".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                    description: "Extra work".to_string(),
                    value_delta: 150_000_000,
                },
            )
            .unwrap();
        assert_eq!(store.get(job.id).unwrap().effective_value(), 1_150_000_000);

        store
            .update_amendment(
                job.id,
                amendment.id,
                AmendmentPatch {
                    value_delta: Some(100_000_000),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.get(job.id).unwrap().effective_value(), 1_100_000_000);

        store.remove_amendment(job.id, amendment.id).unwrap();
        assert!(store.get(job.id).unwrap().amendments.is_empty());
    }
}
