//! Application context
//!
//! One explicit object owning one store per entity type, constructed at
//! startup and handed to whatever composes the presentation layer. No
//! ambient per-module singletons.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sd_core::{SettingsError, SharedClock};
use sd_models::{ArchivedJob, Equipment, Lead, LegalDocument, Tender};

use crate::jobs::JobStore;
use crate::personnel::PersonnelStore;
use crate::seed;
use crate::settings::SettingsStore;
use crate::source::SeedSource;
use crate::store::RecordStore;

pub struct AppContext {
    pub leads: RecordStore<Lead>,
    pub tenders: RecordStore<Tender>,
    pub jobs: JobStore,
    pub archive: RecordStore<ArchivedJob>,
    pub personnel: PersonnelStore,
    pub equipment: RecordStore<Equipment>,
    pub legal: RecordStore<LegalDocument>,
    pub settings: SettingsStore,
}

impl AppContext {
    /// Wire every store against the bundled seed data, rehydrating the
    /// settings blob from `settings_path`.
    pub fn new(clock: SharedClock, settings_path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        Self::with_seed_delay(clock, settings_path, Duration::from_millis(300))
    }

    /// As [`AppContext::new`] with a custom simulated fetch delay; tests
    /// pass zero.
    pub fn with_seed_delay(
        clock: SharedClock,
        settings_path: impl Into<PathBuf>,
        delay: Duration,
    ) -> Result<Self, SettingsError> {
        Ok(Self {
            leads: RecordStore::new(
                Arc::new(SeedSource::new(seed::leads()).with_delay(delay)),
                clock.clone(),
            ),
            tenders: RecordStore::new(
                Arc::new(SeedSource::new(seed::tenders()).with_delay(delay)),
                clock.clone(),
            ),
            jobs: JobStore::new(
                Arc::new(SeedSource::new(seed::jobs()).with_delay(delay)),
                clock.clone(),
            ),
            archive: RecordStore::new(
                Arc::new(SeedSource::new(seed::archive()).with_delay(delay)),
                clock.clone(),
            ),
            personnel: PersonnelStore::new(
                Arc::new(SeedSource::new(seed::personnel()).with_delay(delay)),
                clock.clone(),
            ),
            equipment: RecordStore::new(
                Arc::new(SeedSource::new(seed::equipment()).with_delay(delay)),
                clock.clone(),
            ),
            legal: RecordStore::new(
                Arc::new(SeedSource::new(seed::legal_documents()).with_delay(delay)),
                clock,
            ),
            settings: SettingsStore::open(settings_path)?,
        })
    }

    /// Load every record store from its source.
    pub async fn load_all(&self) {
        tokio::join!(
            self.leads.load(),
            self.tenders.load(),
            self.jobs.load(),
            self.archive.load(),
            self.personnel.load(),
            self.equipment.load(),
            self.legal.load(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_core::system_clock;
    use sd_models::{ArchivedJobDraft, JobStatus};

    fn context() -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::with_seed_delay(
            system_clock(),
            dir.path().join("settings.json"),
            Duration::ZERO,
        )
        .unwrap();
        (dir, ctx)
    }

    #[tokio::test]
    async fn test_load_all_populates_every_store() {
        let (_dir, ctx) = context();
        ctx.load_all().await;

        assert!(!ctx.leads.is_empty());
        assert!(!ctx.tenders.is_empty());
        assert!(!ctx.jobs.is_empty());
        assert!(!ctx.archive.is_empty());
        assert!(!ctx.personnel.is_empty());
        assert!(!ctx.equipment.is_empty());
        assert!(!ctx.legal.is_empty());
    }

    #[tokio::test]
    async fn test_archiving_a_job_keeps_the_source() {
        let (_dir, ctx) = context();
        ctx.load_all().await;

        let done = ctx
            .jobs
            .all()
            .into_iter()
            .find(|j| j.status == JobStatus::Running)
            .unwrap();
        let jobs_before = ctx.jobs.len();
        let archive_before = ctx.archive.len();

        let completed = done.end_date;
        let entry = ctx
            .archive
            .add(ArchivedJobDraft::from_job(&done, completed))
            .unwrap();

        assert_eq!(ctx.jobs.len(), jobs_before);
        assert_eq!(ctx.archive.len(), archive_before + 1);
        assert_eq!(entry.job_id, done.id);
        assert_eq!(entry.contract_value, done.effective_value());
    }
}
