//! Active job model
//!
//! The aggregate root of the execution phase. A job owns three nested
//! child collections: work stages, budget lines, and contract amendments.
//! Children are addressed by (job id, child id) and are never reachable
//! as top-level entities.

use chrono::{DateTime, NaiveDate, Utc};
use sd_core::{ChildRecord, EntityId, Record, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Job lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Preparation,
    Running,
    Done,
    Handover,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparation => "preparation",
            Self::Running => "running",
            Self::Done => "done",
            Self::Handover => "handover",
        }
    }
}

/// Stage status within a job's execution timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

/// A scheduled phase within a job. Identifier is unique within the
/// parent job only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: EntityId,
    pub name: String,
    /// Completion percent, 0..=100
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: StageStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDraft {
    pub name: String,
    #[serde(default)]
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: StageStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagePatch {
    pub name: Option<String>,
    pub progress: Option<u8>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<StageStatus>,
}

impl ChildRecord for Stage {
    type Draft = StageDraft;
    type Patch = StagePatch;

    const TYPE_NAME: &'static str = "Stage";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: StageDraft, id: EntityId) -> Self {
        Self {
            id,
            name: draft.name,
            progress: draft.progress,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
        }
    }

    fn apply_patch(&mut self, patch: StagePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(date) = patch.start_date {
            self.start_date = date;
        }
        if let Some(date) = patch.end_date {
            self.end_date = date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// A planned-vs-realized financial allocation within a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub id: EntityId,
    pub category: String,
    pub description: String,
    /// Planned amount in rupiah
    pub planned: i64,
    /// Realized amount in rupiah
    pub realized: i64,
}

impl BudgetLine {
    /// Remaining budget; negative when overspent.
    pub fn remaining(&self) -> i64 {
        self.planned - self.realized
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLineDraft {
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub planned: i64,
    #[serde(default)]
    pub realized: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLinePatch {
    pub category: Option<String>,
    pub description: Option<String>,
    pub planned: Option<i64>,
    pub realized: Option<i64>,
}

impl ChildRecord for BudgetLine {
    type Draft = BudgetLineDraft;
    type Patch = BudgetLinePatch;

    const TYPE_NAME: &'static str = "BudgetLine";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: BudgetLineDraft, id: EntityId) -> Self {
        Self {
            id,
            category: draft.category,
            description: draft.description,
            planned: draft.planned,
            realized: draft.realized,
        }
    }

    fn apply_patch(&mut self, patch: BudgetLinePatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(planned) = patch.planned {
            self.planned = planned;
        }
        if let Some(realized) = patch.realized {
            self.realized = realized;
        }
    }
}

/// A recorded contractual change (value or scope) on a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amendment {
    pub id: EntityId,
    /// Amendment number as printed on the document
    pub number: String,
    pub date: NaiveDate,
    pub description: String,
    /// Signed change to the contract value in rupiah
    pub value_delta: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentDraft {
    pub number: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value_delta: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentPatch {
    pub number: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub value_delta: Option<i64>,
}

impl ChildRecord for Amendment {
    type Draft = AmendmentDraft;
    type Patch = AmendmentPatch;

    const TYPE_NAME: &'static str = "Amendment";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: AmendmentDraft, id: EntityId) -> Self {
        Self {
            id,
            number: draft.number,
            date: draft.date,
            description: draft.description,
            value_delta: draft.value_delta,
        }
    }

    fn apply_patch(&mut self, patch: AmendmentPatch) {
        if let Some(number) = patch.number {
            self.number = number;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(delta) = patch.value_delta {
            self.value_delta = delta;
        }
    }
}

/// Active job entity (aggregate root).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: EntityId,

    pub contract_number: String,

    /// Project name
    pub name: String,

    pub client: String,

    /// Contract value in rupiah
    pub contract_value: i64,

    /// Person in charge
    pub owner: String,

    /// Assigned personnel, by id (unvalidated reference)
    pub team: Vec<EntityId>,

    pub status: JobStatus,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Overall completion percent, 0..=100
    pub progress: u8,

    pub stages: Vec<Stage>,
    pub budget: Vec<BudgetLine>,
    pub amendments: Vec<Amendment>,

    /// Whether the job originated from a won tender
    pub from_tender: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Contract value including all amendment deltas.
    pub fn effective_value(&self) -> i64 {
        self.contract_value + self.amendments.iter().map(|a| a.value_delta).sum::<i64>()
    }
}

/// Create payload for a job. New jobs start with empty child lists.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    #[validate(length(min = 1))]
    pub contract_number: String,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub client: String,

    pub contract_value: i64,

    #[validate(length(min = 1))]
    pub owner: String,

    #[serde(default)]
    pub team: Vec<EntityId>,

    #[serde(default)]
    pub status: JobStatus,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(default)]
    pub progress: u8,

    #[serde(default)]
    pub from_tender: bool,
}

/// Partial update for a job. Child collections are mutated through the
/// dedicated store operations, not through this patch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub contract_number: Option<String>,
    pub name: Option<String>,
    pub client: Option<String>,
    pub contract_value: Option<i64>,
    pub owner: Option<String>,
    pub team: Option<Vec<EntityId>>,
    pub status: Option<JobStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress: Option<u8>,
    pub from_tender: Option<bool>,
}

impl Timestamped for Job {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for Job {
    type Draft = JobDraft;
    type Patch = JobPatch;

    const TYPE_NAME: &'static str = "Job";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: JobDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            contract_number: draft.contract_number,
            name: draft.name,
            client: draft.client,
            contract_value: draft.contract_value,
            owner: draft.owner,
            team: draft.team,
            status: draft.status,
            start_date: draft.start_date,
            end_date: draft.end_date,
            progress: draft.progress,
            stages: vec![],
            budget: vec![],
            amendments: vec![],
            from_tender: draft.from_tender,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: JobPatch) {
        if let Some(number) = patch.contract_number {
            self.contract_number = number;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(client) = patch.client {
            self.client = client;
        }
        if let Some(value) = patch.contract_value {
            self.contract_value = value;
        }
        if let Some(owner) = patch.owner {
            self.owner = owner;
        }
        if let Some(team) = patch.team {
            self.team = team;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.start_date {
            self.start_date = date;
        }
        if let Some(date) = patch.end_date {
            self.end_date = date;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(from_tender) = patch.from_tender {
            self.from_tender = from_tender;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
