//! Tender model
//!
//! A competitive bidding process run by an agency, with a published
//! ceiling value and the firm's submitted bid. Personnel and equipment
//! assignments are plain identifier lists; nothing enforces that the
//! referenced records exist.

use chrono::{DateTime, NaiveDate, Utc};
use sd_core::{EntityId, Record, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Tender lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TenderStatus {
    #[default]
    Preparation,
    Submission,
    Evaluation,
    Won,
    Lost,
}

impl TenderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparation => "preparation",
            Self::Submission => "submission",
            Self::Evaluation => "evaluation",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Whether the tender has reached a terminal outcome.
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Tender entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: EntityId,

    pub name: String,

    /// Procuring agency
    pub agency: String,

    /// Published ceiling value in rupiah
    pub ceiling_value: i64,

    /// Submitted bid value in rupiah
    pub bid_value: i64,

    pub status: TenderStatus,

    pub tender_date: NaiveDate,

    /// Announcement date, once known
    pub result_date: Option<NaiveDate>,

    /// Assigned personnel, by id (unvalidated reference)
    pub personnel_ids: Vec<EntityId>,

    /// Assigned equipment, by id (unvalidated reference)
    pub equipment_ids: Vec<EntityId>,

    /// Names of submitted documents
    pub documents: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for a tender.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TenderDraft {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub agency: String,

    pub ceiling_value: i64,
    pub bid_value: i64,

    #[serde(default)]
    pub status: TenderStatus,

    pub tender_date: NaiveDate,

    #[serde(default)]
    pub result_date: Option<NaiveDate>,

    #[serde(default)]
    pub personnel_ids: Vec<EntityId>,

    #[serde(default)]
    pub equipment_ids: Vec<EntityId>,

    #[serde(default)]
    pub documents: Vec<String>,
}

/// Partial update for a tender.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderPatch {
    pub name: Option<String>,
    pub agency: Option<String>,
    pub ceiling_value: Option<i64>,
    pub bid_value: Option<i64>,
    pub status: Option<TenderStatus>,
    pub tender_date: Option<NaiveDate>,
    /// `Some(None)` clears a previously set result date.
    pub result_date: Option<Option<NaiveDate>>,
    pub personnel_ids: Option<Vec<EntityId>>,
    pub equipment_ids: Option<Vec<EntityId>>,
    pub documents: Option<Vec<String>>,
}

impl Timestamped for Tender {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for Tender {
    type Draft = TenderDraft;
    type Patch = TenderPatch;

    const TYPE_NAME: &'static str = "Tender";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: TenderDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            agency: draft.agency,
            ceiling_value: draft.ceiling_value,
            bid_value: draft.bid_value,
            status: draft.status,
            tender_date: draft.tender_date,
            result_date: draft.result_date,
            personnel_ids: draft.personnel_ids,
            equipment_ids: draft.equipment_ids,
            documents: draft.documents,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: TenderPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(agency) = patch.agency {
            self.agency = agency;
        }
        if let Some(value) = patch.ceiling_value {
            self.ceiling_value = value;
        }
        if let Some(value) = patch.bid_value {
            self.bid_value = value;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.tender_date {
            self.tender_date = date;
        }
        if let Some(result_date) = patch.result_date {
            self.result_date = result_date;
        }
        if let Some(ids) = patch.personnel_ids {
            self.personnel_ids = ids;
        }
        if let Some(ids) = patch.equipment_ids {
            self.equipment_ids = ids;
        }
        if let Some(documents) = patch.documents {
            self.documents = documents;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_result_date_can_be_set_and_cleared() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
        let draft = TenderDraft {
            name: "Bridge Rehabilitation".to_string(),
            agency: "Dinas PUPR".to_string(),
            ceiling_value: 12_000_000_000,
            bid_value: 11_400_000_000,
            status: TenderStatus::Evaluation,
            tender_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            result_date: None,
            personnel_ids: vec![],
            equipment_ids: vec![],
            documents: vec!["bid-bond.pdf".to_string()],
        };
        let mut tender = Tender::from_draft(draft, sd_core::new_entity_id(), now);

        let announced = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        tender.apply_patch(TenderPatch {
            result_date: Some(Some(announced)),
            status: Some(TenderStatus::Won),
            ..Default::default()
        });
        assert_eq!(tender.result_date, Some(announced));
        assert!(tender.status.is_decided());

        tender.apply_patch(TenderPatch {
            result_date: Some(None),
            ..Default::default()
        });
        assert_eq!(tender.result_date, None);
    }
}
