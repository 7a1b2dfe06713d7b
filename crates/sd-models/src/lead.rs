//! Pre-contract lead model
//!
//! A lead is an opportunity negotiated directly with a client, before any
//! competitive tender is involved.

use chrono::{DateTime, NaiveDate, Utc};
use sd_core::{EntityId, Record, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lead lifecycle status. Forward-biased workflow, but any status may be
/// set directly; there is no transition enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    Prospect,
    Offer,
    Negotiation,
    Contracted,
    Cancelled,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prospect => "prospect",
            Self::Offer => "offer",
            Self::Negotiation => "negotiation",
            Self::Contracted => "contracted",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Pre-contract lead entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: EntityId,

    /// Project name under discussion
    pub name: String,

    /// Client the lead is negotiated with
    pub client: String,

    /// Estimated contract value in rupiah
    pub estimated_value: i64,

    pub status: LeadStatus,

    pub start_date: NaiveDate,
    pub target_date: NaiveDate,

    /// Person in charge
    pub owner: String,

    pub notes: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for a lead.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub client: String,

    pub estimated_value: i64,

    #[serde(default)]
    pub status: LeadStatus,

    pub start_date: NaiveDate,
    pub target_date: NaiveDate,

    #[validate(length(min = 1))]
    pub owner: String,

    #[serde(default)]
    pub notes: String,
}

/// Partial update for a lead.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPatch {
    pub name: Option<String>,
    pub client: Option<String>,
    pub estimated_value: Option<i64>,
    pub status: Option<LeadStatus>,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    pub owner: Option<String>,
    pub notes: Option<String>,
}

impl Timestamped for Lead {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for Lead {
    type Draft = LeadDraft;
    type Patch = LeadPatch;

    const TYPE_NAME: &'static str = "Lead";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: LeadDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            client: draft.client,
            estimated_value: draft.estimated_value,
            status: draft.status,
            start_date: draft.start_date,
            target_date: draft.target_date,
            owner: draft.owner,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: LeadPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(client) = patch.client {
            self.client = client;
        }
        if let Some(value) = patch.estimated_value {
            self.estimated_value = value;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.start_date {
            self.start_date = date;
        }
        if let Some(date) = patch.target_date {
            self.target_date = date;
        }
        if let Some(owner) = patch.owner {
            self.owner = owner;
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
    use chrono::TimeZone;
    use validator::Validate;

    fn draft() -> LeadDraft {
        LeadDraft {
            name: "Office Renovation".to_string(),
            client: "PT Maju Jaya".to_string(),
            estimated_value: 750_000_000,
            status: LeadStatus::Prospect,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            target_date: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
            owner: "Budi".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_from_draft_sets_identity_and_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();
        let id = sd_core::new_entity_id();
        let lead = Lead::from_draft(draft(), id, now);

        assert_eq!(lead.id, id);
        assert_eq!(lead.created_at, now);
        assert_eq!(lead.updated_at, now);
        assert_eq!(lead.status, LeadStatus::Prospect);
    }

    #[test]
    fn test_patch_merges_only_some_fields() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();
        let mut lead = Lead::from_draft(draft(), sd_core::new_entity_id(), now);

        lead.apply_patch(LeadPatch {
            status: Some(LeadStatus::Negotiation),
            estimated_value: Some(800_000_000),
            ..Default::default()
        });

        assert_eq!(lead.status, LeadStatus::Negotiation);
        assert_eq!(lead.estimated_value, 800_000_000);
        assert_eq!(lead.client, "PT Maju Jaya");
        assert_eq!(lead.created_at, now);
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let mut d = draft();
        d.name = String::new();
        assert!(d.validate().is_err());
    }
}
