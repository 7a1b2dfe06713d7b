//! Personnel model
//!
//! An expert-staff entry with skill tags and a nested certificate list.
//! Certificates are addressed by (personnel id, certificate id) through
//! the personnel store, mirroring the job aggregate's children.

use chrono::{DateTime, NaiveDate, Utc};
use sd_core::{ChildRecord, EntityId, Record, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Availability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    Assigned,
    OnLeave,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Assigned => "assigned",
            Self::OnLeave => "on_leave",
        }
    }
}

/// A professional certificate held by a staff member. Identifier is
/// unique within the parent only. The validity date drives the expiry
/// classification helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: EntityId,
    pub name: String,
    pub number: String,
    pub issued_date: NaiveDate,
    pub valid_until: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDraft {
    pub name: String,
    pub number: String,
    pub issued_date: NaiveDate,
    pub valid_until: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificatePatch {
    pub name: Option<String>,
    pub number: Option<String>,
    pub issued_date: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
}

impl ChildRecord for Certificate {
    type Draft = CertificateDraft;
    type Patch = CertificatePatch;

    const TYPE_NAME: &'static str = "Certificate";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: CertificateDraft, id: EntityId) -> Self {
        Self {
            id,
            name: draft.name,
            number: draft.number,
            issued_date: draft.issued_date,
            valid_until: draft.valid_until,
        }
    }

    fn apply_patch(&mut self, patch: CertificatePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(number) = patch.number {
            self.number = number;
        }
        if let Some(date) = patch.issued_date {
            self.issued_date = date;
        }
        if let Some(date) = patch.valid_until {
            self.valid_until = date;
        }
    }
}

/// Personnel entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personnel {
    pub id: EntityId,

    pub name: String,

    /// Job title
    pub title: String,

    /// Skill tags
    pub skills: Vec<String>,

    pub certificates: Vec<Certificate>,

    pub email: String,
    pub phone: String,

    pub availability: Availability,

    pub photo_url: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for a personnel entry. New entries start with an empty
/// certificate list.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelDraft {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub title: String,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub availability: Availability,

    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Partial update for a personnel entry. Certificates are mutated through
/// the dedicated store operations, not through this patch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub skills: Option<Vec<String>>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub availability: Option<Availability>,
    pub photo_url: Option<Option<String>>,
}

impl Timestamped for Personnel {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for Personnel {
    type Draft = PersonnelDraft;
    type Patch = PersonnelPatch;

    const TYPE_NAME: &'static str = "Personnel";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: PersonnelDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            title: draft.title,
            skills: draft.skills,
            certificates: vec![],
            email: draft.email,
            phone: draft.phone,
            availability: draft.availability,
            photo_url: draft.photo_url,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: PersonnelPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(photo_url) = patch.photo_url {
            self.photo_url = photo_url;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
