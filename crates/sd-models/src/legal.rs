//! Legal document model
//!
//! Company permits, certificates, deeds and the like. The validity date
//! feeds the expiry-window classification in `sd-views`.

use chrono::{DateTime, NaiveDate, Utc};
use sd_core::{EntityId, Record, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegalDocType {
    BusinessPermit,
    Certificate,
    Deed,
    TaxId,
    #[default]
    Other,
}

impl LegalDocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessPermit => "business_permit",
            Self::Certificate => "certificate",
            Self::Deed => "deed",
            Self::TaxId => "tax_id",
            Self::Other => "other",
        }
    }
}

/// Legal document entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    pub id: EntityId,

    pub name: String,
    pub doc_type: LegalDocType,
    pub number: String,

    pub issued_date: NaiveDate,

    /// Expiry classification keys off this date
    pub valid_until: NaiveDate,

    pub file_url: Option<String>,

    /// Whether renewal reminders are wanted for this document
    pub reminder: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for a legal document.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocumentDraft {
    #[validate(length(min = 1))]
    pub name: String,

    #[serde(default)]
    pub doc_type: LegalDocType,

    #[validate(length(min = 1))]
    pub number: String,

    pub issued_date: NaiveDate,
    pub valid_until: NaiveDate,

    #[serde(default)]
    pub file_url: Option<String>,

    #[serde(default)]
    pub reminder: bool,
}

/// Partial update for a legal document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocumentPatch {
    pub name: Option<String>,
    pub doc_type: Option<LegalDocType>,
    pub number: Option<String>,
    pub issued_date: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub file_url: Option<Option<String>>,
    pub reminder: Option<bool>,
}

impl Timestamped for LegalDocument {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for LegalDocument {
    type Draft = LegalDocumentDraft;
    type Patch = LegalDocumentPatch;

    const TYPE_NAME: &'static str = "LegalDocument";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: LegalDocumentDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            doc_type: draft.doc_type,
            number: draft.number,
            issued_date: draft.issued_date,
            valid_until: draft.valid_until,
            file_url: draft.file_url,
            reminder: draft.reminder,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: LegalDocumentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(doc_type) = patch.doc_type {
            self.doc_type = doc_type;
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
        if let Some(file_url) = patch.file_url {
            self.file_url = file_url;
        }
        if let Some(reminder) = patch.reminder {
            self.reminder = reminder;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
