//! Equipment model

use chrono::{DateTime, Utc};
use sd_core::{EntityId, Record, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Physical condition of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Good,
    MinorDamage,
    MajorDamage,
    Maintenance,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::MinorDamage => "minor_damage",
            Self::MajorDamage => "major_damage",
            Self::Maintenance => "maintenance",
        }
    }
}

/// Usage status, independent of condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UsageStatus {
    #[default]
    Available,
    InUse,
    UnderRepair,
}

impl UsageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in_use",
            Self::UnderRepair => "under_repair",
        }
    }
}

/// Equipment entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EntityId,

    pub name: String,
    pub category: String,
    pub brand: String,
    pub specification: String,

    pub condition: Condition,
    pub usage: UsageStatus,

    pub last_location: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for equipment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDraft {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub category: String,

    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub specification: String,

    #[serde(default)]
    pub condition: Condition,

    #[serde(default)]
    pub usage: UsageStatus,

    #[serde(default)]
    pub last_location: String,
}

/// Partial update for equipment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub specification: Option<String>,
    pub condition: Option<Condition>,
    pub usage: Option<UsageStatus>,
    pub last_location: Option<String>,
}

impl Timestamped for Equipment {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Record for Equipment {
    type Draft = EquipmentDraft;
    type Patch = EquipmentPatch;

    const TYPE_NAME: &'static str = "Equipment";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(draft: EquipmentDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            brand: draft.brand,
            specification: draft.specification,
            condition: draft.condition,
            usage: draft.usage,
            last_location: draft.last_location,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: EquipmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(specification) = patch.specification {
            self.specification = specification;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(usage) = patch.usage {
            self.usage = usage;
        }
        if let Some(location) = patch.last_location {
            self.last_location = location;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
