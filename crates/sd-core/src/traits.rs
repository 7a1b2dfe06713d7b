//! Core traits shared by every entity collection
//!
//! Each of the nine record kinds implements [`Record`] once; the generic
//! store in `sd-stores` is written entirely against this trait.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// Primary key type for all entities.
pub type EntityId = Uuid;

/// Generate a fresh entity identifier.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}

/// Trait for entities with timestamps (created_at, updated_at).
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

/// A top-level entity owned by a record store.
///
/// `Draft` is the create payload (record minus id and timestamps);
/// `Patch` is the partial-update payload (every field optional).
pub trait Record: Timestamped + Clone + Send + Sync + 'static {
    /// Create payload; required-field presence is enforced through
    /// `validator` before a draft becomes a record.
    type Draft: Validate + Send;

    /// Partial-update payload, merged field-by-field.
    type Patch: Send;

    /// Human-readable type name for error messages.
    const TYPE_NAME: &'static str;

    fn id(&self) -> EntityId;

    /// Build a full record from a draft, assigning identity and setting
    /// both timestamps to `now`.
    fn from_draft(draft: Self::Draft, id: EntityId, now: DateTime<Utc>) -> Self;

    /// Merge the `Some` fields of a patch into the record. Does not touch
    /// timestamps; the store refreshes `updated_at` via [`Record::touch`].
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Refresh `updated_at`.
    fn touch(&mut self, now: DateTime<Utc>);
}

/// Child entities nested inside an aggregate (stages, budget lines,
/// amendments, certificates). Identifier is unique within the parent only.
pub trait ChildRecord: Clone + Send + Sync + 'static {
    type Draft: Send;
    type Patch: Send;

    const TYPE_NAME: &'static str;

    fn id(&self) -> EntityId;

    fn from_draft(draft: Self::Draft, id: EntityId) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);
}
