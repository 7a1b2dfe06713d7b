//! # sd-stores
//!
//! In-memory record stores for Sitedesk.
//!
//! One [`RecordStore`] per entity type holds the authoritative collection
//! and exposes uniform load/add/update/remove/get operations. The job and
//! personnel stores add nested-child operations on their aggregates. The
//! [`SettingsStore`] holds the persisted company profile and app
//! settings, and [`AppContext`] wires one of everything together.

pub mod context;
pub mod jobs;
pub mod personnel;
pub mod seed;
pub mod settings;
pub mod source;
pub mod store;

pub use context::AppContext;
pub use jobs::JobStore;
pub use personnel::PersonnelStore;
pub use settings::SettingsStore;
pub use source::{DataSource, SeedSource};
pub use store::RecordStore;
