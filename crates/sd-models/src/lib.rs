//! # sd-models
//!
//! Domain models for Sitedesk.
//!
//! One module per record kind. Each entity carries a generated identifier
//! plus created/updated timestamps and comes with two DTOs: a `*Draft`
//! (create payload, required-field validation) and a `*Patch` (partial
//! update, merged field-by-field).

pub mod archive;
pub mod equipment;
pub mod job;
pub mod lead;
pub mod legal;
pub mod personnel;
pub mod profile;
pub mod tender;

pub use archive::*;
pub use equipment::*;
pub use job::*;
pub use lead::*;
pub use legal::*;
pub use personnel::*;
pub use profile::*;
pub use tender::*;
