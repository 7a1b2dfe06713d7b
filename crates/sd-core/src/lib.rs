//! # sd-core
//!
//! Core types and traits for Sitedesk.
//!
//! This crate provides the building blocks shared by every entity store:
//! - Identifier and timestamp primitives
//! - The `Record` trait (draft construction, patch application)
//! - The `Clock` seam for deterministic time under test
//! - Store error types

pub mod clock;
pub mod error;
pub mod traits;

pub use clock::*;
pub use error::*;
pub use traits::*;
