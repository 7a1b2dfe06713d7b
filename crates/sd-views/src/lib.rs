//! # sd-views
//!
//! Pure derived-view helpers: presentation facts computed from raw
//! records. Everything here is deterministic given explicit inputs;
//! "now" is always a parameter, never read from the wall clock.

pub mod currency;
pub mod dates;
pub mod expiry;

pub use currency::*;
pub use dates::*;
pub use expiry::*;
