//! # checklist-id
//!
//! Typed identifiers for checklist resources.
//!
//! All resource IDs use a prefixed format: `{prefix}_{ulid}`
//!
//! Examples:
//! - `lst_01HV4Z2WQXKJNM8GPQY6VBKC3D`
//! - `itm_01HV4Z3MXNKPQR9HSTZ7WCMD4E`
//!
//! IDs handed out by an [`IdGenerator`] are strictly increasing, so they are
//! never repeated within a process and sort in the order they were issued.

mod error;
mod generator;
mod macros;
mod types;

pub use error::IdError;
pub use generator::IdGenerator;
pub use types::*;

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;
