//! Stable identifiers for profile entities
//!
//! Collections are addressed by position in the mutation API, but references
//! between entities (a cash flow tied to a property sale) use a surrogate id
//! assigned at creation, so renaming or reordering a holding never breaks a
//! link.

use serde::{Deserialize, Serialize};

/// Unique identifier for an [`AccountHolding`](super::AccountHolding) within
/// one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HoldingId(pub u32);
