//! # Identifier Source
//!
//! Every entity and brush in a map carries a GUID. Uniqueness is
//! probabilistic: identifiers are random 128-bit values and are never
//! checked against each other.

use std::fmt;
use uuid::Uuid;

/// A map identifier, rendered as `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`.
///
/// # Example
///
/// ```rust
/// use colmap_map::Guid;
///
/// let guid = Guid::from_u128(0xabcdef);
/// assert_eq!(guid.to_string(), "{00000000-0000-0000-0000-000000ABCDEF}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid(Uuid);

impl Guid {
    /// Wraps a raw 128-bit value.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:X}}}", self.0.hyphenated())
    }
}

/// Capability that hands out fresh identifiers.
///
/// Takes `&self` so a single source can be shared; each call is independent.
pub trait IdSource {
    fn fresh_id(&self) -> Guid;
}

/// Random (version 4) UUIDs from the operating system's generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn fresh_id(&self) -> Guid {
        Guid(Uuid::new_v4())
    }
}
