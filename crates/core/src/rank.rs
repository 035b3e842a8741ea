//! The four-level access enumeration gating catalog visibility and chat
//! capability.
//!
//! Rank comparison is by position in the fixed order
//! `Acolyte < Inquisitor < Lord < Darth`, never lexical. Every rank check in
//! the workspace goes through this type; raw string comparisons are off
//! limits outside [`Rank::resolve`].

use serde::{Deserialize, Serialize};

/// Subscriber rank, ordered by privilege.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Rank {
    Acolyte,
    Inquisitor,
    Lord,
    Darth,
}

impl Rank {
    /// All ranks in ascending order of privilege.
    pub const ALL: [Rank; 4] = [Rank::Acolyte, Rank::Inquisitor, Rank::Lord, Rank::Darth];

    /// Resolve a rank string supplied by an external caller.
    ///
    /// Unrecognized, empty, or absent input resolves to the lowest rank --
    /// never to "no access".
    pub fn resolve(input: &str) -> Rank {
        match input {
            "Inquisitor" => Rank::Inquisitor,
            "Lord" => Rank::Lord,
            "Darth" => Rank::Darth,
            _ => Rank::Acolyte,
        }
    }

    /// Display name, matching the values used by the frontend.
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Acolyte => "Acolyte",
            Rank::Inquisitor => "Inquisitor",
            Rank::Lord => "Lord",
            Rank::Darth => "Darth",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
