//! Destination record types.
//!
//! The catalog is compile-time configuration data, not a mutable store:
//! every field is `&'static`, and records never change for the process
//! lifetime. Serialized field names are camelCase to match the frontend
//! contract.

use serde::Serialize;

use crate::rank::Rank;

/// A single catalog entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique stable identifier.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub background_lore: &'static str,
    /// 1-10.
    pub adventure_level: u8,
    /// 1-10.
    pub danger_level: u8,
    /// Multiples of standard gravity.
    pub gravity_level: f64,
    /// Display price with unit suffix, e.g. "2,500 Imperial Credits".
    pub price: &'static str,
    pub image: &'static str,
    /// Lowercase search tokens.
    pub keywords: &'static [&'static str],
    pub ratings: Ratings,
    pub reviews: &'static [Review],
    /// Advisory strings; the first entry doubles as a preview.
    pub survival_notes: &'static [&'static str],
    /// Minimum rank needed to view or book this destination.
    pub required_rank: Rank,
}

/// Aggregate guest rating.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ratings {
    /// 0.0-5.0.
    pub average: f64,
    pub count: u32,
}

/// A guest review attached to a destination.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: &'static str,
    pub user_name: &'static str,
    pub user_rank: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub date: &'static str,
    pub ai_generated: bool,
}

impl Destination {
    /// Credit amount parsed from the display price by stripping every
    /// non-digit character.
    pub fn price_credits(&self) -> u32 {
        self.price
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::data::DESTINATIONS;

    #[test]
    fn price_credits_strips_separators_and_suffix() {
        let mustafar = DESTINATIONS
            .iter()
            .find(|d| d.id == "mustafar-volcano-spires")
            .unwrap();
        assert_eq!(mustafar.price, "2,500 Imperial Credits");
        assert_eq!(mustafar.price_credits(), 2_500);
    }

    #[test]
    fn every_price_parses_to_a_positive_amount() {
        for dest in DESTINATIONS {
            assert!(
                dest.price_credits() > 0,
                "{} has an unparseable price: {}",
                dest.id,
                dest.price
            );
        }
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(&DESTINATIONS[0]).unwrap();
        assert!(json.get("backgroundLore").is_some());
        assert!(json.get("adventureLevel").is_some());
        assert!(json.get("requiredRank").is_some());
        assert!(json.get("survivalNotes").is_some());
        assert!(json.get("background_lore").is_none());
    }
}
