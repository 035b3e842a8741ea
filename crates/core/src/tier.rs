//! Subscription tier table and capability flags.
//!
//! Exactly one row per rank, stored in rank order so lookup is a direct
//! index by discriminant. Rows are immutable configuration data.

use serde::Serialize;

use crate::rank::Rank;

/// One subscription tier row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTier {
    pub rank: Rank,
    pub monthly_price: u32,
    pub yearly_price: u32,
    /// Marketing bullet points shown on the pricing page.
    pub perks: &'static [&'static str],
    /// Cap on visible destinations; `None` means unlimited.
    pub destination_limit: Option<u32>,
    pub has_ai_chat: bool,
    pub has_reviews: bool,
    pub has_exclusive_deals: bool,
    pub has_priority_support: bool,
    pub has_vip_content: bool,
    pub has_personal_assistant: bool,
    pub has_early_booking: bool,
    pub has_secret_realms: bool,
}

/// All tiers, ordered by rank.
pub static TIERS: &[SubscriptionTier] = &[
    SubscriptionTier {
        rank: Rank::Acolyte,
        monthly_price: 0,
        yearly_price: 0,
        perks: &[
            "Basic access to 5 locations",
            "Limited reviews viewing",
            "Standard booking priority",
            "Basic customer support",
        ],
        destination_limit: Some(5),
        has_ai_chat: false,
        has_reviews: false,
        has_exclusive_deals: false,
        has_priority_support: false,
        has_vip_content: false,
        has_personal_assistant: false,
        has_early_booking: false,
        has_secret_realms: false,
    },
    SubscriptionTier {
        rank: Rank::Inquisitor,
        monthly_price: 199,
        yearly_price: 1_999,
        perks: &[
            "Access to 15 locations",
            "Use Darth ZEN AI assistant",
            "Leave and read all reviews",
            "Standard booking priority",
            "Email support",
        ],
        destination_limit: Some(15),
        has_ai_chat: true,
        has_reviews: true,
        has_exclusive_deals: false,
        has_priority_support: false,
        has_vip_content: false,
        has_personal_assistant: false,
        has_early_booking: false,
        has_secret_realms: false,
    },
    SubscriptionTier {
        rank: Rank::Lord,
        monthly_price: 499,
        yearly_price: 4_999,
        perks: &[
            "Access to all public locations",
            "Full Darth ZEN capabilities",
            "Exclusive deals and discounts",
            "Priority AI support",
            "Advanced booking features",
            "VIP customer service",
        ],
        destination_limit: None,
        has_ai_chat: true,
        has_reviews: true,
        has_exclusive_deals: true,
        has_priority_support: true,
        has_vip_content: false,
        has_personal_assistant: false,
        has_early_booking: true,
        has_secret_realms: false,
    },
    SubscriptionTier {
        rank: Rank::Darth,
        monthly_price: 999,
        yearly_price: 9_499,
        perks: &[
            "Access to ALL locations including secret realms",
            "Personal Sith assistant",
            "VIP exclusive content",
            "Early access to new destinations",
            "Custom itinerary planning",
            "Direct line to Darth ZEN",
            "Unlimited booking modifications",
            "Concierge services",
        ],
        destination_limit: None,
        has_ai_chat: true,
        has_reviews: true,
        has_exclusive_deals: true,
        has_priority_support: true,
        has_vip_content: true,
        has_personal_assistant: true,
        has_early_booking: true,
        has_secret_realms: true,
    },
];

/// The tier row for a rank.
///
/// Total: every rank has exactly one row. Combined with [`Rank::resolve`]
/// this gives the external lookup contract -- unknown rank strings fall back
/// to the Acolyte tier, never an error.
pub fn tier_for(rank: Rank) -> &'static SubscriptionTier {
    &TIERS[rank as usize]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
