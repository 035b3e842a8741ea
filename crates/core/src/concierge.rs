//! Darth ZEN, the rule-based Sith concierge.
//!
//! Maps one free-text utterance plus the caller's rank to exactly one reply.
//! Stateless request/response: no conversation memory is kept between calls
//! (the once-per-session welcome message is a concern of the calling UI).
//!
//! Replies come from an explicit ordered rule table. Evaluation runs top to
//! bottom and stops at the first rule that produces a reply; a rule may also
//! decline (e.g. a gravity band with no candidate worlds), in which case
//! evaluation falls through to the next rule. Randomized picks draw from an
//! injected [`Rng`] so tests can seed a deterministic generator.

use rand::Rng;

use crate::catalog;
use crate::data::DESTINATIONS;
use crate::destination::Destination;
use crate::rank::Rank;
use crate::tier::tier_for;

// ---------------------------------------------------------------------------
// Fixed replies
// ---------------------------------------------------------------------------

/// Shown when the caller's tier lacks AI chat access.
pub const UPGRADE_REQUIRED: &str = "Ah, young Acolyte... Your current rank grants you only basic access. To unlock my full wisdom, you must ascend to Inquisitor rank or higher. The path to power requires... investment.";

const BOOKING_REPLY: &str = "To book your dark journey, simply select 'Enter the Darkness' on any destination that calls to your soul. I will guide you through the booking process... for a price, of course.";

const HELP_REPLY: &str = "I can guide you to destinations based on adventure level, danger, gravity, or specific worlds. Ask me about planets, booking procedures, or let me recommend places that match your... particular tastes for darkness.";

/// Generic in-character non-answers used when no rule matches.
pub const FALLBACK_REPLIES: &[&str] = &[
    "Interesting question, young one. The dark side reveals many secrets to those who know how to ask...",
    "Your curiosity serves you well. Perhaps you seek knowledge of our darker destinations?",
    "The Force flows through all things... including travel recommendations. Be more specific with your desires.",
    "Patience, apprentice. The path to the perfect destination requires clarity of purpose.",
    "I sense confusion in you. Ask me about specific worlds, adventure levels, or booking procedures.",
];

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// Which stat a superlative query asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Superlative {
    Adventure,
    Danger,
}

/// One of the three named gravity ranges used for recommendation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityBand {
    /// 0.9 <= g <= 1.1.
    Standard,
    /// g < 0.8.
    Low,
    /// g > 1.5.
    High,
}

/// One entry in the ordered rule chain.
#[derive(Debug, Clone, Copy)]
enum IntentRule {
    Superlative(Superlative),
    GravityBand(GravityBand),
    DestinationLookup,
    Booking,
    Pricing,
    Subscription,
    Help,
}

/// The rule chain, in evaluation order. The access gate runs before this
/// table and the random fallback after it.
const RULES: &[IntentRule] = &[
    IntentRule::Superlative(Superlative::Adventure),
    IntentRule::Superlative(Superlative::Danger),
    IntentRule::GravityBand(GravityBand::Standard),
    IntentRule::GravityBand(GravityBand::Low),
    IntentRule::GravityBand(GravityBand::High),
    IntentRule::DestinationLookup,
    IntentRule::Booking,
    IntentRule::Pricing,
    IntentRule::Subscription,
    IntentRule::Help,
];

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Produce the concierge's reply to one utterance.
///
/// Total over all string inputs: always returns some reply, never errors.
/// The caller's rank is an immutable per-call input and is never cached.
pub fn respond<R: Rng>(message: &str, rank: Rank, rng: &mut R) -> String {
    respond_in(message, rank, DESTINATIONS, rng)
}

/// Rule evaluation over an explicit catalog slice. Production always passes
/// [`DESTINATIONS`]; tests substitute sparse tables to reach branches the
/// shipped catalog never hits (e.g. a gravity band with no candidates).
fn respond_in<R: Rng>(message: &str, rank: Rank, table: &[Destination], rng: &mut R) -> String {
    let message = message.to_lowercase();

    // Access gate: short-circuits every other rule.
    if !tier_for(rank).has_ai_chat && rank == Rank::Acolyte {
        return UPGRADE_REQUIRED.to_string();
    }

    for rule in RULES {
        if let Some(reply) = rule.try_respond(&message, rank, table, rng) {
            return reply;
        }
    }

    FALLBACK_REPLIES[rng.random_range(0..FALLBACK_REPLIES.len())].to_string()
}

impl IntentRule {
    fn try_respond<R: Rng>(
        self,
        message: &str,
        rank: Rank,
        table: &[Destination],
        rng: &mut R,
    ) -> Option<String> {
        match self {
            IntentRule::Superlative(axis) => axis.try_respond(message, table),
            IntentRule::GravityBand(band) => band.try_respond(message, table, rng),
            IntentRule::DestinationLookup => destination_lookup(message, table),
            IntentRule::Booking => contains_any(message, &["book", "reservation"])
                .then(|| BOOKING_REPLY.to_string()),
            IntentRule::Pricing => {
                contains_any(message, &["price", "cost", "expensive"]).then(pricing_reply)
            }
            IntentRule::Subscription => contains_any(message, &["subscription", "upgrade", "tier"])
                .then(|| subscription_reply(rank)),
            IntentRule::Help => contains_any(message, &["help", "what can you do"])
                .then(|| HELP_REPLY.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule implementations
// ---------------------------------------------------------------------------

impl Superlative {
    fn try_respond(self, message: &str, table: &[Destination]) -> Option<String> {
        let phrases: &[&str] = match self {
            Superlative::Adventure => &["highest adventure", "most adventurous"],
            Superlative::Danger => &["most dangerous", "highest danger"],
        };
        if !contains_any(message, phrases) {
            return None;
        }
        let best = self.pick(table)?;
        Some(match self {
            Superlative::Adventure => format!(
                "Curious about thrills, are you? {} offers the highest adventure rating at {}/10. {} But beware... such excitement comes with considerable risk.",
                best.name, best.adventure_level, best.background_lore
            ),
            Superlative::Danger => format!(
                "Seeking death, are you? {} presents the greatest danger at {}/10. {} Only the truly powerful survive such places.",
                best.name, best.danger_level, best.background_lore
            ),
        })
    }

    fn level(self, dest: &Destination) -> u8 {
        match self {
            Superlative::Adventure => dest.adventure_level,
            Superlative::Danger => dest.danger_level,
        }
    }

    /// Left-fold maximum: on ties the first destination in table order keeps
    /// the title.
    fn pick(self, table: &[Destination]) -> Option<&Destination> {
        table
            .iter()
            .reduce(|best, dest| if self.level(dest) > self.level(best) { dest } else { best })
    }
}

impl GravityBand {
    /// Whether a gravity value falls inside this band.
    pub fn contains(self, gravity: f64) -> bool {
        match self {
            GravityBand::Standard => (0.9..=1.1).contains(&gravity),
            GravityBand::Low => gravity < 0.8,
            GravityBand::High => gravity > 1.5,
        }
    }

    fn matches_message(self, message: &str) -> bool {
        let phrases: &[&str] = match self {
            GravityBand::Standard => &["medium gravity", "earth gravity", "1g"],
            GravityBand::Low => &["low gravity", "light gravity"],
            GravityBand::High => &["high gravity", "heavy gravity"],
        };
        contains_any(message, phrases)
    }

    fn try_respond<R: Rng>(self, message: &str, table: &[Destination], rng: &mut R) -> Option<String> {
        if !self.matches_message(message) {
            return None;
        }
        let candidates: Vec<&Destination> = table
            .iter()
            .filter(|dest| self.contains(dest.gravity_level))
            .collect();
        if candidates.is_empty() {
            // An empty band produces no reply; evaluation falls through.
            return None;
        }
        let pick = candidates[rng.random_range(0..candidates.len())];
        Some(match self {
            GravityBand::Standard => format!(
                "For those who prefer familiar gravitational embrace, I recommend {} at {}G. {} A wise choice for maintaining your physical form.",
                pick.name, pick.gravity_level, pick.description
            ),
            GravityBand::Low => format!(
                "To float like a Force ghost, consider {} at {}G. {} Your movements will be... enhanced.",
                pick.name, pick.gravity_level, pick.description
            ),
            GravityBand::High => format!(
                "For those who seek to test their physical limits, {} at {}G will crush the weak. {} Only the strong survive such worlds.",
                pick.name, pick.gravity_level, pick.description
            ),
        })
    }
}

/// First destination in table order whose lowercased name or any keyword
/// appears as a substring of the message.
fn destination_lookup(message: &str, table: &[Destination]) -> Option<String> {
    let dest = table.iter().find(|dest| {
        message.contains(&dest.name.to_lowercase())
            || dest.keywords.iter().any(|keyword| message.contains(keyword))
    })?;
    let first_note = dest.survival_notes.first().copied().unwrap_or_default();
    Some(format!(
        "Ah, {}... {} Adventure Level: {}/10, Danger: {}/10, Gravity: {}G. {} Proceed with caution, young one.",
        dest.name,
        dest.background_lore,
        dest.adventure_level,
        dest.danger_level,
        dest.gravity_level,
        first_note
    ))
}

fn pricing_reply() -> String {
    let (min, max) = catalog::price_range();
    format!(
        "Power has its price, young one. Our destinations range from {} to {} Imperial Credits. The most exclusive experiences require... significant investment. But what is credits compared to unlimited power?",
        format_credits(min),
        format_credits(max)
    )
}

fn subscription_reply(rank: Rank) -> String {
    format!(
        "Your current rank is {}. To unlock greater power and access to forbidden realms, consider ascending to a higher tier. Each rank grants new privileges... and new responsibilities.",
        rank.as_str()
    )
}

fn contains_any(message: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| message.contains(needle))
}

/// Format a credit amount with thousands separators, e.g. `12000` -> `12,000`.
fn format_credits(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
