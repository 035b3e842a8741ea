//! Catalog Query Engine: pure queries over the destination table.
//!
//! No query here ever errors; an empty result set is a legitimate,
//! silently-returned outcome. All results borrow from the static table.

use std::str::FromStr;

use crate::data::DESTINATIONS;
use crate::destination::Destination;
use crate::error::CoreError;
use crate::rank::Rank;

/// Default number of entries returned by [`top_destinations`].
pub const DEFAULT_TOP_COUNT: i64 = 10;

// ---------------------------------------------------------------------------
// Primitive queries
// ---------------------------------------------------------------------------

/// Free-text search over the catalog.
///
/// An empty or all-whitespace query returns the full catalog in table order.
/// Otherwise a destination matches when the lowercased query is a substring
/// of its name, description, or background lore, or of any keyword. Matching
/// is case-insensitive and substring-based, with no ranking of match quality.
pub fn search(query: &str) -> Vec<&'static Destination> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return DESTINATIONS.iter().collect();
    }
    DESTINATIONS
        .iter()
        .filter(|dest| matches_term(dest, &term))
        .collect()
}

fn matches_term(dest: &Destination, term: &str) -> bool {
    dest.name.to_lowercase().contains(term)
        || dest.description.to_lowercase().contains(term)
        || dest.background_lore.to_lowercase().contains(term)
        || dest.keywords.iter().any(|keyword| keyword.contains(term))
}

/// Destinations visible to a caller of the given rank.
///
/// Access is monotonic: anything granted by a rank is also granted by all
/// higher ranks.
pub fn by_rank(rank: Rank) -> Vec<&'static Destination> {
    DESTINATIONS
        .iter()
        .filter(|dest| dest.required_rank <= rank)
        .collect()
}

/// The catalog sorted descending by average rating, truncated to `count`.
///
/// The sort is stable, so rating ties stay in table order. `count <= 0`
/// yields an empty sequence; `count` past the catalog size yields the whole
/// sorted catalog.
pub fn top_destinations(count: i64) -> Vec<&'static Destination> {
    let mut sorted: Vec<&Destination> = DESTINATIONS.iter().collect();
    sorted.sort_by(|a, b| b.ratings.average.total_cmp(&a.ratings.average));
    sorted.truncate(count.max(0) as usize);
    sorted
}

/// Minimum and maximum credit price across the whole catalog.
pub fn price_range() -> (u32, u32) {
    DESTINATIONS.iter().fold((u32::MAX, 0), |(min, max), dest| {
        let credits = dest.price_credits();
        (min.min(credits), max.max(credits))
    })
}

// ---------------------------------------------------------------------------
// Composed listing query
// ---------------------------------------------------------------------------

/// Sort keys for the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// `ratings.average`, descending.
    #[default]
    Rating,
    /// `adventure_level`, descending.
    Adventure,
    /// `danger_level`, descending.
    Danger,
    /// `gravity_level`, ascending.
    Gravity,
    /// Parsed credit amount, ascending.
    Price,
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(input: &str) -> Result<Self, CoreError> {
        match input {
            "rating" => Ok(SortKey::Rating),
            "adventure" => Ok(SortKey::Adventure),
            "danger" => Ok(SortKey::Danger),
            "gravity" => Ok(SortKey::Gravity),
            "price" => Ok(SortKey::Price),
            other => Err(CoreError::Validation(format!(
                "Invalid sort key '{other}'. Must be one of: rating, adventure, danger, gravity, price"
            ))),
        }
    }
}

/// Mutually exclusive selector filters for the catalog listing.
///
/// These are alternative selector categories applied as a single predicate,
/// never composed with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFilter {
    #[default]
    All,
    /// `adventure_level >= 8`.
    HighAdventure,
    /// `danger_level >= 8`.
    HighDanger,
    /// `gravity_level < 0.8`.
    LowGravity,
    /// `gravity_level > 1.5`.
    HighGravity,
    /// `ratings.average >= 4.5`.
    TopRated,
}

impl CatalogFilter {
    fn accepts(self, dest: &Destination) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::HighAdventure => dest.adventure_level >= 8,
            CatalogFilter::HighDanger => dest.danger_level >= 8,
            CatalogFilter::LowGravity => dest.gravity_level < 0.8,
            CatalogFilter::HighGravity => dest.gravity_level > 1.5,
            CatalogFilter::TopRated => dest.ratings.average >= 4.5,
        }
    }
}

impl FromStr for CatalogFilter {
    type Err = CoreError;

    fn from_str(input: &str) -> Result<Self, CoreError> {
        match input {
            "all" => Ok(CatalogFilter::All),
            "high-adventure" => Ok(CatalogFilter::HighAdventure),
            "high-danger" => Ok(CatalogFilter::HighDanger),
            "low-gravity" => Ok(CatalogFilter::LowGravity),
            "high-gravity" => Ok(CatalogFilter::HighGravity),
            "top-rated" => Ok(CatalogFilter::TopRated),
            other => Err(CoreError::Validation(format!(
                "Invalid filter '{other}'. Must be one of: all, high-adventure, high-danger, low-gravity, high-gravity, top-rated"
            ))),
        }
    }
}

/// A composed catalog listing query.
///
/// Stages run in a fixed order: free-text search, rank-based access filter,
/// selector filter, then a stable sort.
#[derive(Debug, Clone)]
pub struct CatalogQuery<'a> {
    pub query: &'a str,
    pub rank: Rank,
    pub filter: CatalogFilter,
    pub sort: SortKey,
}

impl CatalogQuery<'_> {
    pub fn run(&self) -> Vec<&'static Destination> {
        let mut results: Vec<&Destination> = search(self.query)
            .into_iter()
            .filter(|dest| dest.required_rank <= self.rank)
            .filter(|dest| self.filter.accepts(dest))
            .collect();
        sort_destinations(&mut results, self.sort);
        results
    }
}

fn sort_destinations(items: &mut [&Destination], key: SortKey) {
    match key {
        SortKey::Rating => {
            items.sort_by(|a, b| b.ratings.average.total_cmp(&a.ratings.average));
        }
        SortKey::Adventure => items.sort_by(|a, b| b.adventure_level.cmp(&a.adventure_level)),
        SortKey::Danger => items.sort_by(|a, b| b.danger_level.cmp(&a.danger_level)),
        SortKey::Gravity => items.sort_by(|a, b| a.gravity_level.total_cmp(&b.gravity_level)),
        SortKey::Price => items.sort_by_key(|dest| dest.price_credits()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
