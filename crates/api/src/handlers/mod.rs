pub mod concierge;
pub mod destinations;
pub mod tiers;
