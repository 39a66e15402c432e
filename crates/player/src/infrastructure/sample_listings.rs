//! Bundled sample listings for the auction view.

use mabiauction_domain::AuctionItem;
use thiserror::Error;

const SAMPLE_LISTINGS_JSON: &str = include_str!("../../assets/sample_listings.json");

#[derive(Debug, Error)]
pub enum ListingLoadError {
    #[error("Failed to parse listings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Listings shipped with the player binary.
pub fn sample_listings() -> Result<Vec<AuctionItem>, ListingLoadError> {
    parse_listings(SAMPLE_LISTINGS_JSON)
}

/// Parse a JSON array of marketplace listings.
pub fn parse_listings(json: &str) -> Result<Vec<AuctionItem>, ListingLoadError> {
    Ok(serde_json::from_str(json)?)
}
