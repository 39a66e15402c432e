pub mod sample_listings;

pub use sample_listings::{parse_listings, sample_listings, ListingLoadError};
