pub mod extraction;
pub mod listing;

pub use extraction::{extract_area, is_corner_lot, is_on_avenue, resolve_area, AreaResolution};
pub use listing::CleanedListing;
