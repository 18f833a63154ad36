pub mod models;

pub use models::{ListingId, RawListing};
