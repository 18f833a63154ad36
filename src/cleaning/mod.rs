mod pipeline;

pub use pipeline::{
    clean_listings, ensure_cleaned_listings, load_cleaned, load_listings, run_cleaning_stage,
    write_artifacts, CleaningOutcome,
};
