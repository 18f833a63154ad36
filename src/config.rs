use std::path::{Path, PathBuf};

const INPUT_PATH: &str = "input/data.json";
const OUTPUT_DIR: &str = "output";
const CLEANED_FILE: &str = "clean_data.json";
const UNRESOLVED_FILE: &str = "null_area.json";
const REVIEW_WORKBOOK: &str = "review.xlsx";

/// Where the pipeline reads the raw feed and writes its artifacts.
///
/// The defaults are relative to the working directory the binaries are
/// launched from. Tests build their own config pointing at a temp dir.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}

impl PipelineConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Artifact A: every cleaned listing.
    pub fn cleaned_path(&self) -> PathBuf {
        self.output_dir.join(CLEANED_FILE)
    }

    /// Artifact B: ids whose area could not be determined.
    pub fn unresolved_path(&self) -> PathBuf {
        self.output_dir.join(UNRESOLVED_FILE)
    }

    pub fn review_workbook_path(&self) -> PathBuf {
        self.output_dir.join(REVIEW_WORKBOOK)
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }
}

/// The lot each model variant prices at the end of its report.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleLot {
    pub neighborhood: String,
    pub area: f64,
    pub corner_lot: bool,
    pub on_avenue: bool,
}

impl ExampleLot {
    pub fn baseline() -> Self {
        Self {
            neighborhood: "AUSTRILIO CAPILE DE CASTRO".to_string(),
            area: 400.0,
            corner_lot: false,
            on_avenue: false,
        }
    }

    pub fn extended() -> Self {
        Self {
            neighborhood: "CENTRO".to_string(),
            area: 400.0,
            corner_lot: false,
            on_avenue: false,
        }
    }
}
