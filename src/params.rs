// src/params.rs
use std::path::PathBuf;

pub const DEFAULT_OUT_FILE: &str = "schemas.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// CSS selector for the post links the target site template marks up.
pub const ANCHOR_SELECTOR: &str = r#"a[data-hook="anchorViewer"]"#;

/// CSV header for the batch export.
pub const CSV_HEADERS: [&str; 2] = ["Blog URL", "Schema"];

#[derive(Clone)]
pub struct Params {
    pub urls: Vec<String>,           // URLs given directly on the command line
    pub input: Option<PathBuf>,      // file with one URL per line ("-" = stdin)
    pub out: Option<PathBuf>,        // output path (file, or dir hint → schemas.csv inside)
    pub timeout_secs: u64,           // per-request timeout
    pub print_schemas: bool,         // also print each script block to stdout
}

impl Params {
    pub fn new() -> Self {
        Self {
            urls: Vec::new(),
            input: None,
            out: Some(PathBuf::from(DEFAULT_OUT_FILE)),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            print_schemas: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
