//! Static lookup datasets: ISO country names and spoken-language names.
//!
//! Both lists ship inside the binary (`data/*.txt`) and can be replaced at startup by
//! pointing `REFERENCE_DATA_DIR` at a directory holding files with the same names.
//! Entry order matters: extractors report matches in dataset order.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

const COUNTRIES_FILE: &str = "countries.txt";
const LANGUAGES_FILE: &str = "languages.txt";

const BUNDLED_COUNTRIES: &str = include_str!("../../data/countries.txt");
const BUNDLED_LANGUAGES: &str = include_str!("../../data/languages.txt");

/// Read-only reference lists shared by every invocation.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub countries: Vec<String>,
    pub languages: Vec<String>,
}

impl ReferenceData {
    /// Datasets compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            countries: parse_list(BUNDLED_COUNTRIES),
            languages: parse_list(BUNDLED_LANGUAGES),
        }
    }

    /// Loads `countries.txt` and `languages.txt` from `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let countries = read_list(&dir.join(COUNTRIES_FILE))?;
        let languages = read_list(&dir.join(LANGUAGES_FILE))?;
        info!(
            "Loaded reference data from {} ({} countries, {} languages)",
            dir.display(),
            countries.len(),
            languages.len()
        );
        Ok(Self {
            countries,
            languages,
        })
    }

    /// Bundled datasets unless a directory override is configured.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load_from_dir(dir),
            None => Ok(Self::bundled()),
        }
    }
}

fn read_list(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference dataset {}", path.display()))?;
    let entries = parse_list(&raw);
    if entries.is_empty() {
        bail!("Reference dataset {} has no entries", path.display());
    }
    Ok(entries)
}

/// One entry per line; blank lines and `#` comments are skipped.
fn parse_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
