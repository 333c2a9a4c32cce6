use regex::Regex;
use tracing::warn;

/// Whole-word, case-insensitive matcher for every entry of the language reference list.
pub struct LanguageMatcher {
    patterns: Vec<(String, Regex)>,
}

impl LanguageMatcher {
    pub fn new(languages: &[String]) -> Self {
        let patterns = languages
            .iter()
            .filter_map(|language| {
                match Regex::new(&format!(r"(?i)\b{}\b", regex::escape(language))) {
                    Ok(pattern) => Some((language.clone(), pattern)),
                    Err(e) => {
                        warn!("Skipping language entry {language:?}: {e}");
                        None
                    }
                }
            })
            .collect();
        Self { patterns }
    }

    /// Every reference language named in the text, in reference order; `None` if none.
    pub fn extract(&self, text: &str) -> Option<Vec<String>> {
        let found: Vec<String> = self
            .patterns
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(language, _)| language.clone())
            .collect();

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }
}
