use std::collections::HashSet;

use crate::nlp::{EntityKind, EntityRecognizer};

/// First reference country (in reference order) named by any recognized place.
///
/// Places are split on commas so `"Berlin, Germany"` contributes both parts. Comparison
/// ignores ASCII case; the reference spelling is returned.
pub fn extract_country(
    text: &str,
    recognizer: &dyn EntityRecognizer,
    countries: &[String],
) -> Option<String> {
    let places: HashSet<String> = recognizer
        .recognize(text, EntityKind::Place)
        .iter()
        .flat_map(|place| place.split(','))
        .map(|part| part.trim().to_ascii_lowercase())
        .filter(|part| !part.is_empty())
        .collect();

    if places.is_empty() {
        return None;
    }

    countries
        .iter()
        .find(|country| places.contains(&country.to_ascii_lowercase()))
        .cloned()
}
