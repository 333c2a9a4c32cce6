use crate::models::record::PersonName;
use crate::nlp::{EntityKind, EntityRecognizer};

/// Splits the first recognized person into first name and the remaining words.
///
/// When that person is a single word, a second recognized person consisting of a single
/// word is taken as the last name. No person at all yields an empty `PersonName`.
pub fn extract_name(text: &str, recognizer: &dyn EntityRecognizer) -> PersonName {
    let people = recognizer.recognize(text, EntityKind::Person);
    let Some(primary) = people.first() else {
        return PersonName::default();
    };

    let mut words = primary.split_whitespace();
    let first = words.next().map(String::from);
    let rest: Vec<&str> = words.collect();

    let last = if rest.is_empty() {
        people
            .get(1)
            .map(|p| p.trim())
            .filter(|p| !p.is_empty() && p.split_whitespace().count() == 1)
            .map(String::from)
    } else {
        Some(rest.join(" "))
    };

    PersonName { first, last }
}
