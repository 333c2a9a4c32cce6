//! Rule-based entity recognizer tuned for résumé text.
//!
//! Person: 2–3 consecutive capitalized name-like words on one line, skipping résumé
//! vocabulary and language names. Country words only count at the start of a line, where
//! they are usually given names. All-caps names are accepted in the first few lines and
//! title-cased. A lone capitalized word counts when it follows an honorific.
//!
//! Place: the value of a location-labelled line, capitalized spans after `in`/`from`/`near`,
//! and every whole-word mention of a known country outside a recognized name.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::nlp::{EntityKind, EntityRecognizer};
use crate::reference::ReferenceData;

const MAX_NAME_WORDS: usize = 3;

/// Leading non-empty lines where an all-caps name is accepted.
const HEADER_LINES: usize = 3;

const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "miss", "dr", "prof"];

const RESUME_VOCABULARY: &[&str] = &[
    // headings
    "resume", "résumé", "curriculum", "vitae", "cv", "profile", "summary", "objective",
    "experience", "employment", "education", "skills", "skill", "languages", "language",
    "projects", "project", "certifications", "certification", "references", "interests",
    "hobbies", "about", "personal", "details", "information", "professional", "career",
    "history", "achievements", "awards", "publications", "contact", "contacts",
    // contact labels
    "email", "e-mail", "phone", "mobile", "tel", "address", "location", "city", "country",
    "linkedin", "github", "telegram", "whatsapp", "skype", "website", "portfolio",
    "salary", "desired", "expected", "nationality", "citizenship", "birth", "date",
    // job titles
    "senior", "junior", "middle", "lead", "principal", "staff", "software", "engineer",
    "developer", "manager", "director", "designer", "analyst", "consultant", "architect",
    "intern", "head", "chief", "officer", "full", "stack", "frontend", "backend", "data",
    "scientist", "product", "specialist", "administrator", "assistant", "associate",
    "coordinator", "executive", "founder", "owner", "team", "technical", "qa", "devops",
    // institutions
    "university", "college", "school", "institute", "academy", "bachelor", "master",
    "degree", "science", "sciences", "arts", "technology", "engineering", "company",
    "inc", "ltd", "llc", "corp", "gmbh", "group", "street", "road", "avenue",
    // function words
    "the", "and", "of", "for", "with", "in", "at", "from", "to", "on", "by", "a", "an",
    "my", "i", "present", "current", "native", "fluent", "intermediate", "basic",
    "advanced", "upper", "per", "year", "month", "remote", "hybrid",
    // calendar
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december", "jan", "feb", "mar", "apr", "jun",
    "jul", "aug", "sep", "sept", "oct", "nov", "dec", "monday", "tuesday", "wednesday",
    "thursday", "friday", "saturday", "sunday",
];

lazy_static! {
    static ref LOCATION_LINE: Regex = Regex::new(
        r"(?im)^[ \t]*(?:(?:location|address|city|residence|country)[ \t]*:|based[ \t]+in\b)[ \t]*(.+?)[ \t]*$"
    )
    .unwrap();
    static ref PREPOSITION_PLACE: Regex = Regex::new(
        r"\b(?:in|from|near)[ \t]+(\p{Lu}[\p{L}'-]+(?:,?[ \t]+\p{Lu}[\p{L}'-]+)*)"
    )
    .unwrap();
}

pub struct HeuristicRecognizer {
    /// Whole-word alternation of every reference country, longest names first.
    countries: Option<Regex>,
    /// Lowercased words that never start or continue a person name.
    excluded_words: HashSet<String>,
    /// Lowercased words of country names. Allowed only as the first word of a line,
    /// where they are far more likely a given name (Jordan, Chad, Georgia).
    country_words: HashSet<String>,
}

/// A recognized person and the byte range it covers in the scanned text.
struct PersonSpan {
    start: usize,
    end: usize,
    name: String,
}

struct RunWord {
    start: usize,
    end: usize,
    text: String,
}

impl HeuristicRecognizer {
    pub fn new(reference: &ReferenceData) -> Self {
        let mut excluded_words: HashSet<String> =
            RESUME_VOCABULARY.iter().map(|w| w.to_string()).collect();
        excluded_words.extend(HONORIFICS.iter().map(|w| w.to_string()));
        for language in &reference.languages {
            excluded_words.extend(language.split_whitespace().map(str::to_lowercase));
        }

        let country_words = reference
            .countries
            .iter()
            .flat_map(|country| country.split_whitespace().map(str::to_lowercase))
            .collect();

        Self {
            countries: country_alternation(&reference.countries),
            excluded_words,
            country_words,
        }
    }

    fn people(&self, text: &str) -> Vec<String> {
        dedup_in_order(
            self.person_spans(text)
                .into_iter()
                .map(|span| span.name)
                .collect(),
        )
    }

    fn person_spans(&self, text: &str) -> Vec<PersonSpan> {
        let mut found = Vec::new();
        let mut header_lines_left = HEADER_LINES;
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            self.scan_line_for_people(text, line, header_lines_left > 0, &mut found);
            header_lines_left = header_lines_left.saturating_sub(1);
        }
        found
    }

    fn scan_line_for_people(
        &self,
        text: &str,
        line: &str,
        in_header: bool,
        found: &mut Vec<PersonSpan>,
    ) {
        let mut run: Vec<RunWord> = Vec::new();
        let mut run_after_honorific = false;
        let mut previous_was_honorific = false;

        for (index, token) in line.split_whitespace().enumerate() {
            let word = token.trim_matches(|c: char| !c.is_alphabetic());
            let breaks_after = token
                .chars()
                .last()
                .is_some_and(|c| matches!(c, ',' | ';' | ':' | '|' | '/' | '(' | ')' | '.'));

            let is_honorific = HONORIFICS.contains(&word.to_lowercase().as_str());
            let name_word = if is_honorific {
                None
            } else {
                self.name_word(word, index == 0, in_header)
            };

            match name_word {
                Some(normalized) => {
                    if run.is_empty() {
                        run_after_honorific = previous_was_honorific;
                    }
                    let start = offset_in(text, word);
                    run.push(RunWord {
                        start,
                        end: start + word.len(),
                        text: normalized,
                    });
                    if breaks_after {
                        close_run(&mut run, run_after_honorific, found);
                    }
                }
                None => close_run(&mut run, run_after_honorific, found),
            }
            previous_was_honorific = is_honorific;
        }
        close_run(&mut run, run_after_honorific, found);
    }

    /// The word as it should appear in a name, or `None` if it cannot be part of one.
    /// All-caps words are accepted only in the header lines and come back title-cased.
    fn name_word(&self, word: &str, starts_line: bool, in_header: bool) -> Option<String> {
        let first = word.chars().next()?;
        if word.chars().count() < 2
            || !first.is_uppercase()
            || !word
                .chars()
                .all(|c| c.is_alphabetic() || matches!(c, '\'' | '’' | '-'))
        {
            return None;
        }

        let lower = word.to_lowercase();
        if self.excluded_words.contains(&lower)
            || (!starts_line && self.country_words.contains(&lower))
        {
            return None;
        }

        if word.chars().any(char::is_lowercase) {
            Some(word.to_string())
        } else if in_header {
            Some(title_case(word))
        } else {
            None
        }
    }

    fn places(&self, text: &str) -> Vec<String> {
        let mut found: Vec<(usize, String)> = Vec::new();

        for caps in LOCATION_LINE.captures_iter(text) {
            if let Some(value) = caps.get(1) {
                found.push((value.start(), value.as_str().to_string()));
            }
        }
        for caps in PREPOSITION_PLACE.captures_iter(text) {
            if let Some(span) = caps.get(1) {
                found.push((span.start(), span.as_str().to_string()));
            }
        }
        if let Some(countries) = &self.countries {
            // A country word inside a recognized name is the name, not a place.
            let people = self.person_spans(text);
            for m in countries.find_iter(text) {
                let inside_person = people
                    .iter()
                    .any(|person| m.start() >= person.start && m.start() < person.end);
                if !inside_person {
                    found.push((m.start(), m.as_str().to_string()));
                }
            }
        }

        found.sort_by_key(|(start, _)| *start);
        dedup_in_order(found.into_iter().map(|(_, place)| place).collect())
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn recognize(&self, text: &str, kind: EntityKind) -> Vec<String> {
        match kind {
            EntityKind::Person => self.people(text),
            EntityKind::Place => self.places(text),
        }
    }
}

fn close_run(run: &mut Vec<RunWord>, after_honorific: bool, found: &mut Vec<PersonSpan>) {
    let accepted = match run.len() {
        1 => after_honorific,
        n => (2..=MAX_NAME_WORDS).contains(&n),
    };
    if let (true, Some(first), Some(last)) = (accepted, run.first(), run.last()) {
        found.push(PersonSpan {
            start: first.start,
            end: last.end,
            name: run
                .iter()
                .map(|word| word.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        });
    }
    run.clear();
}

/// Byte offset of `part` within `text`; `part` must be a subslice of `text`.
fn offset_in(text: &str, part: &str) -> usize {
    part.as_ptr() as usize - text.as_ptr() as usize
}

/// `JEAN-LUC` → `Jean-Luc`, `O'NEIL` → `O'Neil`.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut upper_next = true;
    for c in word.chars() {
        if upper_next {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        upper_next = matches!(c, '-' | '\'' | '’');
    }
    out
}

fn country_alternation(countries: &[String]) -> Option<Regex> {
    if countries.is_empty() {
        return None;
    }
    let mut names: Vec<&String> = countries.iter().collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    let alternation = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).ok()
}

fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
