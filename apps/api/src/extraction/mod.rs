//! Field extractors — independent, stateless text → optional-value functions.
//!
//! `FieldExtractors` bundles the nine extractors with the shared, read-only inputs they
//! need (entity recognizer, reference datasets) and assembles an `ExtractedRecord`.
//! Every extractor runs behind a panic guard so one misbehaving field degrades to null
//! instead of failing the request.

pub mod contact;
pub mod languages;
pub mod location;
pub mod name;
pub mod patterns;
pub mod salary;

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::decode::pdf::panic_message;
use crate::extraction::languages::LanguageMatcher;
use crate::models::record::{full_name, ExtractedRecord, PersonName};
use crate::nlp::EntityRecognizer;
use crate::reference::ReferenceData;

pub struct FieldExtractors {
    recognizer: Arc<dyn EntityRecognizer>,
    countries: Vec<String>,
    languages: LanguageMatcher,
}

impl FieldExtractors {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>, reference: &ReferenceData) -> Self {
        Self {
            recognizer,
            countries: reference.countries.clone(),
            languages: LanguageMatcher::new(&reference.languages),
        }
    }

    /// Runs every extractor over `text` and builds the record.
    pub fn extract_all(&self, text: &str) -> ExtractedRecord {
        let recognizer = self.recognizer.as_ref();

        let name = guarded("name", || {
            Some(name::extract_name(text, recognizer))
        })
        .unwrap_or_default();
        let email = guarded("email", || contact::extract_email(text));
        let phone_number = guarded("phone_number", || contact::extract_phone(text));
        let linkedin = guarded("linkedin", || contact::extract_linkedin(text));
        let country = guarded("country", || {
            location::extract_country(text, recognizer, &self.countries)
        });
        let languages = guarded("languages", || self.languages.extract(text));
        let whatsapp = guarded("whatsapp", || contact::extract_whatsapp(text));
        let telegram = guarded("telegram", || contact::extract_telegram(text));
        let desired_salary = guarded("desired_salary", || salary::extract_salary(text));

        let record = assemble(
            name,
            ExtractedRecord {
                email,
                phone_number,
                linkedin,
                country,
                languages,
                whatsapp,
                telegram,
                desired_salary,
                ..Default::default()
            },
        );

        debug!(
            has_name = record.full_name.is_some(),
            has_email = record.email.is_some(),
            has_phone = record.phone_number.is_some(),
            has_country = record.country.is_some(),
            languages = record.languages.as_ref().map_or(0, Vec::len),
            has_salary = record.desired_salary.is_some(),
            "Fields extracted"
        );
        record
    }
}

fn assemble(name: PersonName, fields: ExtractedRecord) -> ExtractedRecord {
    ExtractedRecord {
        full_name: full_name(&name),
        first_name: name.first,
        last_name: name.last,
        ..fields
    }
}

/// Runs one extractor, turning a panic into an absent field.
fn guarded<T>(field: &'static str, extractor: impl FnOnce() -> Option<T>) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(extractor)) {
        Ok(value) => value,
        Err(payload) => {
            warn!(
                field,
                "Extractor panicked, leaving field empty: {}",
                panic_message(payload.as_ref())
            );
            None
        }
    }
}
