//! Named-entity recognition capability used by the Name and Country extractors.

pub mod heuristic;

pub use heuristic::HeuristicRecognizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Place,
}

/// Recognizes named entities in free text.
///
/// Implementations return entity strings in text order without duplicates and must
/// return an empty vector, never fail, when nothing is found.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str, kind: EntityKind) -> Vec<String>;
}
