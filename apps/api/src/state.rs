use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::decode::FormatDecoder;
use crate::extraction::FieldExtractors;
use crate::nlp::HeuristicRecognizer;
use crate::pipeline::ExtractionPipeline;
use crate::reference::ReferenceData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ExtractionPipeline>,
    pub config: Config,
}

impl AppState {
    /// Loads the reference datasets and wires decoder, recognizer and extractors.
    pub fn from_config(config: &Config) -> Result<Self> {
        let reference = ReferenceData::load(config.reference_data_dir.as_deref())?;
        info!(
            "Reference data ready ({} countries, {} languages)",
            reference.countries.len(),
            reference.languages.len()
        );

        let recognizer = Arc::new(HeuristicRecognizer::new(&reference));
        let extractors = Arc::new(FieldExtractors::new(recognizer, &reference));
        let decoder = Arc::new(FormatDecoder::new(config.scratch_dir.clone()));

        Ok(Self {
            pipeline: Arc::new(ExtractionPipeline::new(
                decoder,
                extractors,
                config.decode_timeout,
            )),
            config: config.clone(),
        })
    }
}
