//! Extraction pipeline: validate type → decode → extract → assemble → respond.
//!
//! Decoding and extraction are blocking work and run on tokio's blocking pool. Decoding is
//! bounded by a timeout; a hung decoder fails only its own invocation. Nothing is shared
//! between runs except read-only extractors and the decoder.

pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::decode::DocumentDecoder;
use crate::errors::ExtractError;
use crate::extraction::FieldExtractors;
use crate::models::envelope::ResponseEnvelope;
use crate::models::record::ExtractedRecord;
use crate::models::request::{DeclaredType, DocumentFormat, ExtractionRequest};

pub struct ExtractionPipeline {
    decoder: Arc<dyn DocumentDecoder>,
    extractors: Arc<FieldExtractors>,
    decode_timeout: Duration,
}

impl ExtractionPipeline {
    pub fn new(
        decoder: Arc<dyn DocumentDecoder>,
        extractors: Arc<FieldExtractors>,
        decode_timeout: Duration,
    ) -> Self {
        Self {
            decoder,
            extractors,
            decode_timeout,
        }
    }

    /// Runs one request to completion and wraps the outcome in an envelope.
    pub async fn respond(&self, request: ExtractionRequest) -> ResponseEnvelope {
        self.run(request).await.into()
    }

    #[instrument(
        skip_all,
        fields(request_id = %Uuid::new_v4(), declared_type = %request.declared_type)
    )]
    pub async fn run(&self, request: ExtractionRequest) -> Result<ExtractedRecord, ExtractError> {
        let format = match request.declared_type {
            DeclaredType::Supported(format) => format,
            DeclaredType::Unsupported(mime) => {
                info!("Rejecting unsupported file type");
                return Err(ExtractError::UnsupportedFormat(mime));
            }
        };

        let text = self.decode(request.raw_bytes, format).await?;
        info!(chars = text.len(), "Document decoded");

        let extractors = Arc::clone(&self.extractors);
        let record = tokio::task::spawn_blocking(move || extractors.extract_all(&text))
            .await
            .map_err(|e| ExtractError::Internal(format!("extraction task failed: {e}")))?;

        info!("Extraction complete");
        Ok(record)
    }

    async fn decode(&self, bytes: Bytes, format: DocumentFormat) -> Result<String, ExtractError> {
        let decoder = Arc::clone(&self.decoder);
        let task = tokio::task::spawn_blocking(move || decoder.decode(&bytes, format));

        match tokio::time::timeout(self.decode_timeout, task).await {
            Ok(Ok(decoded)) => Ok(decoded?),
            Ok(Err(e)) => Err(ExtractError::Internal(format!("decode task failed: {e}"))),
            Err(_) => Err(ExtractError::DecodeTimeout(self.decode_timeout)),
        }
    }
}
