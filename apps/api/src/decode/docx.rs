//! DOCX decoding.
//!
//! DOCX files are ZIP archives; the body text lives in `word/document.xml`. The upload is
//! first written to a uniquely named scratch file and the archive is read back from that
//! path. The scratch file is a `NamedTempFile`, so it is removed when it goes out of scope
//! on the success and failure paths alike.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::decode::DecodeError;
use crate::models::request::DocumentFormat;

const DOCUMENT_PART: &str = "word/document.xml";

/// Ceiling on the uncompressed size of `word/document.xml`.
const MAX_DOCUMENT_BYTES: u64 = 32 * 1024 * 1024;

pub struct DocxDecoder {
    scratch_dir: Option<PathBuf>,
    max_document_bytes: u64,
}

impl DocxDecoder {
    pub fn new(scratch_dir: Option<PathBuf>) -> Self {
        Self {
            scratch_dir,
            max_document_bytes: MAX_DOCUMENT_BYTES,
        }
    }

    #[cfg(test)]
    fn with_max_document_bytes(mut self, limit: u64) -> Self {
        self.max_document_bytes = limit;
        self
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let artifact = self.materialize(bytes).map_err(docx_error)?;
        debug!(path = %artifact.path().display(), "DOCX materialized");

        let result = read_document_text(artifact.path(), self.max_document_bytes);

        if let Err(e) = artifact.close() {
            warn!("Failed to remove DOCX scratch file: {e}");
        }
        result
    }

    fn materialize(&self, bytes: &[u8]) -> std::io::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("cv-").suffix(".docx");
        let mut file = match &self.scratch_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(bytes)?;
        file.flush()?;
        Ok(file)
    }
}

fn docx_error(e: impl ToString) -> DecodeError {
    DecodeError::new(DocumentFormat::Docx, e.to_string())
}

fn read_document_text(path: &Path, max_bytes: u64) -> Result<String, DecodeError> {
    let file = File::open(path).map_err(docx_error)?;
    let mut archive = ZipArchive::new(file).map_err(docx_error)?;

    // Capped on inflated bytes, not on the size declared in the archive header.
    let mut raw = Vec::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| docx_error(format!("{DOCUMENT_PART}: {e}")))?
        .take(max_bytes + 1)
        .read_to_end(&mut raw)
        .map_err(docx_error)?;
    if raw.len() as u64 > max_bytes {
        return Err(docx_error(format!(
            "{DOCUMENT_PART} exceeds {max_bytes} bytes uncompressed"
        )));
    }
    let xml = String::from_utf8(raw).map_err(docx_error)?;

    document_xml_to_text(&xml).map_err(docx_error)
}

/// Flattens WordprocessingML into text: `w:t` runs are concatenated, paragraph ends and
/// breaks become newlines, tabs inside a run become `\t`. Tab stops declared in
/// paragraph properties produce nothing.
fn document_xml_to_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text = false;
    let mut in_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"t" => in_text = true,
                b"r" => in_run = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"r" => in_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if in_run => text.push('\t'),
                b"br" | b"cr" | b"p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => text.push_str(&t.unescape()?),
            Event::CData(t) if in_text => text.push_str(&String::from_utf8_lossy(&t)),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
