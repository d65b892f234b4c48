use std::path::Path;

use passage_model::PassageRecord;
use tracing::{debug, info};

use crate::reader_pdf::{DocumentError, PageSource, PdfDocument};
use crate::text_segmenter::{segment, SegmentParams};

/// Segment every page of `source` in order and tag the surviving passages with their page.
/// Passages that are blank after trimming are dropped.
pub fn passages_from_source<S: PageSource + ?Sized>(source: &S, params: &SegmentParams) -> Vec<PassageRecord> {
    let page_count = source.page_count();
    let mut out: Vec<PassageRecord> = Vec::new();

    for page in 1..=page_count {
        let raw = source.page_text(page);
        let before = out.len();
        out.extend(
            segment(&raw, params)
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(|p| PassageRecord::new(page, p)),
        );
        debug!(page, chars = raw.len(), passages = out.len() - before, "segmented page");
    }

    info!(pages = page_count, passages = out.len(), "segmented document");
    out
}

/// High-level: open PDF -> segment pages -> page-tagged passages.
/// The document handle is dropped before returning, on success or failure.
pub fn extract_pdf_passages(path: impl AsRef<Path>, params: &SegmentParams) -> Result<Vec<PassageRecord>, DocumentError> {
    let doc = PdfDocument::open(path)?;
    Ok(passages_from_source(&doc, params))
}

/// Like [`extract_pdf_passages`] but never fails: a document that cannot be
/// read gives no passages, and the error is handed back for reporting.
pub fn extract_pdf_passages_or_empty(path: impl AsRef<Path>, params: &SegmentParams) -> (Vec<PassageRecord>, Option<DocumentError>) {
    let path = path.as_ref();
    match extract_pdf_passages(path, params) {
        Ok(passages) => (passages, None),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "document unreadable; returning no passages");
            (Vec::new(), Some(err))
        }
    }
}
