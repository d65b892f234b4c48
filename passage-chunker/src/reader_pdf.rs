use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::{debug, warn};

/// Failure to open or parse a document. Per-page extraction problems are not errors.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid PDF: {0}")]
    Parse(String),
}

/// Anything that can hand out plain text page by page.
///
/// Pages are numbered from 1. `page_text` never fails: out-of-range pages and
/// pages with nothing extractable (scans, broken content streams) give `""`.
pub trait PageSource {
    fn page_count(&self) -> u32;
    fn page_text(&self, page: u32) -> String;
}

/// An opened PDF backed by `lopdf`. The parsed document is released on drop.
pub struct PdfDocument {
    doc: Document,
    page_count: u32,
}

impl PdfDocument {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| DocumentError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read pdf file");
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let doc = Document::load_mem(bytes).map_err(|e| DocumentError::Parse(e.to_string()))?;
        let page_count = doc.get_pages().len() as u32;
        debug!(page_count, "parsed pdf");
        Ok(Self { doc, page_count })
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn page_text(&self, page: u32) -> String {
        if page == 0 || page > self.page_count { return String::new(); }
        match self.doc.extract_text(&[page]) {
            Ok(text) => text,
            Err(err) => {
                // lossy by contract: a bad page must not sink the document
                warn!(page, error = %err, "text extraction failed; treating page as empty");
                String::new()
            }
        }
    }
}

/// Pages already held as strings, first element is page 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPages {
    pages: Vec<String>,
}

impl InMemoryPages {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { pages: pages.into_iter().map(Into::into).collect() }
    }
}

impl PageSource for InMemoryPages {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> String {
        page.checked_sub(1)
            .and_then(|i| self.pages.get(i as usize))
            .cloned()
            .unwrap_or_default()
    }
}
