//! Page-by-page PDF text extraction and word-bounded passage segmentation.

pub mod config;
pub mod reader_pdf;
pub mod text_segmenter;
pub mod pdf_chunker;

pub use pdf_chunker::{extract_pdf_passages, extract_pdf_passages_or_empty, passages_from_source};
pub use reader_pdf::{DocumentError, InMemoryPages, PageSource, PdfDocument};
pub use text_segmenter::{segment, segment_with, SegmentParams};
