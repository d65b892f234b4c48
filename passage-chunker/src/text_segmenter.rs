use crate::config::PASSAGE_DEFAULTS;

/// Literal sentence delimiter. Abbreviations and decimals are not special-cased.
const SENTENCE_DELIM: &str = ". ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentParams {
    /// Flush a passage as soon as it holds at least this many words.
    pub min_words: usize,
    /// Flush early when the next fragment would push a passage past this many words.
    /// A single fragment longer than this is still emitted whole.
    pub max_words: usize,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self { min_words: PASSAGE_DEFAULTS.min_words, max_words: PASSAGE_DEFAULTS.max_words }
    }
}

/// Fragments collected for the passage currently being built.
#[derive(Debug, Default)]
struct Bucket<'a> {
    fragments: Vec<&'a str>,
    words: usize,
}

impl<'a> Bucket<'a> {
    fn push(&mut self, fragment: &'a str, words: usize) {
        self.fragments.push(fragment);
        self.words += words;
    }

    fn is_empty(&self) -> bool { self.fragments.is_empty() }

    fn flush_into(&mut self, out: &mut Vec<String>) {
        if self.is_empty() { return; }
        let mut passage = self.fragments.join(SENTENCE_DELIM);
        if !passage.ends_with('.') { passage.push('.'); }
        out.push(passage);
        self.fragments.clear();
        self.words = 0;
    }
}

/// Split one page of raw text into passages.
///
/// Newlines become spaces, the text is cut on every `". "`, and the resulting
/// fragments are bucketed greedily in order:
/// - if the next fragment would take a non-empty bucket past `max_words`, the
///   bucket is emitted first and the fragment starts a new one;
/// - otherwise the fragment joins the bucket, and the bucket is emitted as soon
///   as it reaches `min_words`.
///
/// Whatever is left at the end becomes the last passage. Passages are the
/// fragments joined with `". "` plus a closing `"."` when not already present.
/// Blank input yields nothing. Blank fragments inside non-blank text are kept in
/// place and count for zero words, so `"A B C. . D E F"` gives `". D E F."` second.
///
/// `min_words > max_words` is not rejected; each fragment then tends to stand alone.
pub fn segment(text: &str, params: &SegmentParams) -> Vec<String> {
    let flat = text.replace('\n', " ");
    if flat.trim().is_empty() { return Vec::new(); }
    let mut passages = Vec::new();
    let mut bucket = Bucket::default();

    for fragment in flat.split(SENTENCE_DELIM) {
        let words = fragment.split_whitespace().count();
        if bucket.words + words > params.max_words && !bucket.is_empty() {
            bucket.flush_into(&mut passages);
            bucket.push(fragment, words);
        } else {
            bucket.push(fragment, words);
            if bucket.words >= params.min_words {
                bucket.flush_into(&mut passages);
            }
        }
    }
    bucket.flush_into(&mut passages);
    passages
}

/// `segment` with explicit bounds.
pub fn segment_with(text: &str, min_words: usize, max_words: usize) -> Vec<String> {
    segment(text, &SegmentParams { min_words, max_words })
}
