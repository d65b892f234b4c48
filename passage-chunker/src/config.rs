/// Default passage bounds, in whitespace-delimited words.
#[derive(Debug, Clone, Copy)]
pub struct PassageDefaults {
    pub min_words: usize,
    pub max_words: usize,
}

/// Shared defaults so the library and the CLI stay in sync.
pub const PASSAGE_DEFAULTS: PassageDefaults = PassageDefaults {
    min_words: 3,
    max_words: 100,
};
