use std::cmp::Ordering;

///Each dictionary entry gets assigned an ID integer, carries no further meaning
pub type WordId = u32;

///A canonical letter signature: the lowercased characters of a word (or letter set), sorted by
///code point. Two words share a signature if and only if they are anagrams of each other.
pub type Signature = String;

///The default minimum length (in characters) of words to return
pub const MIN_WORD_LENGTH: usize = 3;

///Determines how words of equal length are ordered in the results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    ///Plain code point (byte-wise for UTF-8) comparison, uppercase sorts before lowercase
    CodePoint,
    ///Compare lowercased forms first, ties are broken by code point so the order stays total
    CaseInsensitive,
}

impl SortOrder {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            SortOrder::CodePoint => a.cmp(b),
            SortOrder::CaseInsensitive => {
                let folded = a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase));
                folded.then_with(|| a.cmp(b))
            }
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::CodePoint
    }
}

#[derive(Clone,Debug)]
pub struct SearchParameters {
    /// Minimum length (in characters) a word must have to be returned
    pub min_length: usize,

    /// Number of words to return per input (set to 0 for unlimited), the longest words are kept
    pub max_matches: usize,

    /// Order of words with equal length
    pub sort_order: SortOrder,

    /// Use only a single-thread instead of leveraging multiple cores (lowers resource use and
    /// performance)
    pub single_thread: bool,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
            max_matches: 0,
            sort_order: SortOrder::CodePoint,
            single_thread: false,
        }
    }
}

impl SearchParameters {
    pub fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }
    pub fn with_max_matches(mut self, matches: usize) -> Self {
        self.max_matches = matches;
        self
    }
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }
    pub fn with_single_thread(mut self) -> Self {
        self.single_thread = true;
        self
    }

    ///Orders two result words: longest first, then according to the sort order
    pub fn compare_words(&self, a: &str, b: &str) -> Ordering {
        b.chars().count().cmp(&a.chars().count()).then_with(|| self.sort_order.compare(a, b))
    }
}
