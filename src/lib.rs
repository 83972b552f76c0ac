extern crate rayon;
extern crate simple_error;

use std::sync::OnceLock;
use rayon::prelude::*;

pub mod types;
pub mod signature;
pub mod index;
pub mod iterators;
pub mod vocab;


pub use crate::types::*;
pub use crate::signature::*;
pub use crate::index::*;
pub use crate::iterators::*;
pub use crate::vocab::*;


///Finds all dictionary words that can be formed from (a subset of) a set of letters
pub struct JumbleSolver {
    ///The main index, mapping signatures to dictionary words
    pub index: AnagramIndex,

    pub params: SearchParameters,

    pub debug: bool
}

impl JumbleSolver {
    ///Builds the index from the word source, this is done only once per solver
    pub fn new(source: &dyn WordSource, params: SearchParameters, debug: bool) -> JumbleSolver {
        JumbleSolver {
            index: AnagramIndex::build(source.words(), debug),
            params,
            debug,
        }
    }

    ///Creates a solver around an existing index
    pub fn with_index(index: AnagramIndex, params: SearchParameters) -> JumbleSolver {
        JumbleSolver {
            index,
            params,
            debug: false,
        }
    }

    /// Find all words that can be formed with the letters, longest first and alphabetically within
    /// equal lengths. Every returned word has at least `min_length` characters and its
    /// lowercased letters are a sub-multiset of the lowercased input.
    /// This never fails: empty or odd input just gives fewer (or no) words.
    pub fn find_words(&self, letters: &str) -> Vec<String> {
        let signatures: Vec<Signature> = SubsetIterator::new(letters)
            .with_min_length(self.params.min_length)
            .collect();

        let mut words: Vec<&str> = if self.params.single_thread {
            signatures.iter().flat_map(|signature| self.index.lookup(signature)).collect()
        } else {
            signatures.par_iter().flat_map_iter(|signature| self.index.lookup(signature)).collect()
        };
        //lowercasing may expand a character (e.g. İ), so a signature can be longer than its word
        words.retain(|word| word.chars().count() >= self.params.min_length);

        if self.debug {
            eprintln!("(found {} words for {} candidate signatures of {})", words.len(), signatures.len(), letters);
        }

        words.sort_by(|a, b| self.params.compare_words(a, b));
        if self.params.max_matches > 0 {
            words.truncate(self.params.max_matches);
        }
        words.into_iter().map(|w| w.to_string()).collect()
    }

    /// Find words for multiple letter sets at once, results are in the same order as the input
    pub fn find_words_batch(&self, inputs: &[&str]) -> Vec<Vec<String>> {
        if self.params.single_thread {
            inputs.iter().map(|letters| self.find_words(letters)).collect()
        } else {
            inputs.par_iter().map(|letters| self.find_words(letters)).collect()
        }
    }
}

static SHARED_SOLVER: OnceLock<JumbleSolver> = OnceLock::new();

///Builds the process-wide solver used by [`jumble_cheat()`] from the dictionary provider.
///The solver is built only once: this returns false, and the provider is never called, if the
///solver already exists, either from an earlier registration or because [`jumble_cheat()`] or
///[`shared_solver()`] was called before any dictionary was registered.
pub fn register_dictionary(provider: fn() -> Vec<String>) -> bool {
    let mut registered = false;
    SHARED_SOLVER.get_or_init(|| {
        registered = true;
        JumbleSolver::new(&provider(), SearchParameters::default(), false)
    });
    registered
}

///The process-wide solver, as built by [`register_dictionary()`]. If no dictionary was
///registered, it is built on first use with an empty dictionary. It is never rebuilt.
pub fn shared_solver() -> &'static JumbleSolver {
    SHARED_SOLVER.get_or_init(|| JumbleSolver::new(&Vec::<String>::new(), SearchParameters::default(), false))
}

/// Returns all dictionary words of at least three letters that can be formed from the letters,
/// longest first and alphabetically within equal length, using the process-wide dictionary.
pub fn jumble_cheat(letters: &str) -> Vec<String> {
    shared_solver().find_words(letters)
}
