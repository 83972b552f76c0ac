use std::collections::HashMap;
use std::time::SystemTime;

use crate::types::*;
use crate::signature::*;

///A node in the anagram index, holds all dictionary entries sharing one signature
#[derive(Clone,Debug,Default)]
pub struct IndexNode {
    ///Word IDs in order of insertion (i.e. in the order of the dictionary)
    pub instances: Vec<WordId>,
}

///Maps signatures to all dictionary words that instantiate them. Built once, read-only after that.
#[derive(Clone,Debug,Default)]
pub struct AnagramIndex {
    ///Maps IDs to the original (case-preserved) dictionary words
    pub decoder: Vec<String>,

    ///The main index, mapping signatures to instances
    pub index: HashMap<Signature,IndexNode>,
}

impl AnagramIndex {
    pub fn new() -> AnagramIndex {
        AnagramIndex::default()
    }

    ///Builds the index from an ordered sequence of dictionary words.
    ///Words are stored as given, every occurrence counts (duplicates are kept).
    pub fn build<I,S>(words: I, debug: bool) -> AnagramIndex
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let begintime = if debug {
            eprintln!("Computing signatures for all words in the dictionary...");
            Some(SystemTime::now())
        } else {
            None
        };

        let mut anaindex = AnagramIndex::new();
        for word in words {
            anaindex.add(word.into());
        }

        if debug {
            eprintln!(" - Found {} words", anaindex.len());
            eprintln!(" - Found {} signatures", anaindex.signature_count());
            if let Some(begintime) = begintime {
                if let Ok(elapsed) = begintime.elapsed() {
                    eprintln!(" - Index built in {} ms", elapsed.as_millis());
                }
            }
        }
        anaindex
    }

    fn add(&mut self, word: String) {
        let signature = word.signature();
        let id = self.decoder.len() as WordId;
        self.decoder.push(word);
        self.index.entry(signature).or_default().instances.push(id);
    }

    ///Number of words in the index (duplicates included)
    pub fn len(&self) -> usize {
        self.decoder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoder.is_empty()
    }

    ///Number of distinct signatures
    pub fn signature_count(&self) -> usize {
        self.index.len()
    }

    ///Resolves a word ID
    pub fn get_word(&self, word_id: WordId) -> Option<&str> {
        self.decoder.get(word_id as usize).map(|s| s.as_str())
    }

    ///Get all words with exactly this signature, in dictionary order.
    ///Returns an empty vector if the signature is unknown.
    pub fn lookup(&self, signature: &str) -> Vec<&str> {
        match self.index.get(signature) {
            Some(node) => node.instances.iter().filter_map(|id| self.get_word(*id)).collect(),
            None => Vec::new(),
        }
    }

    ///Get all anagrams of the given text (which need not be canonical), including the text
    ///itself if it is in the dictionary
    pub fn anagrams(&self, text: &str) -> Vec<&str> {
        self.lookup(&text.signature())
    }

    ///Tests if the dictionary has a specific entry (case-sensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.anagrams(word).into_iter().any(|instance| instance == word)
    }
}

///Builds an anagram index from an ordered sequence of dictionary words
pub fn build_index<I,S>(words: I) -> AnagramIndex
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    AnagramIndex::build(words, false)
}
