use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use simple_error::SimpleError;

///Provides the dictionary words an index is built from.
///The order of the words is retained for words that share a signature.
pub trait WordSource {
    fn words(&self) -> Vec<String>;
}

impl WordSource for Vec<String> {
    fn words(&self) -> Vec<String> {
        self.clone()
    }
}

impl WordSource for [String] {
    fn words(&self) -> Vec<String> {
        self.to_vec()
    }
}

impl WordSource for [&str] {
    fn words(&self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> WordSource for [&str; N] {
    fn words(&self) -> Vec<String> {
        self[..].words()
    }
}

pub struct LexiconParams {
    ///Column containing the word (0-indexed, columns are tab-separated)
    pub text_column: u8,
}

impl Default for LexiconParams {
    fn default() -> Self {
        Self {
            text_column: 0,
        }
    }
}

///A word list read from one or more files
#[derive(Clone,Debug,Default)]
pub struct Lexicon {
    pub entries: Vec<String>,

    /// Stores the names of the loaded files
    pub sources: Vec<String>,

    pub debug: bool,
}

impl Lexicon {
    pub fn new(debug: bool) -> Lexicon {
        Lexicon {
            entries: Vec::new(),
            sources: Vec::new(),
            debug,
        }
    }

    ///Read a word list from a file: one entry per line, optionally as one column of a TSV file.
    ///Empty lines are skipped.
    pub fn read_file(&mut self, filename: &str, params: &LexiconParams) -> Result<(), Box<dyn Error>> {
        if self.debug {
            eprintln!("Reading lexicon from {}...", filename);
        }
        let f = File::open(filename)?;
        let count = self.read(f, params)?;
        if self.debug {
            eprintln!(" - Read {} words, lexicon size is now {}", count, self.entries.len());
        }
        self.sources.push(filename.to_string());
        Ok(())
    }

    ///Read a word list from any stream, returns the number of words added
    pub fn read(&mut self, stream: impl Read, params: &LexiconParams) -> Result<usize, Box<dyn Error>> {
        let f_buffer = BufReader::new(stream);
        let mut count = 0;
        for (linenr, line) in f_buffer.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let text = line.split('\t').nth(params.text_column as usize).ok_or_else(|| {
                SimpleError::new(format!("Expected column {} not found on line {}", params.text_column, linenr + 1))
            })?;
            if !text.is_empty() {
                self.entries.push(text.to_string());
                count += 1;
            }
        }
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WordSource for Lexicon {
    fn words(&self) -> Vec<String> {
        self.entries.clone()
    }
}
