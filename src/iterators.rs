use std::collections::HashSet;

use crate::types::*;
use crate::signature::*;

///////////////////////////////////////////////////////////////////////////////////////

/// Yields every distinct signature that can be formed by choosing
/// a subset of the positions of the input letters.
///
/// The letters are lowercased and sorted up front, so any selection
/// of positions, taken in order, is already a canonical signature.
///
/// Selections are visited as a binary counter over the positions,
/// with the first position as the most significant digit: position by
/// position from left to right, excluding a letter comes before including
/// it. For input `abc` this yields: "", c, b, bc, a, ac, ab, abc.
///
/// Repeated letters make different selections produce the same signature,
/// every signature is only yielded the first time it is produced.
/// There are 2^n selections for n letters, so the iterator is exponential
/// in the input length.
pub struct SubsetIterator {
    letters: Vec<char>,
    ///Inclusion flag per position, None when the iterator is exhausted
    include: Option<Vec<bool>>,
    visited: HashSet<Signature>,
    min_length: usize,
}

impl SubsetIterator {
    pub fn new(letters: &str) -> SubsetIterator {
        let letters = letters.sorted_chars();
        SubsetIterator {
            include: Some(vec![false; letters.len()]),
            visited: HashSet::new(),
            letters,
            min_length: 0,
        }
    }

    /// Only yield signatures with at least this many characters
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Advances the counter, returns false once all selections have been visited
    fn increment(include: &mut [bool]) -> bool {
        for flag in include.iter_mut().rev() {
            if *flag {
                *flag = false;
            } else {
                *flag = true;
                return true;
            }
        }
        false
    }
}

impl Iterator for SubsetIterator {
    type Item = Signature;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let include = self.include.as_mut()?;
            let count = include.iter().filter(|x| **x).count();
            let candidate: Option<Signature> = if count >= self.min_length {
                Some(self.letters.iter().zip(include.iter()).filter(|(_, included)| **included).map(|(c, _)| *c).collect())
            } else {
                None
            };
            if !Self::increment(include) {
                self.include = None;
            }
            if let Some(candidate) = candidate {
                if !self.visited.contains(&candidate) {
                    self.visited.insert(candidate.clone());
                    return Some(candidate);
                }
            }
        }
    }
}
