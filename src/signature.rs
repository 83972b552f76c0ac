use crate::types::*;

///Trait for objects that have a letter signature (string-like)
pub trait Signable {
    ///Compute the canonical signature: lowercase all characters and sort them.
    ///Non-alphabetic characters are not filtered, they take part in the signature like any other
    ///character.
    fn signature(&self) -> Signature;

    ///The lowercased characters in canonical (sorted) order
    fn sorted_chars(&self) -> Vec<char>;

    ///Tests whether the letters of this value form a sub-multiset of the letters of `other`
    ///(case-insensitive). Every word that can be formed from `other` satisfies this.
    fn fits_in(&self, other: &str) -> bool;
}

impl Signable for str {
    fn signature(&self) -> Signature {
        self.sorted_chars().into_iter().collect()
    }

    fn sorted_chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.chars().flat_map(char::to_lowercase).collect();
        chars.sort_unstable();
        chars
    }

    fn fits_in(&self, other: &str) -> bool {
        let needle = self.sorted_chars();
        let haystack = other.sorted_chars();
        //both are sorted, so a single merge-like pass suffices
        let mut haystack = haystack.iter();
        for c in needle.iter() {
            loop {
                match haystack.next() {
                    Some(h) if h == c => break,
                    Some(h) if h < c => continue,
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Signable for String {
    fn signature(&self) -> Signature {
        self.as_str().signature()
    }

    fn sorted_chars(&self) -> Vec<char> {
        self.as_str().sorted_chars()
    }

    fn fits_in(&self, other: &str) -> bool {
        self.as_str().fits_in(other)
    }
}
