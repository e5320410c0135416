//! Porter2 (Snowball English) stemming algorithm implementation.
//!
//! The stemmer is a fixed multi-stage suffix-stripping pipeline. A word first
//! passes a length guard and an irregular-word exception table, then has its
//! consonantal `y`s marked, then walks steps 0 through 5 in order. Most rules
//! are constrained to the R1/R2 suffix regions ("the region after the first
//! non-vowel that follows a vowel", computed over the whole word and then
//! over the remainder after R1).
//!
//! # Examples
//!
//! ```
//! use pilum::analysis::token_filter::stem::Stemmer;
//! use pilum::analysis::token_filter::stem::porter2::Porter2Stemmer;
//!
//! let stemmer = Porter2Stemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("cats"), "cat");
//! assert_eq!(stemmer.stem("skies"), "sky");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Irregular words mapped directly to their stems, consulted before any rule.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
];

/// Suffixes removed in step 4 when the removal point lies within R2, tried
/// in order, first match wins. An "ion" match is only removed when preceded
/// by `s` or `t`.
const STEP4_SUFFIXES: &[&str] = &[
    "ement", "ment", "able", "ible", "ance", "ence", "er", "ic", "al", "ism", "ion", "ou", "ant",
    "ent", "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter2 stemming algorithm implementation.
///
/// Total over any ASCII alphabetic word: unrecognized words pass through the
/// stages unmodified, and the function never fails.
#[derive(Debug, Clone, Default)]
pub struct Porter2Stemmer;

impl Porter2Stemmer {
    /// Create a new Porter2 stemmer.
    pub fn new() -> Self {
        Porter2Stemmer
    }

    /// Check if a character is a vowel. The `Y` marker set by [`change_y`]
    /// counts as a consonant everywhere.
    ///
    /// [`change_y`]: Porter2Stemmer::change_y
    fn is_vowel(c: u8) -> bool {
        matches!(c.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u')
    }

    /// Check if the word ends in a doubled consonant from the removable set.
    fn ends_in_double(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        if bytes.len() < 2 {
            return false;
        }
        let c1 = bytes[bytes.len() - 1];
        let c2 = bytes[bytes.len() - 2];
        c1 == c2
            && matches!(
                c1,
                b'b' | b'd' | b'f' | b'g' | b'm' | b'n' | b'p' | b'r' | b't'
            )
    }

    /// Replace `suffix` with `replacement` if the word ends with it and the
    /// removal point lies at or after `start`.
    fn replace_if_exists(
        &self,
        word: &mut String,
        suffix: &str,
        replacement: &str,
        start: usize,
    ) -> bool {
        if word.len() >= suffix.len()
            && word.ends_with(suffix)
            && word.len() - suffix.len() >= start
        {
            let at = word.len() - suffix.len();
            word.truncate(at);
            word.push_str(replacement);
            return true;
        }
        false
    }

    /// Check for a vowel in `word[start..end]`.
    fn contains_vowel(&self, word: &str, start: usize, end: usize) -> bool {
        let bytes = word.as_bytes();
        bytes[start..end.min(bytes.len())]
            .iter()
            .any(|&c| Self::is_vowel(c))
    }

    /// Index just past the first non-vowel that follows a vowel, searching
    /// from `start`; the word length when there is none.
    fn first_non_vowel_after_vowel(&self, word: &str, start: usize) -> usize {
        let bytes = word.as_bytes();
        for i in (start + 1)..bytes.len() {
            if !Self::is_vowel(bytes[i]) && Self::is_vowel(bytes[i - 1]) {
                return i + 1;
            }
        }
        word.len()
    }

    /// Compute the start of R1, with the three word-initial exceptions.
    fn start_r1(&self, word: &str) -> usize {
        if word.starts_with("gener") {
            return 5;
        }
        if word.starts_with("commun") {
            return 6;
        }
        if word.starts_with("arsen") {
            return 5;
        }
        self.first_non_vowel_after_vowel(word, 0)
    }

    /// Compute the start of R2 as R1 of the remainder after R1's start.
    fn start_r2(&self, word: &str, start_r1: usize) -> usize {
        self.first_non_vowel_after_vowel(word, start_r1)
    }

    /// Mark consonantal uses of `y` with an internal `Y` marker: word-initial
    /// `y` and any `y` directly after a vowel.
    fn change_y(&self, word: &str) -> String {
        let bytes = word.as_bytes();
        let mut out = String::with_capacity(word.len());
        for (i, &c) in bytes.iter().enumerate() {
            if c == b'y' && (i == 0 || Self::is_vowel(bytes[i - 1])) {
                out.push('Y');
            } else {
                out.push(c as char);
            }
        }
        out
    }

    /// Map irregular words directly to their stems.
    fn special(&self, word: &mut String) -> bool {
        for (from, to) in EXCEPTIONS {
            if word.as_str() == *from {
                *word = (*to).to_string();
                return true;
            }
        }
        false
    }

    /// Step 0: strip apostrophe-s possessive forms.
    fn step0(&self, word: &mut String) {
        if word.ends_with("'s'") {
            word.truncate(word.len() - 3);
        } else if word.ends_with("'s") {
            word.truncate(word.len() - 2);
        } else if word.ends_with('\'') {
            word.pop();
        }
    }

    /// Step 1a: strip plural/verb-inflection `s` suffixes.
    ///
    /// The single-`s` rule requires a vowel-consonant pair strictly before
    /// the final two characters. The suffix classes that would end stemming
    /// outright are absent from this rule set, so the returned flag is
    /// always false today; the driver still consults it.
    fn step1a(&self, word: &mut String) -> bool {
        if word.ends_with("sses") {
            let at = word.len() - 4;
            word.truncate(at);
            word.push_str("ss");
        } else if word.ends_with("ies") || word.ends_with("ied") {
            let n = word.len();
            word.truncate(n - 3);
            if n > 4 {
                word.push('i');
            } else {
                word.push_str("ie");
            }
        } else if word.ends_with("us") || word.ends_with("ss") {
            // leave as is
        } else if word.ends_with('s') {
            let bytes = word.as_bytes();
            let mut strip = false;
            for i in 0..bytes.len().saturating_sub(2) {
                if Self::is_vowel(bytes[i]) && !Self::is_vowel(bytes[i + 1]) {
                    strip = true;
                    break;
                }
            }
            if strip {
                word.pop();
            }
        }
        false
    }

    /// Step 1b: strip verbal `-ed`/`-ing` suffix forms, then restore a
    /// trailing `e` or undo a doubled consonant where the removal left one.
    fn step1b(&self, word: &mut String, start_r1: usize) {
        if word.ends_with("eedly") {
            if word.len() - 5 >= start_r1 {
                let at = word.len() - 5;
                word.truncate(at);
                word.push_str("ee");
            }
            return;
        }
        if word.ends_with("eed") {
            if word.len() - 3 >= start_r1 {
                let at = word.len() - 3;
                word.truncate(at);
                word.push_str("ee");
            }
            return;
        }

        for suffix in ["ingly", "edly", "ing", "ed"] {
            if word.ends_with(suffix) && self.contains_vowel(word, 0, word.len() - suffix.len()) {
                word.truncate(word.len() - suffix.len());
                if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
                    word.push('e');
                } else if self.ends_in_double(word) {
                    word.pop();
                } else if self.is_short(word) {
                    word.push('e');
                }
                break;
            }
        }
    }

    /// Step 1c: terminal `y` becomes `i` when preceded by a consonant.
    fn step1c(&self, word: &mut String) {
        if (word.ends_with('y') || word.ends_with('Y'))
            && word.len() > 2
            && !Self::is_vowel(word.as_bytes()[word.len() - 2])
        {
            word.pop();
            word.push('i');
        }
    }

    /// Step 2: collapse derivational suffixes, restricted to R1.
    fn step2(&self, word: &mut String, start_r1: usize) {
        self.replace_if_exists(word, "fulness", "ful", start_r1);
        self.replace_if_exists(word, "ousness", "ous", start_r1);
        self.replace_if_exists(word, "iveness", "ive", start_r1);
        self.replace_if_exists(word, "ization", "ize", start_r1);
        self.replace_if_exists(word, "biliti", "ble", start_r1);
    }

    /// Step 3: collapse further derivational suffixes in R1/R2.
    fn step3(&self, word: &mut String, start_r1: usize, start_r2: usize) {
        self.replace_if_exists(word, "icate", "ic", start_r1);
        self.replace_if_exists(word, "ative", "", start_r2);
        self.replace_if_exists(word, "alize", "al", start_r1);
    }

    /// Step 4: remove residual suffixes whose removal point lies in R2.
    fn step4(&self, word: &mut String, start_r2: usize) {
        for suffix in STEP4_SUFFIXES {
            if word.ends_with(suffix) && word.len() - suffix.len() >= start_r2 {
                if *suffix == "ion" {
                    let preceding = word.as_bytes()[word.len() - suffix.len() - 1];
                    if preceding == b's' || preceding == b't' {
                        word.truncate(word.len() - suffix.len());
                    }
                } else {
                    word.truncate(word.len() - suffix.len());
                }
                break;
            }
        }
    }

    /// Step 5: drop a trailing `e` or the second `l` of a trailing `ll`,
    /// restricted by region and the short-word predicate.
    fn step5(&self, word: &mut String, start_r1: usize, start_r2: usize) {
        if word.ends_with('e') {
            if word.len() - 1 >= start_r2 {
                word.pop();
            } else if word.len() - 1 >= start_r1 && !self.is_short(word) {
                word.pop();
            }
        } else if word.ends_with('l')
            && word.len() - 1 >= start_r2
            && word.as_bytes()[word.len() - 2] == b'l'
        {
            word.pop();
        }
    }

    /// Short-word predicate: the last three characters form
    /// consonant-vowel-consonant and the final consonant is none of `w`,
    /// `x`, or the `Y` marker.
    fn is_short(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        if bytes.len() < 3 {
            return false;
        }
        let a = bytes[bytes.len() - 3];
        let b = bytes[bytes.len() - 2];
        let c = bytes[bytes.len() - 1];
        !Self::is_vowel(a)
            && Self::is_vowel(b)
            && !Self::is_vowel(c)
            && c != b'w'
            && c != b'x'
            && c != b'Y'
    }
}

impl Stemmer for Porter2Stemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= 2 {
            return word.to_string();
        }

        let mut word = word.to_string();

        if self.special(&mut word) {
            return word;
        }

        word = self.change_y(&word);

        let start_r1 = self.start_r1(&word);
        let start_r2 = self.start_r2(&word, start_r1);

        self.step0(&mut word);
        if self.step1a(&mut word) {
            return word;
        }

        self.step1b(&mut word, start_r1);
        self.step1c(&mut word);
        self.step2(&mut word, start_r1);
        self.step3(&mut word, start_r1, start_r2);
        self.step4(&mut word, start_r2);
        self.step5(&mut word, start_r1, start_r2);

        // Lower any residual Y markers
        word.make_ascii_lowercase();
        word
    }

    fn name(&self) -> &'static str {
        "porter2"
    }
}
