use crate::engine::classify::is_separator;
use crate::error::{Error, Result};
use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text to its case-insensitive comparable form (NFC, then lowercase)
pub fn fold(text: &str) -> String {
    text.nfc().flat_map(char::to_lowercase).collect()
}

/// Caller-registered acronyms, kept in registration order
#[derive(Debug, Clone, Default)]
pub struct AcronymSet {
    canonical: Vec<String>,
    folded: Vec<String>,
    // Pattern ids line up with `canonical`; `None` when the set is empty
    automaton: Option<AhoCorasick>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcronymMatch<'a> {
    pub canonical: &'a str,
    /// Number of grapheme clusters of the run consumed by the match
    pub len: usize,
}

impl AcronymSet {
    /// Build a set from the caller's list; earlier entries win ties
    pub fn new<I, S>(acronyms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical = Vec::new();
        let mut folded: Vec<String> = Vec::new();

        for acronym in acronyms {
            let acronym = acronym.as_ref();
            validate(acronym)?;

            let key = fold(acronym);
            if folded.contains(&key) {
                log::debug!("Skipping duplicate acronym '{}'", acronym);
                continue;
            }
            canonical.push(acronym.to_string());
            folded.push(key);
        }

        let automaton = if folded.is_empty() {
            None
        } else {
            let ac = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostLongest)
                .start_kind(StartKind::Anchored)
                .build(&folded)
                .map_err(|e| Error::Matcher(e.to_string()))?;
            Some(ac)
        };

        Ok(Self {
            canonical,
            folded,
            automaton,
        })
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.canonical.iter().map(String::as_str)
    }

    /// Longest registered acronym that is a prefix of `run`.
    ///
    /// `run` holds the grapheme clusters of an uppercase run. A match must end
    /// on a cluster boundary of the run; anything else counts as no match.
    pub fn match_longest(&self, run: &[&str]) -> Option<AcronymMatch<'_>> {
        let automaton = self.automaton.as_ref()?;

        let mut haystack = String::new();
        let mut boundaries = Vec::with_capacity(run.len());
        for grapheme in run {
            haystack.push_str(&fold(grapheme));
            boundaries.push(haystack.len());
        }

        let found = automaton.find(Input::new(&haystack).anchored(Anchored::Yes))?;
        let len = boundaries.iter().position(|&b| b == found.end())? + 1;
        let canonical = &self.canonical[found.pattern().as_usize()];
        log::trace!("Acronym '{}' matched {} clusters of {:?}", canonical, len, run);

        Some(AcronymMatch { canonical, len })
    }

    /// Registered spelling of `word` when the whole word folds to an acronym
    pub fn match_exact(&self, word: &str) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        let key = fold(word);
        self.folded
            .iter()
            .position(|f| *f == key)
            .map(|i| self.canonical[i].as_str())
    }
}

fn validate(acronym: &str) -> Result<()> {
    let invalid = |reason: String| Error::InvalidAcronym {
        acronym: acronym.to_string(),
        reason,
    };

    if acronym.is_empty() {
        return Err(invalid("acronym is empty".to_string()));
    }
    for ch in acronym.chars() {
        if is_separator(ch) {
            return Err(invalid(format!("contains separator '{}'", ch)));
        }
        if !ch.is_alphanumeric() && !is_combining_mark(ch) {
            return Err(invalid(format!("contains non-alphanumeric '{}'", ch)));
        }
    }
    Ok(())
}
