use crate::engine::acronyms::AcronymSet;
use crate::engine::classify::{classify_grapheme, CharClass};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// A single word recognised in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// Exact source spelling
    pub text: String,
    /// Byte offset where the word starts in the input
    pub start: usize,
    /// Byte offset where the word ends in the input
    pub end: usize,
    /// Registered spelling, when the word matched an acronym
    pub acronym: Option<String>,
}

impl Word {
    pub fn is_acronym(&self) -> bool {
        self.acronym.is_some()
    }

    /// Registered acronym spelling, or the source text for ordinary words
    pub fn canonical(&self) -> &str {
        self.acronym.as_deref().unwrap_or(&self.text)
    }
}

#[derive(Debug, Clone, Copy)]
struct Cluster<'a> {
    offset: usize,
    text: &'a str,
    class: CharClass,
}

/// Split `input` into words, whatever convention it is written in.
///
/// Separators always end a word and are dropped. Inside a separator-free
/// span a lowercase letter or digit followed by an uppercase letter starts a
/// new word, and an uppercase run followed by lowercase hands its last letter
/// to the next word ("HTTPServer" -> "HTTP", "Server") unless a registered
/// acronym claims a different split.
pub fn segment(input: &str, acronyms: &AcronymSet) -> Vec<Word> {
    let mut words = Vec::new();
    let mut span = Vec::new();

    for (offset, grapheme) in input.grapheme_indices(true) {
        let class = classify_grapheme(grapheme);
        if class == CharClass::Separator {
            split_span(input, &span, acronyms, &mut words);
            span.clear();
        } else {
            span.push(Cluster {
                offset,
                text: grapheme,
                class,
            });
        }
    }
    split_span(input, &span, acronyms, &mut words);

    log::debug!("Segmented {:?} into {} words", input, words.len());
    words
}

fn split_span(
    input: &str,
    span: &[Cluster<'_>],
    acronyms: &AcronymSet,
    words: &mut Vec<Word>,
) {
    let n = span.len();
    let mut word_start = 0;
    let mut i = 0;

    while i < n {
        if span[i].class != CharClass::Upper {
            i += 1;
            continue;
        }

        if i > word_start && matches!(span[i - 1].class, CharClass::Lower | CharClass::Digit) {
            push_word(input, &span[word_start..i], None, acronyms, words);
            word_start = i;
        }

        let run_end = span[i..]
            .iter()
            .position(|c| c.class != CharClass::Upper)
            .map_or(n, |p| i + p);
        let followed_by_lower = run_end < n && span[run_end].class == CharClass::Lower;
        let run: Vec<&str> = span[i..run_end].iter().map(|c| c.text).collect();

        // Chain acronyms from the start of the run, each one anchored where
        // the previous ended. Before a lowercase letter the chain stops at the
        // default boundary, so the last capital is only taken by an acronym
        // that already started before it.
        let limit = if followed_by_lower {
            run.len() - 1
        } else {
            run.len()
        };
        let mut matched = Vec::new();
        let mut consumed = 0;
        while consumed < limit {
            match acronyms.match_longest(&run[consumed..]) {
                Some(m) => {
                    matched.push((consumed, m));
                    consumed += m.len;
                }
                None => break,
            }
        }

        // Acronyms must reach the default boundary, or cover the whole run
        // when no lowercase letter follows; otherwise the default split holds.
        if consumed < limit {
            matched.clear();
            consumed = 0;
        }

        for (offset, m) in matched {
            let at = i + offset;
            if at > word_start {
                push_word(input, &span[word_start..at], None, acronyms, words);
            }
            push_word(input, &span[at..at + m.len], Some(m.canonical), acronyms, words);
            word_start = at + m.len;
        }

        let rest = i + consumed;
        if followed_by_lower && run_end - rest >= 2 {
            let split = run_end - 1;
            push_word(input, &span[word_start..split], None, acronyms, words);
            word_start = split;
        }

        i = run_end;
    }

    if word_start < n {
        push_word(input, &span[word_start..], None, acronyms, words);
    }
}

fn push_word(
    input: &str,
    clusters: &[Cluster<'_>],
    acronym: Option<&str>,
    acronyms: &AcronymSet,
    words: &mut Vec<Word>,
) {
    let (Some(first), Some(last)) = (clusters.first(), clusters.last()) else {
        return;
    };

    let start = first.offset;
    let end = last.offset + last.text.len();
    let text = &input[start..end];
    let acronym = acronym.or_else(|| acronyms.match_exact(text));

    words.push(Word {
        text: text.to_string(),
        start,
        end,
        acronym: acronym.map(str::to_string),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str, acronyms: &AcronymSet) -> Vec<String> {
        segment(input, acronyms).into_iter().map(|w| w.text).collect()
    }

    #[test]
    fn test_convention_agnostic() {
        let none = AcronymSet::default();
        let expected = vec!["foo", "bar", "string"];
        for input in ["fooBarString", "foo_bar_string", "FOO-BAR-STRING", "foo.bar.string"] {
            let lowered: Vec<String> = texts(input, &none)
                .iter()
                .map(|w| w.to_lowercase())
                .collect();
            assert_eq!(lowered, expected, "input {}", input);
        }
    }

    #[test]
    fn test_trailing_capital_starts_next_word() {
        let none = AcronymSet::default();
        assert_eq!(texts("HTTPServer", &none), vec!["HTTP", "Server"]);
        assert_eq!(texts("fooHTTPBarString", &none), vec!["foo", "HTTP", "Bar", "String"]);
    }

    #[test]
    fn test_acronym_atomicity() {
        let acronyms = AcronymSet::new(["HTTP"]).unwrap();
        let words = segment("fooHTTPBarString", &acronyms);
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["foo", "HTTP", "Bar", "String"]);
        assert!(words[1].is_acronym());
        assert!(!words[2].is_acronym());
    }

    #[test]
    fn test_acronym_longer_than_default_split() {
        let acronyms = AcronymSet::new(["HTTPB"]).unwrap();
        assert_eq!(texts("HTTPBar", &acronyms), vec!["HTTPB", "ar"]);
    }

    #[test]
    fn test_back_to_back_acronyms() {
        let acronyms = AcronymSet::new(["HTTP", "XML"]).unwrap();
        assert_eq!(texts("HTTPXMLParser", &acronyms), vec!["HTTP", "XML", "Parser"]);
        assert_eq!(texts("getHTTPXML", &acronyms), vec!["get", "HTTP", "XML"]);
    }

    #[test]
    fn test_single_letter_acronym_leaves_camel_words_alone() {
        let acronyms = AcronymSet::new(["A", "I"]).unwrap();
        assert_eq!(texts("fooIndex", &acronyms), vec!["foo", "Index"]);
        assert_eq!(texts("getAbc", &acronyms), vec!["get", "Abc"]);
        assert_eq!(texts("getAValue", &acronyms), vec!["get", "A", "Value"]);
        assert_eq!(crate::engine::snakecase("fooIndex", &acronyms), "foo_index");
    }

    #[test]
    fn test_acronym_shorter_than_default_split_is_ignored() {
        let acronyms = AcronymSet::new(["HT"]).unwrap();
        assert_eq!(texts("fooHTTPBar", &acronyms), vec!["foo", "HTTP", "Bar"]);
        assert!(!segment("fooHTTPBar", &acronyms)[1].is_acronym());
    }

    #[test]
    fn test_last_capital_not_claimed_by_trailing_acronym() {
        let acronyms = AcronymSet::new(["ABC", "D"]).unwrap();
        assert_eq!(texts("ABCDog", &acronyms), vec!["ABC", "Dog"]);
    }

    #[test]
    fn test_partial_acronym_at_end_keeps_run_whole() {
        let acronyms = AcronymSet::new(["HTTP"]).unwrap();
        let words = segment("useHTTPS", &acronyms);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text, "HTTPS");
        assert!(!words[1].is_acronym());
    }

    #[test]
    fn test_whole_word_acronym_in_any_case() {
        let acronyms = AcronymSet::new(["HTTP"]).unwrap();
        let words = segment("foo_http_bar", &acronyms);
        assert_eq!(words[1].text, "http");
        assert_eq!(words[1].canonical(), "HTTP");
    }

    #[test]
    fn test_digits_attach_to_preceding_word() {
        let none = AcronymSet::default();
        assert_eq!(texts("foo2Bar", &none), vec!["foo2", "Bar"]);
        assert_eq!(texts("v2Api", &none), vec!["v2", "Api"]);
        assert_eq!(texts("42answers", &none), vec!["42answers"]);
        assert_eq!(texts("utf8_decoder", &none), vec!["utf8", "decoder"]);
    }

    #[test]
    fn test_unicode_acronym() {
        let acronyms = AcronymSet::new(["HÉÉP"]).unwrap();
        assert_eq!(
            texts("fooHÉÉPBarString", &acronyms),
            vec!["foo", "HÉÉP", "Bar", "String"]
        );
    }

    #[test]
    fn test_offsets_are_lossless() {
        let input = "fóo-HTTPBar__baz";
        for word in segment(input, &AcronymSet::default()) {
            assert_eq!(&input[word.start..word.end], word.text);
        }
    }

    #[test]
    fn test_edge_inputs() {
        let none = AcronymSet::default();
        assert!(segment("", &none).is_empty());
        assert!(segment("__--..", &none).is_empty());
        assert_eq!(texts("X", &none), vec!["X"]);
        assert_eq!(texts("foo", &none), vec!["foo"]);
    }
}
