use crate::engine::acronyms::AcronymSet;
use crate::engine::classify::is_separator;
use crate::engine::segmenter::{segment, Word};
use crate::style::CaseStyle;
use serde::Serialize;
use std::fmt;

/// Letter casing observed across the words of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedCase {
    Lower,
    Upper,
    Camel,
    Pascal,
    Mixed,
    Unknown,
}

impl fmt::Display for DetectedCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectedCase::Lower => "lower",
            DetectedCase::Upper => "upper",
            DetectedCase::Camel => "camel",
            DetectedCase::Pascal => "pascal",
            DetectedCase::Mixed => "mixed",
            DetectedCase::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct Detection {
    pub words: Vec<Word>,
    pub case: DetectedCase,
    /// The separator, when exactly one kind is used
    pub separator: Option<char>,
    /// Best matching style, `None` when the input is ambiguous
    pub style: Option<CaseStyle>,
}

/// Shapes a single word is compatible with
#[derive(Debug, Clone, Copy)]
struct Shape {
    lower: bool,
    upper: bool,
    title: bool,
}

fn shape(word: &Word) -> Shape {
    let cased: Vec<char> = word
        .text
        .chars()
        .filter(|c| c.is_uppercase() || c.is_lowercase())
        .collect();

    let Some((head, tail)) = cased.split_first() else {
        return Shape {
            lower: true,
            upper: true,
            title: true,
        };
    };

    let lower = cased.iter().all(|c| c.is_lowercase());
    let upper = cased.iter().all(|c| c.is_uppercase());
    let title = head.is_uppercase() && tail.iter().all(|c| c.is_lowercase());

    Shape {
        lower,
        upper: upper || word.is_acronym(),
        title: title || (word.is_acronym() && !lower),
    }
}

fn detect_case(words: &[Word]) -> DetectedCase {
    let shapes: Vec<Shape> = words.iter().map(shape).collect();
    let Some((first, rest)) = shapes.split_first() else {
        return DetectedCase::Unknown;
    };

    if shapes.iter().all(|s| s.lower) {
        DetectedCase::Lower
    } else if shapes.iter().all(|s| s.upper) {
        DetectedCase::Upper
    } else if first.lower && rest.iter().all(|s| s.title) {
        DetectedCase::Camel
    } else if shapes.iter().all(|s| s.title) {
        DetectedCase::Pascal
    } else {
        DetectedCase::Mixed
    }
}

/// Work out which convention `input` is written in
pub fn detect(input: &str, acronyms: &AcronymSet) -> Detection {
    let words = segment(input, acronyms);
    let case = detect_case(&words);

    let mut seen: Vec<char> = input.chars().filter(|&c| is_separator(c)).collect();
    seen.sort_unstable();
    seen.dedup();
    let separator = match seen.as_slice() {
        [only] => Some(*only),
        _ => None,
    };

    let style = if seen.len() > 1 {
        None
    } else {
        match (separator, case) {
            (None, DetectedCase::Camel) => Some(CaseStyle::Camel),
            (None, DetectedCase::Pascal) => Some(CaseStyle::Pascal),
            (Some('_'), DetectedCase::Lower) => Some(CaseStyle::Snake),
            (Some('_'), DetectedCase::Upper) => Some(CaseStyle::Const),
            (Some('-'), DetectedCase::Lower) => Some(CaseStyle::Dash),
            (Some('.'), DetectedCase::Lower) => Some(CaseStyle::Dot),
            (Some(' '), _) => Some(CaseStyle::SeparateWords),
            (Some('/'), _) => Some(CaseStyle::Slash),
            (Some('\\'), _) => Some(CaseStyle::Backslash),
            _ => None,
        }
    };

    Detection {
        words,
        case,
        separator,
        style,
    }
}
