pub mod acronyms;
pub mod classify;
pub mod composer;
pub mod detect;
pub mod segmenter;

use crate::error::Result;
use crate::style::CaseStyle;
use crate::Config;
use acronyms::AcronymSet;
use detect::Detection;
use segmenter::Word;

/// Segment `input` and render it in `style`
pub fn convert(input: &str, style: CaseStyle, acronyms: &AcronymSet) -> String {
    let words = segmenter::segment(input, acronyms);
    composer::compose(&words, style.spec())
}

/// `fooBarString`
pub fn camelcase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Camel, acronyms)
}

/// `FooBarString`
pub fn pascalcase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Pascal, acronyms)
}

/// `foo_bar_string`
pub fn snakecase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Snake, acronyms)
}

/// `foo-bar-string`
pub fn dashcase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Dash, acronyms)
}

pub fn spinalcase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Spinal, acronyms)
}

pub fn kebabcase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Kebab, acronyms)
}

/// `FOO_BAR_STRING`
pub fn constcase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Const, acronyms)
}

pub fn screaming_snakecase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::ScreamingSnake, acronyms)
}

/// `foo.bar.string`
pub fn dotcase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Dot, acronyms)
}

/// Words joined by spaces, each keeping its source casing
pub fn separate_words(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::SeparateWords, acronyms)
}

/// `foo/bar/string`, each word keeping its source casing
pub fn slashcase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Slash, acronyms)
}

/// `foo\bar\string`, each word keeping its source casing
pub fn backslashcase(input: &str, acronyms: &AcronymSet) -> String {
    convert(input, CaseStyle::Backslash, acronyms)
}

/// Converter bound to the acronyms of a loaded configuration
pub struct Converter {
    acronyms: AcronymSet,
}

impl Converter {
    pub fn new(config: &Config) -> Result<Self> {
        let acronyms = AcronymSet::new(&config.acronyms)?;
        log::debug!("Registered {} acronyms", acronyms.len());
        Ok(Self { acronyms })
    }

    pub fn acronyms(&self) -> &AcronymSet {
        &self.acronyms
    }

    pub fn convert(&self, input: &str, style: CaseStyle) -> String {
        convert(input, style, &self.acronyms)
    }

    pub fn words(&self, input: &str) -> Vec<Word> {
        segmenter::segment(input, &self.acronyms)
    }

    pub fn detect(&self, input: &str) -> Detection {
        detect::detect(input, &self.acronyms)
    }
}
