pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod style;

pub use config::Config;
pub use engine::acronyms::AcronymSet;
pub use engine::detect::{detect, DetectedCase, Detection};
pub use engine::segmenter::{segment, Word};
pub use engine::{
    backslashcase, camelcase, constcase, convert, dashcase, dotcase, kebabcase, pascalcase,
    screaming_snakecase, separate_words, slashcase, snakecase, spinalcase, Converter,
};
pub use error::{Error, Result};
pub use style::{CaseStyle, CaseStyleSpec, WordRule};
