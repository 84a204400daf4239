use crate::engine::detect::Detection;
use crate::engine::segmenter::Word;
use crate::style::CaseStyle;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Conversion {
    pub input: String,
    pub style: String,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct JsonSegmentation<'a> {
    input: &'a str,
    words: &'a [Word],
}

#[derive(Debug, Serialize)]
struct JsonDetection<'a> {
    input: &'a str,
    case: String,
    separator: Option<String>,
    style: Option<&'static str>,
    words: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct JsonStyle {
    name: &'static str,
    separator: &'static str,
    word_rule: String,
    preserve: bool,
}

pub fn print_conversions(conversions: &[Conversion], format: OutputFormat) -> Result<()> {
    match format {
        // Plain output so results can be piped
        OutputFormat::Text => {
            for conversion in conversions {
                println!("{}", conversion.output);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(conversions)?),
    }
    Ok(())
}

pub fn print_words(
    segmented: &[(String, Vec<Word>)],
    format: OutputFormat,
    colored: bool,
) -> Result<()> {
    if format == OutputFormat::Json {
        let json: Vec<_> = segmented
            .iter()
            .map(|(input, words)| JsonSegmentation { input, words })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    for (input, words) in segmented {
        if colored {
            println!("{}", input.bold());
        } else {
            println!("{}", input);
        }

        for (i, word) in words.iter().enumerate() {
            let span = format!("{}..{}", word.start, word.end);
            match (&word.acronym, colored) {
                (Some(acronym), true) => println!(
                    "  {} {} {} {}",
                    (i + 1).to_string().dimmed(),
                    word.text.green(),
                    span.blue(),
                    format!("acronym {}", acronym).cyan()
                ),
                (Some(acronym), false) => {
                    println!("  {} {} {} acronym {}", i + 1, word.text, span, acronym)
                }
                (None, true) => println!(
                    "  {} {} {}",
                    (i + 1).to_string().dimmed(),
                    word.text.green(),
                    span.blue()
                ),
                (None, false) => println!("  {} {} {}", i + 1, word.text, span),
            }
        }
    }
    Ok(())
}

pub fn print_detections(
    detections: &[(String, Detection)],
    format: OutputFormat,
    colored: bool,
) -> Result<()> {
    if format == OutputFormat::Json {
        let json: Vec<_> = detections
            .iter()
            .map(|(input, d)| JsonDetection {
                input,
                case: d.case.to_string(),
                separator: d.separator.map(String::from),
                style: d.style.map(CaseStyle::name),
                words: d.words.iter().map(|w| w.text.as_str()).collect(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    for (input, detection) in detections {
        let style = detection.style.map_or("unknown", CaseStyle::name);
        let separator = detection
            .separator
            .map_or_else(|| "none".to_string(), |c| format!("{:?}", c));

        if colored {
            let style = if detection.style.is_some() {
                style.green().bold()
            } else {
                style.yellow()
            };
            println!(
                "{} {} {} {}",
                input.bold(),
                "→".dimmed(),
                style,
                format!("(case: {}, separator: {})", detection.case, separator).dimmed()
            );
        } else {
            println!(
                "{} → {} (case: {}, separator: {})",
                input, style, detection.case, separator
            );
        }
    }
    Ok(())
}

pub fn print_styles(format: OutputFormat, colored: bool) -> Result<()> {
    if format == OutputFormat::Json {
        let json: Vec<_> = CaseStyle::ALL
            .iter()
            .map(|s| JsonStyle {
                name: s.name(),
                separator: s.separator(),
                word_rule: s.word_rule().to_string(),
                preserve: s.preserves_case(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if colored {
        println!("{}", "Available styles:".bold());
    } else {
        println!("Available styles:");
    }
    println!();

    for style in CaseStyle::ALL {
        let separator = format!("{:?}", style.separator());
        let preserve = if style.preserves_case() {
            " (preserves case)"
        } else {
            ""
        };
        if colored {
            println!(
                "  {:<22} {:<6} {}{}",
                style.name().cyan(),
                separator,
                style.word_rule(),
                preserve.dimmed()
            );
        } else {
            println!(
                "  {:<22} {:<6} {}{}",
                style.name(),
                separator,
                style.word_rule(),
                preserve
            );
        }
    }
    Ok(())
}
