use anyhow::{Context, Result};
use caseconv::cli::output::{self, Conversion, OutputFormat};
use caseconv::{CaseStyle, Config, Converter};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "caseconv")]
#[command(version, about = "Convert identifiers between naming conventions", long_about = None)]
struct Cli {
    /// Register an acronym, e.g. HTTP (repeatable; earlier ones win ties)
    #[arg(short, long = "acronym", value_name = "ACRONYM", global = true)]
    acronyms: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert identifiers to another style
    Convert {
        /// Target style (camelcase, snakecase, kebabcase, ...)
        #[arg(short, long, value_name = "STYLE")]
        to: Option<String>,

        /// Identifiers to convert; read from stdin, one per line, when omitted
        inputs: Vec<String>,
    },
    /// Show how identifiers split into words
    Words {
        inputs: Vec<String>,
    },
    /// Guess which style identifiers are written in
    Detect {
        inputs: Vec<String>,
    },
    /// List available styles
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseconv", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let config = Config::load(cli.acronyms)?;
    let colored = !cli.no_color && config.color_enabled();
    log::debug!("Loaded config: {:?}", config);

    match command {
        Commands::Convert { to, inputs } => {
            let style = match to {
                Some(name) => name.parse::<CaseStyle>()?,
                None => config
                    .default_style()?
                    .context("No target style given. Use --to or set default_style in config.")?,
            };
            let converter = Converter::new(&config)?;
            let conversions: Vec<Conversion> = read_inputs(inputs)?
                .into_iter()
                .map(|input| {
                    let output = converter.convert(&input, style);
                    Conversion {
                        input,
                        style: style.name().to_string(),
                        output,
                    }
                })
                .collect();
            output::print_conversions(&conversions, cli.format)?;
        }
        Commands::Words { inputs } => {
            let converter = Converter::new(&config)?;
            let segmented: Vec<_> = read_inputs(inputs)?
                .into_iter()
                .map(|input| {
                    let words = converter.words(&input);
                    (input, words)
                })
                .collect();
            output::print_words(&segmented, cli.format, colored)?;
        }
        Commands::Detect { inputs } => {
            let converter = Converter::new(&config)?;
            let detections: Vec<_> = read_inputs(inputs)?
                .into_iter()
                .map(|input| {
                    let detection = converter.detect(&input);
                    (input, detection)
                })
                .collect();
            output::print_detections(&detections, cli.format, colored)?;
        }
        Commands::Styles => output::print_styles(cli.format, colored)?,
    }

    Ok(())
}

fn read_inputs(inputs: Vec<String>) -> Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    log::info!("Reading identifiers from stdin");
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read from stdin")
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
