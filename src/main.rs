use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedback_analyzer::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "feedback-analyzer",
    version,
    about = "Student feedback analyzer: cleaning, sentiment, rating correlation and word clouds",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); defaults to the configured format
    #[arg(long, global = true, value_parser = ["text", "json"])]
    log_format: Option<String>,

    /// TOML configuration file; environment variables are used otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a batch of comments and write a report and word cloud
    Analyze {
        /// CSV table or text file with one comment per line
        #[arg(short, long)]
        input: PathBuf,

        /// Subject (course) label used in file names and the report
        #[arg(short, long, default_value = "AI")]
        subject: String,

        /// Rating column to correlate with sentiment (CSV input, repeatable)
        #[arg(short, long = "rating-col")]
        rating_col: Vec<String>,

        /// Output directory (overrides the configured one)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Report format (markdown, json)
        #[arg(short, long, default_value = "markdown")]
        format: String,
    },

    /// Print the normalized form of a text
    Clean {
        /// Text to normalize
        text: String,
    },

    /// Score each line of a text file and print JSON
    Score {
        /// Text file with one comment per line
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Render a word cloud of a text file
    Wordcloud {
        /// Text file; normalized before counting
        #[arg(short, long)]
        input: PathBuf,

        /// SVG output path
        #[arg(short, long)]
        output: PathBuf,

        /// Maximum number of words (overrides the configured value)
        #[arg(short, long)]
        max_words: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize tracing/logging
    let log_format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    setup_tracing(log_format, &config.logging.level, cli.verbose)?;

    tracing::debug!(config = ?cli.config, "Configuration loaded");

    match cli.command {
        Commands::Analyze {
            input,
            subject,
            rating_col,
            output_dir,
            format,
        } => {
            tracing::info!(
                input = %input.display(),
                subject = %subject,
                rating_cols = ?rating_col,
                format = %format,
                "Starting analyze command"
            );
            commands::analyze(
                &config,
                commands::AnalyzeParams {
                    input,
                    subject,
                    rating_cols: rating_col,
                    output_dir,
                    format,
                },
            )?;
        }

        Commands::Clean { text } => {
            commands::clean(&config, &text);
        }

        Commands::Score { input } => {
            tracing::info!(input = %input.display(), "Starting score command");
            commands::score(&config, &input)?;
        }

        Commands::Wordcloud {
            input,
            output,
            max_words,
        } => {
            tracing::info!(
                input = %input.display(),
                output = %output.display(),
                max_words = ?max_words,
                "Starting wordcloud command"
            );
            commands::wordcloud(&config, &input, &output, max_words)?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("feedback_analyzer=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("feedback_analyzer={level},warn"))
            .context("Invalid log level")?
    };

    // Logs go to stderr; stdout carries command output
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        "text" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
        other => anyhow::bail!("Unknown log format '{other}' (expected text or json)"),
    }

    Ok(())
}
