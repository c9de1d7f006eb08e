use camino::Utf8PathBuf;
use clap::{
    builder::{PossibleValuesParser, TypedValueParser},
    Args, Parser, Subcommand, ValueEnum,
};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[clap(version, about, long_about = None)]

/// Classify target triples
pub struct Cli {
    /// How verbose logging should be (log level)
    #[clap(long)]
    #[clap(default_value_t = LevelFilter::WARN)]
    #[clap(value_parser = PossibleValuesParser::new(["off", "error", "warn", "info", "debug", "trace"]).map(|s| s.parse::<LevelFilter>().expect("possible values are valid")))]
    #[clap(help_heading = "GLOBAL OPTIONS", global = true)]
    pub verbose: LevelFilter,

    /// The format of the output
    #[clap(long, value_enum)]
    #[clap(default_value_t = OutputFormat::Human)]
    #[clap(help_heading = "GLOBAL OPTIONS", global = true)]
    pub output_format: OutputFormat,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify one or more target triples
    Classify(ClassifyArgs),
    /// Classify every well-known target triple
    Known,
    /// Print the JSON Schema for the report format
    Schema,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// The triples to classify (e.g. arm64-apple-ios14.0-simulator)
    #[clap(required = true)]
    pub triples: Vec<String>,

    /// An SDKSettings.json describing the SDK being built against
    ///
    /// If given, the report includes the SDK version to record in the binary.
    #[clap(long)]
    pub sdk_info: Option<Utf8PathBuf>,

    /// Another triple to check each triple against for zippering
    /// (combining a macOS and a Mac Catalyst build into one binary)
    #[clap(long)]
    pub zipper_with: Option<String>,
}

/// Style of output we should produce
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// Machine-readable JSON output
    Json,
}
