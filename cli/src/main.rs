use std::path::PathBuf;

use argot_core::{
    ArgumentProcessor, ColumnFormatter, ColumnLayout, ExitReporter, ProcessError,
    ProcessedArguments, Reporter, SchemaDocument,
};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

mod logging;

/// Output format for processed arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "argot", disable_help_subcommand = true)]
#[command(about = "Check argument schemas and process argument lists against them")]
struct Cli {
    /// Log verbosity written to stderr.
    #[arg(
        long,
        global = true,
        env = "ARGOT_LOG",
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a schema document.
    Check(SchemaArgs),
    /// Print the help text a schema document produces.
    Help(SchemaArgs),
    /// Process an argument list against a schema document.
    Process(ProcessArgs),
}

#[derive(Debug, Args)]
struct SchemaArgs {
    /// Schema document (.json, .yaml or .yml).
    schema: PathBuf,
    /// Do not add the automatic --help flag, whatever the document says.
    #[arg(long)]
    no_auto_help: bool,
}

#[derive(Debug, Args)]
struct ProcessArgs {
    #[command(flatten)]
    schema: SchemaArgs,
    /// Output format for the processed arguments.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Tokens to process, given after `--`.
    #[arg(last = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let result = match cli.command {
        Command::Check(args) => run_check(args),
        Command::Help(args) => run_help(args),
        Command::Process(args) => run_process(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_check(args: SchemaArgs) -> Result<(), String> {
    let mut processor = build_processor(&args, Vec::new())?;
    if let Err(err) = processor.process() {
        fail(err);
    }

    println!("Validated {} argument(s).", processor.schema().len());
    Ok(())
}

fn run_help(args: SchemaArgs) -> Result<(), String> {
    let mut processor = build_processor(&args, Vec::new())?;
    if let Err(err) = processor.process() {
        fail(err);
    }

    for line in processor.help_lines() {
        println!("{line}");
    }
    Ok(())
}

fn run_process(args: ProcessArgs) -> Result<(), String> {
    let mut processor = build_processor(&args.schema, args.tokens)?;
    let processed = processor.run();

    let raw = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(processed)
            .map_err(|err| format!("Failed to serialize arguments: {err}"))?,
        CliOutputFormat::Yaml => serde_yaml::to_string(processed)
            .map_err(|err| format!("Failed to serialize arguments: {err}"))?,
        CliOutputFormat::Table => arguments_table(processed).join("\n"),
    };
    println!("{}", raw.trim_end());
    Ok(())
}

fn build_processor(args: &SchemaArgs, tokens: Vec<String>) -> Result<ArgumentProcessor, String> {
    let document = SchemaDocument::load(&args.schema)
        .map_err(|err| format!("Failed to load '{}': {err}", args.schema.display()))?;

    let specs = match document.specs() {
        Ok(specs) => specs,
        Err(err) => fail(err.into()),
    };

    let mut config = document.config;
    if args.no_auto_help {
        config.auto_help = false;
    }
    debug!(schema = %args.schema.display(), specs = specs.len(), tokens = tokens.len(), "Loaded schema document");

    Ok(ArgumentProcessor::new(tokens, specs, config))
}

fn fail(err: ProcessError) -> ! {
    ExitReporter.fail(err.exit_code(), &err.lines())
}

/// One row per flag: long name, entry count, values.
fn arguments_table(processed: &ProcessedArguments) -> Vec<String> {
    let mut rows = vec![vec![
        "ARGUMENT".to_string(),
        "ENTRIES".to_string(),
        "VALUES".to_string(),
    ]];
    for (long, entries) in processed.iter() {
        let values: Vec<&str> = entries
            .iter()
            .map(|entry| entry.as_deref().unwrap_or("-"))
            .collect();
        rows.push(vec![
            long.to_string(),
            entries.len().to_string(),
            values.join(" "),
        ]);
    }
    ColumnLayout::default().format_table(&rows, &["", "  ", "  "])
}
