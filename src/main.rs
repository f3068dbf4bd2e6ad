use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use which_query::config::{self, Settings};
use which_query::{suggest_path, OutputFormat, SuggestOptions, Variant, WhichQueryError};

#[derive(Parser)]
#[command(name = "which-query")]
#[command(about = "Suggest a Testing Library query for an element of an HTML page", long_about = None, version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// HTML file to inspect
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// CSS selector of the clicked element
    #[arg(value_name = "SELECTOR")]
    selector: Option<String>,

    /// Use the Nth match of SELECTOR (0-based)
    #[arg(long, default_value_t = 0)]
    nth: usize,

    /// Query variant (getBy, queryBy, findBy, getAllBy, queryAllBy, findAllBy); repeatable
    #[arg(long = "variant")]
    variants: Vec<String>,

    /// Suggest for every variant, in context menu order
    #[arg(long, conflicts_with = "variants")]
    all_variants: bool,

    /// Report every element inspected during the search
    #[arg(long)]
    debug: bool,

    /// JSON output instead of plain text
    #[arg(long)]
    json: bool,

    /// Also write the suggestion to this file
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Settings file (default: $XDG_CONFIG_HOME/which-query/settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change persisted options
    Options {
        /// Persist the debug highlight flag
        #[arg(long, value_name = "BOOL")]
        debug: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Options { debug }) => handle_options(cli.config.as_deref(), debug.as_deref()),
        None => handle_suggest(cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn handle_suggest(cli: Cli) -> Result<(), WhichQueryError> {
    let (file, selector) = match (cli.file, cli.selector) {
        (Some(file), Some(selector)) => (file, selector),
        _ => {
            eprintln!("Error: FILE and SELECTOR are required");
            process::exit(1);
        }
    };

    let variants = if cli.all_variants {
        Variant::ALL.to_vec()
    } else if cli.variants.is_empty() {
        vec![Variant::GetBy]
    } else {
        cli.variants
            .iter()
            .map(|v| v.parse())
            .collect::<Result<Vec<Variant>, _>>()?
    };

    let debug = config::resolve_debug(cli.debug, cli.config.as_deref())?;
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Plain };

    let options = SuggestOptions {
        selector,
        nth: cli.nth,
        variants,
        debug,
        format,
        output: cli.output,
    };

    let output = suggest_path(&file, options)?;
    print!("{}", output);
    Ok(())
}

fn handle_options(config_path: Option<&Path>, debug: Option<&str>) -> Result<(), WhichQueryError> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => Settings::default_path()
            .ok_or_else(|| WhichQueryError::ConfigError("cannot locate a config directory; pass --config".to_string()))?,
    };

    let mut settings = Settings::load(&path)?;
    if let Some(value) = debug {
        settings.debug_enabled = config::parse_bool(value)?;
        settings.save(&path)?;
    }

    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
