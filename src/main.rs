//! glycan-tools: glycan identifier resolution and catalog search
//!
//! Command-line front end over the glycan-tools library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use glycan_tools::{
    cli::{self, ConvertTarget, SearchMode},
    config::{self, AppConfig},
    convert::{IupacConverter, MolWurcsConverter, NoOpConverter, SmilesConverter},
    model::GlycanCatalog,
    resolve::{DirFileStore, DirPresenceProbe, ResolutionService},
    search::SearchEngine,
};
use std::io;
use std::path::PathBuf;

/// Build long version string with notation support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported Notations:",
        "\n  GLYCAM linear names, IUPAC-condensed, WURCS 2.0, GlyTouCan accessions",
        "\n\nSearch Modes:",
        "\n  structural (WURCS similarity), text (fuzzy), category, end-residue"
    )
}

#[derive(Parser)]
#[command(name = "glycan-tools")]
#[command(author = "GlycoShape Team")]
#[command(version, long_version = build_long_version())]
#[command(about = "Glycan identifier resolution and catalog search", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success / identifier found
    1  Negative result (not found, empty search)
    2  Error occurred

EXAMPLES:
    # Does this accession exist in the catalog?
    glycan-tools exists G00028MO

    # Convert a GLYCAM name to condensed IUPAC
    glycan-tools convert glycam-to-iupac DManpa1-3DManpb1-4DGlcpNAcb1-OH

    # Rank the catalog against a WURCS query
    glycan-tools search --mode structural 'WURCS=2.0/3,4,3/...'

    # Free-text fallback
    glycan-tools search 'high mannose'")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Conversion direction for the `convert` subcommand
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConvertKind {
    /// GLYCAM linear name to condensed IUPAC
    GlycamToIupac,
    /// IUPAC to (GlyTouCan, WURCS) via the external converter
    IupacToWurcs,
    /// Derive alpha/beta anomer variants from a WURCS string
    Anomers,
    /// Parse a WURCS string into its structural breakdown
    Split,
    /// SMILES to WURCS via MolWURCS
    SmilesToWurcs,
}

impl From<ConvertKind> for ConvertTarget {
    fn from(kind: ConvertKind) -> Self {
        match kind {
            ConvertKind::GlycamToIupac => Self::GlycamToIupac,
            ConvertKind::IupacToWurcs => Self::IupacToWurcs,
            ConvertKind::Anomers => Self::AnomerVariants,
            ConvertKind::Split => Self::WurcsSplit,
            ConvertKind::SmilesToWurcs => Self::SmilesToWurcs,
        }
    }
}

/// Search strategy for the `search` subcommand
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SearchModeArg {
    /// WURCS structural similarity ranking
    Structural,
    /// Free-text fuzzy search
    Text,
    /// Glycan-class filter (N-Glycans, O-Glycans, GAGs, ...)
    Category,
    /// End-residue suffix search
    End,
}

impl From<SearchModeArg> for SearchMode {
    fn from(mode: SearchModeArg) -> Self {
        match mode {
            SearchModeArg::Structural => Self::Structural,
            SearchModeArg::Text => Self::Text,
            SearchModeArg::Category => Self::Category,
            SearchModeArg::End => Self::End,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between glycan notations
    Convert {
        /// Conversion to run
        #[arg(value_enum)]
        kind: ConvertKind,

        /// Input string in the source notation
        input: String,
    },

    /// Check whether an identifier exists, reporting the matching channel
    Exists {
        /// Identifier in any supported notation
        identifier: String,
    },

    /// Fetch the full catalog record for an identifier
    Get {
        /// Internal ID, GlyTouCan accession or IUPAC string
        identifier: String,
    },

    /// Resolve an identifier to its structure file on disk
    Files {
        /// Internal ID, GlyTouCan accession or IUPAC string
        identifier: String,
    },

    /// Search the catalog
    Search {
        /// Query string (WURCS, free text, class name or residue suffix)
        query: String,

        /// Search strategy
        #[arg(short, long, value_enum, default_value = "text")]
        mode: SearchModeArg,
    },

    /// List every GlyTouCan accession the catalog serves
    Available,

    /// Print a summary of the loaded catalog
    Stats,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(app: &AppConfig) -> Result<GlycanCatalog> {
    let dataset = app.catalog.dataset_file();
    GlycanCatalog::from_path(&dataset)
        .with_context(|| format!("loading catalog dataset {}", dataset.display()))
}

fn build_iupac_converter(app: &AppConfig) -> Result<Box<dyn IupacConverter>> {
    #[cfg(feature = "conversion")]
    if app.conversion.enabled {
        use glycan_tools::convert::{GlycosmosClient, GlycosmosClientConfig};
        let client = GlycosmosClient::new(GlycosmosClientConfig {
            api_base: app.conversion.api_base.clone(),
            converter_version: app.conversion.converter_version.clone(),
            timeout: std::time::Duration::from_secs(app.conversion.timeout_secs),
            max_retries: app.conversion.max_retries,
        })?;
        return Ok(Box::new(client));
    }

    let _ = app;
    Ok(Box::new(NoOpConverter))
}

fn build_smiles_converter(app: &AppConfig) -> Box<dyn SmilesConverter> {
    match &app.conversion.molwurcs_jar {
        Some(jar) => Box::new(MolWurcsConverter::new(jar.clone())),
        None => Box::new(NoOpConverter),
    }
}

fn run() -> Result<i32> {
    let args = Cli::parse();
    init_tracing(args.verbose, args.quiet);

    let (app, loaded_from) = config::load_or_default(args.config.as_deref())?;
    if let Some(path) = &loaded_from {
        tracing::debug!(path = %path.display(), "using configuration file");
    }

    match args.command {
        Commands::Convert { kind, input } => {
            let iupac_converter = build_iupac_converter(&app)?;
            let smiles_converter = build_smiles_converter(&app);
            cli::run_convert(
                kind.into(),
                &input,
                iupac_converter.as_ref(),
                smiles_converter.as_ref(),
            )
        }
        Commands::Exists { identifier } => {
            let catalog = load_catalog(&app)?;
            let converter = build_iupac_converter(&app)?;
            let probe =
                DirPresenceProbe::with_config(app.catalog.probe_roots(), &app.probe);
            let service = ResolutionService::new(&catalog, converter.as_ref(), &probe);
            cli::run_exists(&service, &identifier)
        }
        Commands::Get { identifier } => {
            let catalog = load_catalog(&app)?;
            let converter = build_iupac_converter(&app)?;
            let probe =
                DirPresenceProbe::with_config(app.catalog.probe_roots(), &app.probe);
            let service = ResolutionService::new(&catalog, converter.as_ref(), &probe);
            cli::run_get(&service, &identifier)
        }
        Commands::Files { identifier } => {
            let catalog = load_catalog(&app)?;
            let converter = build_iupac_converter(&app)?;
            let probe =
                DirPresenceProbe::with_config(app.catalog.probe_roots(), &app.probe);
            let service = ResolutionService::new(&catalog, converter.as_ref(), &probe);
            let store = DirFileStore::new(app.catalog.database_dir.clone());
            cli::run_files(&service, &store, &identifier)
        }
        Commands::Search { query, mode } => {
            let catalog = load_catalog(&app)?;
            let engine = SearchEngine::new(&catalog, app.search.clone());
            cli::run_search(&engine, mode.into(), &query)
        }
        Commands::Available => {
            let catalog = load_catalog(&app)?;
            cli::run_available(&catalog)
        }
        Commands::Stats => {
            let catalog = load_catalog(&app)?;
            cli::run_stats(&catalog)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(0)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    }
}
