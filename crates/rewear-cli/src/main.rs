// Rust guideline compliant 2026-02-06

//! ReWear CLI Application
//!
//! Command-line interface for browsing and listing items in the ReWear
//! clothing exchange.

use clap::Parser;
use rewear_app::BrowseOptions;
use rewear_cli::context::{demo_session, load_config};
use rewear_cli::output::format_failure;
use rewear_cli::{commands, create_formatter, logging, should_use_color, Context, OutputFormatter};
use rewear_core::ListingDraft;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "rewear",
    version,
    about = "ReWear: community clothing exchange",
    long_about = "ReWear lists pre-owned clothing for direct swaps or points redemption. The CLI browses a JSONL catalog, estimates listing points and validates new listings.",
    after_help = "Examples:\n  rewear browse --search denim --category outerwear\n  rewear show 1\n  rewear afford 4 --points 100\n  rewear estimate --condition new --category outerwear\n  rewear submit \"Corduroy Trousers\" --description \"Brown\" --category bottoms --type Trousers --size M --condition good --image front.jpg\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory holding config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSONL file, overriding the configured path
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Act as a signed-out visitor
    #[arg(long, global = true, conflicts_with = "admin")]
    anonymous: bool,

    /// Act as a moderator
    #[arg(long, global = true)]
    admin: bool,

    /// Points balance of the demo user
    #[arg(long, global = true)]
    points: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Browse available items
    Browse {
        /// Search title, description and tags
        #[arg(long)]
        search: Option<String>,

        /// Filter by category ("all" for any)
        #[arg(long)]
        category: Option<String>,

        /// Filter by size ("all" for any)
        #[arg(long)]
        size: Option<String>,

        /// Filter by condition ("all" for any)
        #[arg(long)]
        condition: Option<String>,
    },

    /// Show details of an item
    Show {
        /// Item ID
        id: String,
    },

    /// Check whether your points cover an item
    Afford {
        /// Item ID
        id: String,
    },

    /// Estimate the points value of a listing
    Estimate {
        /// Item condition
        #[arg(long, default_value = "")]
        condition: String,

        /// Item category
        #[arg(long, default_value = "")]
        category: String,
    },

    /// Submit a new listing for review
    Submit {
        /// Item title
        title: String,

        /// Item description
        #[arg(long, default_value = "")]
        description: String,

        /// Category
        #[arg(long, default_value = "")]
        category: String,

        /// Garment type, e.g. "Jacket"
        #[arg(long = "type", default_value = "")]
        item_type: String,

        /// Size label
        #[arg(long, default_value = "")]
        size: String,

        /// Condition
        #[arg(long, default_value = "")]
        condition: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,

        /// Pickup location
        #[arg(long, default_value = "")]
        location: String,

        /// Image reference (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,
    },

    /// List listings awaiting moderation
    Pending,

    /// List the size vocabulary
    Sizes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let json_requested = matches!(cli.format, Some(OutputFormat::Json)) || cli.json;

    match run(cli, use_color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, json_requested, use_color);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, use_color: bool) -> anyhow::Result<()> {
    let config_dir = cli.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = load_config(&config_dir)?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    let log_file = config.log_file.as_ref().map(PathBuf::from);
    let _guard = logging::init_tracing(&level, log_file.as_deref())?;

    let session = demo_session(cli.anonymous, cli.admin, cli.points);
    let ctx = Context::load(config, &config_dir, cli.catalog.as_deref(), session)?;

    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                ctx.config.output_format.as_str()
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    dispatch(cli.command, &ctx, formatter.as_ref())
}

fn dispatch(command: Commands, ctx: &Context, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    match command {
        Commands::Browse {
            search,
            category,
            size,
            condition,
        } => {
            let options = BrowseOptions {
                search,
                category,
                size,
                condition,
            };
            commands::browse::execute(ctx, &options, formatter)
        }
        Commands::Show { id } => commands::show::execute(ctx, &id, formatter),
        Commands::Afford { id } => commands::afford::execute(ctx, &id, formatter),
        Commands::Estimate {
            condition,
            category,
        } => commands::estimate::execute(&condition, &category, formatter),
        Commands::Submit {
            title,
            description,
            category,
            item_type,
            size,
            condition,
            tags,
            location,
            images,
        } => {
            let draft = ListingDraft {
                title,
                description,
                category,
                item_type,
                size,
                condition,
                tags,
                location,
                images,
            };
            commands::submit::execute(ctx, draft, formatter)
        }
        Commands::Pending => commands::pending::execute(ctx, formatter),
        Commands::Sizes => commands::sizes::execute(formatter),
    }
}

/// Prints a failure: JSON to stdout in JSON mode, otherwise to stderr.
fn report(err: &anyhow::Error, json: bool, use_color: bool) {
    let formatter = create_formatter(if json { "json" } else { "table" }, use_color);
    let text = format_failure(err, formatter.as_ref());
    if json {
        println!("{}", text);
    } else {
        eprintln!("{}", text);
    }
}
