//! CLI frontend for the Mage: The Awakening 2E character forge.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mage",
    about = "Mage: The Awakening 2E character validator, XP ledger, and forge",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more detail to stderr (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Narrative seeds shared by `prompt` and `forge`. Omitted means Random.
#[derive(Args)]
struct NarrativeArgs {
    /// Tarot card theme
    #[arg(long)]
    tarot: Option<String>,

    /// Archetype
    #[arg(long)]
    archetype: Option<String>,

    /// Advantage (repeatable, at most three are kept)
    #[arg(long = "advantage")]
    advantages: Vec<String>,

    /// Disadvantage
    #[arg(long)]
    disadvantage: Option<String>,

    /// Dark secret
    #[arg(long)]
    dark_secret: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a character sheet and report issues
    Check {
        /// Character JSON file
        file: PathBuf,
    },

    /// Spend an XP budget on a list of purchases
    Advance {
        /// Character JSON file
        file: PathBuf,

        /// XP budget; purchases must cost exactly this much
        #[arg(long)]
        xp: u32,

        /// JSON file with the ordered purchase list
        #[arg(short, long)]
        purchases: PathBuf,

        /// Write the advanced character here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the generation prompt for a concept
    Prompt {
        /// Character concept
        #[arg(short, long)]
        concept: String,

        /// XP to spend after creation
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        xp: i64,

        #[command(flatten)]
        narrative: NarrativeArgs,
    },

    /// Replay a saved model response through the generation pipeline
    Forge {
        /// Character concept
        #[arg(short, long)]
        concept: String,

        /// XP to spend after creation
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        xp: i64,

        /// Saved character response (JSON)
        #[arg(short, long)]
        response: PathBuf,

        /// Portrait reference to attach (default: placeholder)
        #[arg(long)]
        portrait: Option<String>,

        /// Reject a character that breaks any rule
        #[arg(long)]
        strict: bool,

        /// Skip the portrait step
        #[arg(long)]
        no_portrait: bool,

        /// Print the forged character as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        narrative: NarrativeArgs,
    },

    /// Export a character as a plain-text sheet
    Export {
        /// Character JSON file
        file: PathBuf,

        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List a narrative catalog (tarot, archetype, advantages, disadvantage, dark-secret)
    Catalog {
        /// Narrative axis
        axis: String,
    },

    /// Show the XP cost table
    Costs,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

impl NarrativeArgs {
    fn selections(&self) -> mage_mechanics::NarrativeSelections {
        commands::selections(
            self.tarot.as_deref(),
            self.archetype.as_deref(),
            &self.advantages,
            self.disadvantage.as_deref(),
            self.dark_secret.as_deref(),
        )
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { file } => commands::check::run(&file),
        Commands::Advance {
            file,
            xp,
            purchases,
            output,
        } => commands::advance::run(&file, xp, &purchases, output.as_deref()),
        Commands::Prompt {
            concept,
            xp,
            narrative,
        } => commands::prompt::run(&concept, xp, &narrative.selections()),
        Commands::Forge {
            concept,
            xp,
            response,
            portrait,
            strict,
            no_portrait,
            json,
            narrative,
        } => commands::forge::run(commands::forge::ForgeArgs {
            concept: &concept,
            xp,
            response: &response,
            portrait: portrait.as_deref(),
            strict,
            portraits: !no_portrait,
            json,
            selections: narrative.selections(),
        }),
        Commands::Export { file, output } => commands::export::run(&file, output.as_deref()),
        Commands::Catalog { axis } => commands::catalog::run(&axis),
        Commands::Costs => commands::costs::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
