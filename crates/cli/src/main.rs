//! Bramble CLI - local cart and history management.
//!
//! # Usage
//!
//! ```bash
//! # Cart
//! bramble cart add --id prod-1 --title "Wild Blackberry Jam" --price 12.50
//! bramble cart increment --id prod-1
//! bramble cart decrement --id prod-1
//! bramble cart remove --id prod-1
//! bramble cart show
//! bramble cart clear
//!
//! # Recently-viewed history
//! bramble history record --id prod-1 --title "Wild Blackberry Jam" --price 12.50
//! bramble history show --cursor 10 --limit 10
//! bramble history clear
//! ```
//!
//! State lives under `BRAMBLE_DATA_DIR` (default `.bramble`), one JSON
//! snapshot file per store.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use bramble_core::DEFAULT_PAGE_SIZE;

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "bramble")]
#[command(author, version, about = "Bramble local state tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the recently-viewed history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add {
        /// Product ID
        #[arg(long)]
        id: String,

        /// Display title
        #[arg(long)]
        title: String,

        /// Unit price (decimal, e.g. 12.50)
        #[arg(long)]
        price: String,

        /// URL handle (defaults to a slug of the title)
        #[arg(long)]
        handle: Option<String>,

        /// Primary image URL
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Increment a line's quantity
    Increment {
        /// Product ID
        #[arg(long)]
        id: String,
    },
    /// Decrement a line's quantity (removes the line at zero)
    Decrement {
        /// Product ID
        #[arg(long)]
        id: String,
    },
    /// Remove a line entirely
    Remove {
        /// Product ID
        #[arg(long)]
        id: String,
    },
    /// Show lines and totals
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Record a product view
    Record {
        /// Product ID
        #[arg(long)]
        id: String,

        /// Display title
        #[arg(long)]
        title: String,

        /// Unit price (decimal, e.g. 12.50)
        #[arg(long)]
        price: String,

        /// URL handle (defaults to a slug of the title)
        #[arg(long)]
        handle: Option<String>,

        /// Primary image URL
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Show one page of the history, most recent first
    Show {
        /// Resume cursor from a previous page
        #[arg(long)]
        cursor: Option<String>,

        /// Page size
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: usize,
    },
    /// Remove one entry
    Remove {
        /// Product ID
        #[arg(long)]
        id: String,
    },
    /// Empty the history
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    if let Err(e) = run(&config, cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig, cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                id,
                title,
                price,
                handle,
                image_url,
            } => commands::cart::add(config, &id, &title, &price, handle, image_url),
            CartAction::Increment { id } => commands::cart::increment(config, &id),
            CartAction::Decrement { id } => commands::cart::decrement(config, &id),
            CartAction::Remove { id } => commands::cart::remove(config, &id),
            CartAction::Show => commands::cart::show(config),
            CartAction::Clear => commands::cart::clear(config),
        },
        Commands::History { action } => match action {
            HistoryAction::Record {
                id,
                title,
                price,
                handle,
                image_url,
            } => commands::history::record(config, &id, &title, &price, handle, image_url),
            HistoryAction::Show { cursor, limit } => {
                commands::history::show(config, cursor.as_deref(), limit)
            }
            HistoryAction::Remove { id } => commands::history::remove(config, &id),
            HistoryAction::Clear => commands::history::clear(config),
        },
    }
}
