//! Shopify Orders CLI - Read and update orders from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Fetch one order with full detail
//! orders get gid://shopify/Order/1001
//!
//! # Fetch the first page of paid orders, then the next one
//! orders page --query "financial_status:paid" --first 25
//! orders page --query "financial_status:paid" --first 25 --after <lastCursor>
//!
//! # Update an order
//! orders update gid://shopify/Order/1001 --note "Called customer" --tag vip --tag rush
//! ```
//!
//! Output is JSON on stdout; logs go to stderr. Set `ORDERS_LOG_JSON=1`
//! for JSON logs.
//!
//! # Environment Variables
//!
//! - `SHOPIFY_STORE` - Store domain (e.g., `shop.myshopify.com`)
//! - `SHOPIFY_ADMIN_ACCESS_TOKEN` - Admin API access token
//! - `SHOPIFY_API_VERSION` - Admin API version (optional)
//! - `SHOPIFY_HTTP_TIMEOUT_SECS` - Request timeout (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "orders")]
#[command(author, version, about = "Shopify order tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one order by ID
    Get {
        /// Order ID (e.g., `gid://shopify/Order/1001`)
        id: String,
    },
    /// Fetch one page of orders
    Page {
        /// Shopify search expression
        #[arg(short, long, default_value = "")]
        query: String,

        /// Page size counted from the start
        #[arg(long, conflicts_with = "last")]
        first: Option<u32>,

        /// Page size counted from the end
        #[arg(long)]
        last: Option<u32>,

        /// Return orders after this cursor
        #[arg(long, conflicts_with = "before")]
        after: Option<String>,

        /// Return orders before this cursor
        #[arg(long)]
        before: Option<String>,

        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,
    },
    /// Update an order
    Update {
        /// Order ID (e.g., `gid://shopify/Order/1001`)
        id: String,

        /// New staff note
        #[arg(long)]
        note: Option<String>,

        /// Replace the order's tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// New customer email
        #[arg(long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopify_orders=info,shopify_orders_cli=info".into());

    let json = std::env::var("ORDERS_LOG_JSON").is_ok_and(|v| v == "1");
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = commands::orders::connect()?;

    let output = match cli.command {
        Commands::Get { id } => commands::orders::get(&store, &id).await?,
        Commands::Page {
            query,
            first,
            last,
            after,
            before,
            reverse,
        } => {
            let args = commands::orders::PageArgs {
                query,
                first,
                last,
                after,
                before,
                reverse,
            };
            commands::orders::page(&store, args).await?
        }
        Commands::Update {
            id,
            note,
            tags,
            email,
        } => {
            let args = commands::orders::UpdateArgs {
                id,
                note,
                tags,
                email,
            };
            commands::orders::update(&store, args).await?
        }
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}
