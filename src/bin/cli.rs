//! stockroom CLI
//!
//! Command-line front end for the inventory store.

use clap::{Parser, Subcommand};
use stockroom::config::SyncStrategy;
use stockroom::protocol::{Command, Response};
use stockroom::{Config, FilePersister, Inventory, InventoryError, Item, SortOrder};
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// stockroom CLI
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Track a small shop's stock in a flat text file")]
#[command(version)]
struct Args {
    /// Directory holding the inventory file
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Inventory file name
    #[arg(short, long, default_value = "inventory.txt")]
    file: String,

    /// fsync the inventory file after every change
    #[arg(long)]
    fsync: bool,

    /// Quantity below which items are flagged as low stock
    #[arg(long, default_value = "5")]
    low_stock: u32,

    /// Start from an empty inventory if the file cannot be loaded
    #[arg(long)]
    ignore_load_errors: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new item
    Add {
        name: String,
        category: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// Sell units of an item
    Sell {
        name: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Restock an item
    Restock {
        name: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Look up an item by name
    Find { name: String },

    /// List all items
    List {
        /// Sort first (persistent): qty-asc, qty-desc, price-asc, price-desc
        #[arg(long)]
        by: Option<SortOrder>,
    },

    /// Show items grouped by category
    Categories,

    /// Show the total stock value
    Total,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    // Logs go to stderr so stdout carries only command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stockroom=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let sync_strategy = if args.fsync {
        SyncStrategy::EverySave
    } else {
        SyncStrategy::OsBuffered
    };

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .file_name(&args.file)
        .sync_strategy(sync_strategy)
        .low_stock_threshold(args.low_stock)
        .build();

    tracing::debug!(path = %config.file_path().display(), "opening inventory");

    let mut inventory = if args.ignore_load_errors {
        config.validate()?;
        Inventory::open_or_empty(FilePersister::from_config(&config))
    } else {
        Inventory::open_file(&config)?
    };

    let mut commands = Vec::new();
    let mut summarize_low_stock = false;
    match args.command {
        Commands::Add {
            name,
            category,
            quantity,
            price,
        } => commands.push(Command::Add {
            name: text_arg("name", name, true)?,
            category: text_arg("category", category, false)?,
            quantity: quantity_arg(quantity, false)?,
            price: price_arg(price)?,
        }),
        Commands::Sell { name, quantity } => commands.push(Command::Sell {
            name: lookup_name(&name),
            amount: quantity_arg(quantity, true)?,
        }),
        Commands::Restock { name, quantity } => commands.push(Command::Restock {
            name: lookup_name(&name),
            amount: quantity_arg(quantity, true)?,
        }),
        Commands::Find { name } => commands.push(Command::Find {
            name: lookup_name(&name),
        }),
        Commands::List { by } => {
            if let Some(order) = by {
                commands.push(Command::Sort { order });
            }
            commands.push(Command::List);
            summarize_low_stock = true;
        }
        Commands::Categories => commands.push(Command::Categories),
        Commands::Total => commands.push(Command::Total),
    }

    for command in commands {
        let response = inventory.execute(command)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            render(&response, config.low_stock_threshold);
        }
    }

    if summarize_low_stock && !args.json {
        let low = inventory.low_stock(config.low_stock_threshold);
        if !low.is_empty() {
            let names: Vec<&str> = low.iter().map(|item| item.name.as_str()).collect();
            println!("Low stock ({}): {}", low.len(), names.join(", "));
        }
    }

    Ok(())
}

// =============================================================================
// Input Validation
// =============================================================================

/// Text stored in a record; one record is one line in the file
fn text_arg(field: &str, value: String, required: bool) -> Result<String, CliError> {
    if required && value.trim().is_empty() {
        return Err(CliError::Input(format!("{} must not be empty", field)));
    }
    if value.contains(['\n', '\r']) {
        return Err(CliError::Input(format!("{} must not contain line breaks", field)));
    }
    Ok(value)
}

fn lookup_name(value: &str) -> String {
    value.trim().to_string()
}

fn quantity_arg(value: i64, positive: bool) -> Result<u32, CliError> {
    if positive && value <= 0 {
        return Err(CliError::Input(format!("quantity must be positive, got {}", value)));
    }
    u32::try_from(value)
        .map_err(|_| CliError::Input(format!("quantity out of range: {}", value)))
}

fn price_arg(value: f64) -> Result<f64, CliError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CliError::Input(format!("price must be a non-negative number, got {}", value)));
    }
    Ok(value)
}

// =============================================================================
// Rendering
// =============================================================================

fn render(response: &Response, low_stock: u32) {
    match response {
        Response::Added(item) => {
            println!("Added {} ({})", item.name, item.category);
            print_low_stock_warning(&item.name, item.quantity, low_stock);
        }
        Response::Sold { name, remaining } => {
            println!("Sold. {} remaining: {}", name, remaining);
            print_low_stock_warning(name, *remaining, low_stock);
        }
        Response::Restocked { name, quantity } => {
            println!("Restocked. {} now at {}", name, quantity);
            print_low_stock_warning(name, *quantity, low_stock);
        }
        Response::Found(item) => {
            print_table(std::slice::from_ref(item), low_stock);
        }
        Response::Items(items) => {
            print_table(items, low_stock);
        }
        Response::Categories(groups) => {
            for group in groups {
                println!("== {} ({} items)", group.category, group.items.len());
                for item in &group.items {
                    println!("   {} (qty {}, {:.2})", item.name, item.quantity, item.price);
                }
            }
        }
        Response::Sorted(order) => {
            tracing::info!(%order, "inventory sorted");
        }
        Response::Total(total) => {
            println!("Total Value: {:.2}", total);
        }
    }
}

fn print_table(items: &[Item], low_stock: u32) {
    println!(
        "{:<20} {:<15} {:>10} {:>10} {:>12}",
        "Item Name", "Category", "Quantity", "Price", "Value"
    );
    for item in items {
        let flag = if item.quantity < low_stock { "  LOW" } else { "" };
        println!(
            "{:<20} {:<15} {:>10} {:>10.2} {:>12.2}{}",
            item.name,
            item.category,
            item.quantity,
            item.price,
            item.value(),
            flag
        );
    }
}

fn low_stock_warning(name: &str, quantity: u32, low_stock: u32) -> Option<String> {
    (quantity < low_stock).then(|| format!("Warning: {} is low on stock ({})", name, quantity))
}

fn print_low_stock_warning(name: &str, quantity: u32, low_stock: u32) {
    if let Some(warning) = low_stock_warning(name, quantity, low_stock) {
        println!("{}", warning);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
