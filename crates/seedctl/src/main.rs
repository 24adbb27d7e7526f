//! Dataset maintenance CLI: seed demo data, clear the dataset, run one-off
//! migrations. All operations go through the gateway's mutation interface;
//! a write token (`STORE_TOKEN`) is required.

use clap::{Parser, Subcommand};

use stocklens_store::{HttpContentStore, StoreConfig};

mod maintenance;
mod seed;

#[derive(Debug, Parser)]
#[command(name = "seedctl", about = "Seed and maintain the catalog dataset")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Seed base documents plus randomized products and variants.
    Seed {
        /// Number of products to create.
        #[arg(long, default_value_t = 50)]
        products: usize,
    },
    /// Delete every catalog document, type by type.
    Clear,
    /// Migrate legacy colors (hex array) to the single-hex shape.
    MigrateColors,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stocklens_observability::init();

    let cli = Cli::parse();

    let config = StoreConfig::from_env()?;
    if config.token.is_none() {
        anyhow::bail!("STORE_TOKEN must be set for mutations");
    }
    let store = HttpContentStore::new(config)?;

    match cli.command {
        Command::Seed { products } => seed::run(&store, products).await?,
        Command::Clear => maintenance::clear(&store).await?,
        Command::MigrateColors => maintenance::migrate_colors(&store).await?,
    }

    Ok(())
}
