use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use product_query::config::{self, Config};
use product_query::{
    Category, Ddr, LaptopsQuery, Presence, ProductQuery, ProductsClient, QueryVariant, RamQuery,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Build a product query string, or run it against the products service.
#[derive(Debug, Parser)]
#[command(name = "product-query", version)]
struct Cli {
    /// Category to search in (`laptop` or `ram`)
    category: Category,
    #[arg(long)]
    min_price: Option<u32>,
    #[arg(long)]
    max_price: Option<u32>,
    /// Accepted brand, may be repeated
    #[arg(long)]
    brand: Vec<String>,
    /// Id of the last product of the previous page
    #[arg(long)]
    last_id: Option<String>,
    /// Laptop memory in GB
    #[arg(long)]
    ram: Option<u32>,
    /// RAM module capacity in GB
    #[arg(long)]
    capacity: Option<u32>,
    /// RAM generation (DDR3, DDR4, DDR5)
    #[arg(long)]
    ddr: Option<Ddr>,
    /// Keep filters set to 0 or empty
    #[arg(long)]
    keep_zero: bool,
    /// Run the search and print the products as JSON
    #[arg(long)]
    search: bool,
    /// Read variables from this file instead of `.env`
    #[arg(long)]
    env_file: Option<PathBuf>,
}

impl Cli {
    fn query(&self) -> ProductQuery {
        let variant: QueryVariant = match self.category {
            Category::Laptop => LaptopsQuery { ram: self.ram }.into(),
            Category::Ram => RamQuery {
                capacity: self.capacity,
                ddr: self.ddr,
            }
            .into(),
        };
        ProductQuery {
            min_price: self.min_price,
            max_price: self.max_price,
            brand: self.brand.clone(),
            last_id: self.last_id.clone(),
            variant,
        }
    }

    /// Filter flags given that the chosen category has no use for.
    fn ignored_flags(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        match self.category {
            Category::Laptop => {
                if self.capacity.is_some() {
                    ignored.push("--capacity");
                }
                if self.ddr.is_some() {
                    ignored.push("--ddr");
                }
            }
            Category::Ram => {
                if self.ram.is_some() {
                    ignored.push("--ram");
                }
            }
        }
        ignored
    }

    fn presence(&self) -> Presence {
        if self.keep_zero {
            Presence::Defined
        } else {
            Presence::Truthy
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    for flag in cli.ignored_flags() {
        warn!(flag, category = %cli.category, "ignoring flag of another category");
    }
    let query = cli.query();

    if !cli.search {
        println!("{}", query.to_url_query_with(cli.presence()));
        return Ok(());
    }

    config::load_env_file(cli.env_file.as_deref());
    let config = Config::from_env()?;
    let client = ProductsClient::from_config(&config)?.with_presence(cli.presence());
    let products = client.search(&query).await?;
    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}
