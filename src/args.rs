use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "catalog-harvest")]
#[command(about = "Scrapes product records from a paginated e-commerce catalog")]
#[command(version)]
pub struct Args {
    /// Catalog page URL to start from
    pub catalog_url: String,

    /// Maximum number of products to collect
    #[arg(short, long)]
    pub max_products: Option<usize>,

    /// Only scrape the start page, skipping pagination discovery
    #[arg(long, default_value_t = false)]
    pub no_pagination: bool,

    /// Base name for the output files (<name>.csv, <name>.json, <name>.xml)
    #[arg(short, long, default_value = "products")]
    pub output: String,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Pause between requests in milliseconds
    #[arg(long)]
    pub request_delay_ms: Option<u64>,
}
