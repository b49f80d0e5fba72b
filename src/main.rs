use catalog_harvest::Catalog;
use catalog_harvest::export;
use clap::Parser;

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting scraper for catalog: {}", args.catalog_url);

    // Create a Catalog builder with the specified parameters
    let mut catalog = Catalog::new(&args.catalog_url).with_pagination(!args.no_pagination);

    if let Some(path) = &args.config {
        catalog = match catalog.with_config_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path, e);
                return;
            }
        };
    }
    if let Some(max_products) = args.max_products {
        catalog = catalog.with_max_products(max_products);
    }
    if let Some(delay_ms) = args.request_delay_ms {
        catalog = catalog.with_request_delay_ms(delay_ms);
    }

    // Walk the catalog and collect records
    let records = match catalog.run() {
        Ok(records) => records,
        Err(e) => {
            ::log::error!("Failed to start scraper: {}", e);
            return;
        }
    };

    println!("Collected {} products", records.len());

    // Write the three output artifacts under the given base name
    if let Err(e) = export::save_all(&records, &args.output) {
        ::log::error!("Failed to save results: {}", e);
    }
}
