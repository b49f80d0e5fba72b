// Re-export modules
pub mod catalog;
pub mod config;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod records;
pub mod utils;

// Re-export commonly used types for convenience
pub use records::ProductRecord;

use crate::config::ScraperConfig;
use crate::extract::ProductExtractor;
use crate::fetch::Fetcher;
use std::error::Error;
use std::path::Path;

/// Builder for configuring and running one catalog scrape
pub struct Catalog {
    catalog_url: String,
    config: Option<ScraperConfig>,
    max_products: Option<usize>,
    paginate: bool,
}

impl Catalog {
    /// Create a new Catalog builder for the given start page
    pub fn new(catalog_url: &str) -> Self {
        Self {
            catalog_url: catalog_url.to_string(),
            config: None,
            max_products: None,
            paginate: true,
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, Box<dyn Error>> {
        self.config = Some(ScraperConfig::from_file(path)?);
        Ok(self)
    }

    /// Stop after this many records have been collected
    pub fn with_max_products(mut self, value: usize) -> Self {
        self.max_products = Some(value);
        self
    }

    /// Enable or disable pagination discovery (enabled by default)
    pub fn with_pagination(mut self, value: bool) -> Self {
        self.paginate = value;
        self
    }

    /// Override the pause between requests in milliseconds
    pub fn with_request_delay_ms(mut self, value: u64) -> Self {
        // Update the config if it exists, otherwise derive one from the URL
        let mut config = self
            .config
            .take()
            .unwrap_or_else(|| ScraperConfig::new(&self.catalog_url));
        config.request_delay_ms = value;
        self.config = Some(config);
        self
    }

    /// Walk the catalog and return the collected records
    pub fn run(self) -> Result<Vec<ProductRecord>, Box<dyn Error>> {
        let config = self
            .config
            .unwrap_or_else(|| ScraperConfig::new(&self.catalog_url));

        let base_url = utils::site_origin(&config.base_url)?;
        let fetcher = Fetcher::new(&config)?;
        let extractor = ProductExtractor::new(base_url.clone());

        ::log::info!("Starting catalog walk for: {}", self.catalog_url);

        let records = catalog::walk(
            &fetcher,
            &extractor,
            &base_url,
            &self.catalog_url,
            self.max_products,
            self.paginate,
        );

        Ok(records)
    }
}
