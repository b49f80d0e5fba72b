use serde::{Deserialize, Serialize};

/// One extracted product, fields in output order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Canonical detail-page URL, always absolute
    pub url: String,

    /// Product title; records with an empty title are never collected
    pub title: String,

    /// Article / SKU code, empty if not found
    pub article: String,

    /// Category name, empty if not found
    pub category: String,

    /// Free-text availability label
    pub availability: String,

    /// Whitespace-normalized description text
    pub description: String,

    /// Specification pairs joined as "name: value | name: value"
    pub details: String,

    /// The site hides pricing, so this is always the literal "0"
    pub price: String,

    /// Absolute image URLs, de-duplicated, insertion order preserved
    pub images: Vec<String>,
}

impl ProductRecord {
    /// Create an empty record for the given detail-page URL
    pub fn new(url: String) -> Self {
        Self {
            url,
            title: String::new(),
            article: String::new(),
            category: String::new(),
            availability: String::new(),
            description: String::new(),
            details: String::new(),
            price: "0".to_string(),
            images: Vec::new(),
        }
    }

    /// Append an image URL unless it is already present
    pub fn push_image(&mut self, url: String) {
        if !self.images.contains(&url) {
            self.images.push(url);
        }
    }
}
