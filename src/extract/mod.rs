pub mod dom;

#[cfg(test)]
mod tests;

use crate::fetch::Fetch;
use crate::records::ProductRecord;
use crate::utils;
use regex::Regex;
use scraper::node::Node;
use scraper::{Html, Selector};
use url::Url;

/// Title selectors, most specific first
const TITLE_SELECTORS: &[&str] = &["h1.product_title", "h1", ".product_title"];

/// Text marker preceding the article / SKU code
const ARTICLE_MARKER: &str = "Артикул";

/// Text marker preceding the category name
const CATEGORY_MARKER: &str = "Категория";

/// Combined selector for stock indicator elements
const AVAILABILITY_SELECTOR: &str = ".stock, .availability";

/// Case-insensitive marker for the availability text fallback
const AVAILABILITY_MARKER: &str = "наличи";

const DESCRIPTION_SELECTOR: &str = "#tab-description";

const DETAILS_TABLE_SELECTOR: &str =
    "#tab-additional_information table.woocommerce-product-attributes";
const DETAILS_LABEL_SELECTOR: &str = ".woocommerce-product-attributes-item__label";
const DETAILS_VALUE_SELECTOR: &str = ".woocommerce-product-attributes-item__value";

const MAIN_IMAGE_SELECTOR: &str = ".woocommerce-product-gallery__image img, .product-image img";
const GALLERY_THUMB_SELECTOR: &str = "div[data-thumb]";
const GALLERY_IMAGE_SELECTOR: &str = ".woocommerce-product-gallery__image img, .product-gallery img";

/// Extracts one [`ProductRecord`] from a product detail page
///
/// Each field is tried against an ordered chain of strategies; the first
/// non-empty match wins and a miss leaves the field's default value.
pub struct ProductExtractor {
    base_url: Url,
    thumb_suffix: Regex,
}

impl ProductExtractor {
    /// Create an extractor resolving links against the given site base URL
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            thumb_suffix: Regex::new(r"-(?:100x100|150x150)").expect("Invalid thumbnail pattern"),
        }
    }

    /// Fetch a detail page and extract its record; None if the fetch failed
    pub fn extract(&self, fetcher: &dyn Fetch, url: &str) -> Option<ProductRecord> {
        let doc = fetcher.fetch(url).ok()?;
        Some(self.extract_from_document(url, &doc))
    }

    /// Extract a record from an already-parsed detail page
    pub fn extract_from_document(&self, url: &str, doc: &Html) -> ProductRecord {
        let mut record = ProductRecord::new(url.to_string());

        if let Some(title) = extract_title(doc) {
            record.title = title;
        }
        if let Some(article) = extract_article(doc) {
            record.article = article;
        }
        if let Some(category) = extract_category(doc) {
            record.category = category;
        }
        if let Some(availability) = extract_availability(doc) {
            record.availability = availability;
        }
        if let Some(description) = extract_description(doc) {
            record.description = description;
        }
        if let Some(details) = extract_details(doc) {
            record.details = details;
        }
        self.collect_images(doc, &mut record);

        ::log::info!("Extracted: {}", utils::truncate_for_log(&record.title, 50));

        record
    }

    /// Gather image URLs from the gallery, de-duplicated in insertion order
    fn collect_images(&self, doc: &Html, record: &mut ProductRecord) {
        // Primary gallery image
        let main_selector = Selector::parse(MAIN_IMAGE_SELECTOR).unwrap();
        if let Some(img) = doc.select(&main_selector).next() {
            let src = img
                .value()
                .attr("src")
                .or_else(|| img.value().attr("data-src"));
            if let Some(src) = src.filter(|s| !s.is_empty()) {
                if let Some(absolute) = utils::resolve_href(&self.base_url, src) {
                    record.push_image(absolute);
                }
            }
        }

        // Gallery thumbnails, with the thumbnail size suffix stripped to
        // recover the full-size asset
        let thumb_selector = Selector::parse(GALLERY_THUMB_SELECTOR).unwrap();
        for thumb in doc.select(&thumb_selector) {
            if let Some(raw) = thumb.value().attr("data-thumb").filter(|s| !s.is_empty()) {
                let full = self.thumb_suffix.replace_all(raw, "");
                if let Some(absolute) = utils::resolve_href(&self.base_url, &full) {
                    record.push_image(absolute);
                }
            }
        }

        // Every remaining gallery image
        let gallery_selector = Selector::parse(GALLERY_IMAGE_SELECTOR).unwrap();
        for img in doc.select(&gallery_selector) {
            let src = img
                .value()
                .attr("src")
                .or_else(|| img.value().attr("data-src"))
                .or_else(|| img.value().attr("data-large_image"));
            if let Some(src) = src.filter(|s| !s.is_empty()) {
                if let Some(absolute) = utils::resolve_href(&self.base_url, src) {
                    record.push_image(absolute);
                }
            }
        }
    }
}

/// First non-empty text among the title selectors, most specific first
fn extract_title(doc: &Html) -> Option<String> {
    TITLE_SELECTORS.iter().find_map(|raw| {
        let selector = Selector::parse(raw).unwrap();
        doc.select(&selector)
            .next()
            .map(dom::normalized_text)
            .filter(|text| !text.is_empty())
    })
}

/// Text after the first colon in the article marker's ancestor element
fn extract_article(doc: &Html) -> Option<String> {
    let node = dom::find_text_containing(doc, ARTICLE_MARKER)?;
    let parent = dom::parent_element(node)?;
    let text = dom::normalized_text(parent);
    let (_, value) = text.split_once(':')?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Text of the next sibling element of the category marker's ancestor
fn extract_category(doc: &Html) -> Option<String> {
    let node = dom::find_text_containing(doc, CATEGORY_MARKER)?;
    let parent = dom::parent_element(node)?;
    let sibling = dom::next_sibling_element(parent)?;
    let text = dom::normalized_text(sibling);
    (!text.is_empty()).then_some(text)
}

/// Stock indicator element, falling back to a text scan for the marker
fn extract_availability(doc: &Html) -> Option<String> {
    let selector = Selector::parse(AVAILABILITY_SELECTOR).unwrap();
    if let Some(element) = doc.select(&selector).next() {
        let text = dom::normalized_text(element);
        if !text.is_empty() {
            return Some(text);
        }
    }

    let node = dom::find_text_containing_ci(doc, AVAILABILITY_MARKER)?;
    match node.value() {
        Node::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// Description tab text, whitespace-normalized
fn extract_description(doc: &Html) -> Option<String> {
    let selector = Selector::parse(DESCRIPTION_SELECTOR).unwrap();
    let element = doc.select(&selector).next()?;
    let text = dom::normalized_text(element);
    (!text.is_empty()).then_some(text)
}

/// Specification table rows paired as "label: value", joined with " | "
fn extract_details(doc: &Html) -> Option<String> {
    let table_selector = Selector::parse(DETAILS_TABLE_SELECTOR).unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let label_selector = Selector::parse(DETAILS_LABEL_SELECTOR).unwrap();
    let value_selector = Selector::parse(DETAILS_VALUE_SELECTOR).unwrap();

    let table = doc.select(&table_selector).next()?;
    let mut pairs = Vec::new();
    for row in table.select(&row_selector) {
        let label = row.select(&label_selector).next();
        let value = row.select(&value_selector).next();
        if let (Some(label), Some(value)) = (label, value) {
            let name = dom::normalized_text(label);
            let name = name.trim_end_matches(':').trim_end();
            pairs.push(format!("{}: {}", name, dom::normalized_text(value)));
        }
    }

    (!pairs.is_empty()).then(|| pairs.join(" | "))
}
