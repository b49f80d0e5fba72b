use crate::extract::ProductExtractor;
use crate::fetch::Fetch;
use crate::records::ProductRecord;
use crate::utils;
use scraper::Selector;
use std::collections::HashSet;
use url::Url;

/// Marker class carried by every pagination link
const PAGINATION_SELECTOR: &str = ".page-numbers";

/// Clickable card anchor inside a product-card container
const PRODUCT_CARD_SELECTOR: &str = ".product a.db";

/// Collect every catalog page URL reachable from the start page
///
/// The input URL is always the first element. A failed fetch degrades to the
/// single-element list rather than failing the run.
pub fn discover_pages(fetcher: &dyn Fetch, base_url: &Url, catalog_url: &str) -> Vec<String> {
    let mut pages = vec![catalog_url.to_string()];

    let doc = match fetcher.fetch(catalog_url) {
        Ok(doc) => doc,
        Err(_) => return pages,
    };

    let selector = Selector::parse(PAGINATION_SELECTOR).unwrap();
    for link in doc.select(&selector) {
        if let Some(href) = link.value().attr("href") {
            if let Some(full_url) = utils::resolve_href(base_url, href) {
                if !pages.contains(&full_url) {
                    pages.push(full_url);
                }
            }
        }
    }

    ::log::info!("Discovered {} catalog pages", pages.len());
    pages
}

/// Walk the catalog and extract a record per product card
///
/// Pages whose fetch fails are skipped. Records with an empty title are not
/// collected, product URLs already extracted in this run are not re-fetched,
/// and the walk stops entirely once `max_products` records are collected.
pub fn walk(
    fetcher: &dyn Fetch,
    extractor: &ProductExtractor,
    base_url: &Url,
    catalog_url: &str,
    max_products: Option<usize>,
    paginate: bool,
) -> Vec<ProductRecord> {
    let pages = if paginate {
        discover_pages(fetcher, base_url, catalog_url)
    } else {
        vec![catalog_url.to_string()]
    };

    let card_selector = Selector::parse(PRODUCT_CARD_SELECTOR).unwrap();
    let mut products: Vec<ProductRecord> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();

    'pages: for page_url in &pages {
        if let Some(cap) = max_products {
            if products.len() >= cap {
                break;
            }
        }

        let doc = match fetcher.fetch(page_url) {
            Ok(doc) => doc,
            Err(_) => continue,
        };

        let cards: Vec<_> = doc.select(&card_selector).collect();
        ::log::info!("Found {} product cards on {}", cards.len(), page_url);

        for card in cards {
            if let Some(cap) = max_products {
                if products.len() >= cap {
                    break 'pages;
                }
            }

            let Some(href) = card.value().attr("href") else {
                continue;
            };
            let Some(product_url) = utils::resolve_href(base_url, href) else {
                continue;
            };
            if !visited.insert(product_url.clone()) {
                continue;
            }

            if let Some(record) = extractor.extract(fetcher, &product_url) {
                if !record.title.is_empty() {
                    products.push(record);
                    ::log::info!("Products collected: {}", products.len());
                }
            }
        }
    }

    products
}
