use crate::extract::ProductExtractor;
use scraper::Html;
use url::Url;

fn extractor() -> ProductExtractor {
    ProductExtractor::new(Url::parse("https://shop.example/").unwrap())
}

fn extract(html: &str) -> crate::records::ProductRecord {
    let doc = Html::parse_document(html);
    extractor().extract_from_document("https://shop.example/product/1/", &doc)
}

#[cfg(test)]
mod title_tests {
    use super::*;

    #[test]
    fn test_specific_heading_wins_over_generic_h1() {
        let record = extract(
            "<html><body><h1>Страница товара</h1>\
             <h1 class=\"product_title\">Наушники X100</h1></body></html>",
        );
        assert_eq!(record.title, "Наушники X100");
    }

    #[test]
    fn test_generic_h1_used_when_specific_missing() {
        let record = extract("<html><body><h1>Наушники X100</h1></body></html>");
        assert_eq!(record.title, "Наушники X100");
    }

    #[test]
    fn test_alternate_class_used_last() {
        let record =
            extract("<html><body><div class=\"product_title\">Наушники X100</div></body></html>");
        assert_eq!(record.title, "Наушники X100");
    }

    #[test]
    fn test_empty_match_falls_through_to_next_strategy() {
        let record = extract(
            "<html><body><h1>Запасной заголовок</h1><h1 class=\"product_title\"></h1></body></html>",
        );
        assert_eq!(record.title, "Запасной заголовок");
    }

    #[test]
    fn test_no_title_markers_leaves_title_empty() {
        let record = extract("<html><body><h2 class=\"name\">Без заголовка</h2></body></html>");
        assert!(record.title.is_empty());
    }
}

#[cfg(test)]
mod field_tests {
    use super::*;

    #[test]
    fn test_article_taken_after_first_colon() {
        let record = extract(
            "<html><body><div class=\"sku_wrapper\">Артикул: \
             <span class=\"sku\">AB-123</span></div></body></html>",
        );
        assert_eq!(record.article, "AB-123");
    }

    #[test]
    fn test_article_without_colon_stays_empty() {
        let record = extract("<html><body><div>Артикул неизвестен</div></body></html>");
        assert!(record.article.is_empty());
    }

    #[test]
    fn test_category_from_marker_ancestor_sibling() {
        let record = extract(
            "<html><body><div class=\"posted_in\"><span>Категория:</span> \
             <a href=\"/cat/naushniki/\">Наушники</a></div></body></html>",
        );
        assert_eq!(record.category, "Наушники");
    }

    #[test]
    fn test_category_empty_when_marker_has_no_sibling() {
        let record =
            extract("<html><body><div><span>Категория: Наушники</span></div></body></html>");
        assert!(record.category.is_empty());
    }

    #[test]
    fn test_availability_from_stock_element() {
        let record = extract(
            "<html><body><p class=\"stock\">В наличии</p>\
             <p>Уточняйте наличие по телефону</p></body></html>",
        );
        assert_eq!(record.availability, "В наличии");
    }

    #[test]
    fn test_availability_falls_back_to_text_scan() {
        let record =
            extract("<html><body><p>Товар есть В Наличии на складе</p></body></html>");
        assert_eq!(record.availability, "Товар есть В Наличии на складе");
    }

    #[test]
    fn test_empty_stock_element_falls_back_to_text_scan() {
        let record = extract(
            "<html><body><span class=\"stock\"></span>\
             <p>Есть в наличии</p></body></html>",
        );
        assert_eq!(record.availability, "Есть в наличии");
    }

    #[test]
    fn test_description_whitespace_normalized() {
        let record = extract(
            "<html><body><div id=\"tab-description\">\
             <p>Первый   абзац</p>\n<p>Второй  абзац</p></div></body></html>",
        );
        assert_eq!(record.description, "Первый абзац Второй абзац");
    }

    #[test]
    fn test_details_pairs_joined_with_pipe() {
        let record = extract(
            "<html><body><div id=\"tab-additional_information\">\
             <table class=\"woocommerce-product-attributes\">\
             <tr><th class=\"woocommerce-product-attributes-item__label\">Вес:</th>\
             <td class=\"woocommerce-product-attributes-item__value\">1 кг</td></tr>\
             <tr><th class=\"woocommerce-product-attributes-item__label\">Цвет</th>\
             <td class=\"woocommerce-product-attributes-item__value\">Белый</td></tr>\
             </table></div></body></html>",
        );
        assert_eq!(record.details, "Вес: 1 кг | Цвет: Белый");
    }

    #[test]
    fn test_rows_without_both_cells_are_skipped() {
        let record = extract(
            "<html><body><div id=\"tab-additional_information\">\
             <table class=\"woocommerce-product-attributes\">\
             <tr><th class=\"woocommerce-product-attributes-item__label\">Вес:</th></tr>\
             <tr><th class=\"woocommerce-product-attributes-item__label\">Цвет:</th>\
             <td class=\"woocommerce-product-attributes-item__value\">Белый</td></tr>\
             </table></div></body></html>",
        );
        assert_eq!(record.details, "Цвет: Белый");
    }

    #[test]
    fn test_price_is_always_the_placeholder() {
        let record = extract("<html><body><h1>Товар</h1></body></html>");
        assert_eq!(record.price, "0");
    }
}

#[cfg(test)]
mod image_tests {
    use super::*;

    #[test]
    fn test_main_image_resolved_to_absolute_url() {
        let record = extract(
            "<html><body><div class=\"product-image\">\
             <img src=\"/wp-content/uploads/x100.jpg\"></div></body></html>",
        );
        assert_eq!(
            record.images,
            vec!["https://shop.example/wp-content/uploads/x100.jpg".to_string()]
        );
    }

    #[test]
    fn test_lazy_load_attribute_used_when_src_missing() {
        let record = extract(
            "<html><body><div class=\"product-image\">\
             <img data-src=\"/wp-content/uploads/lazy.jpg\"></div></body></html>",
        );
        assert_eq!(
            record.images,
            vec!["https://shop.example/wp-content/uploads/lazy.jpg".to_string()]
        );
    }

    #[test]
    fn test_thumbnail_suffixes_stripped() {
        let record = extract(
            "<html><body>\
             <div data-thumb=\"/uploads/a-100x100.jpg\"></div>\
             <div data-thumb=\"/uploads/b-150x150.png\"></div>\
             </body></html>",
        );
        assert_eq!(
            record.images,
            vec![
                "https://shop.example/uploads/a.jpg".to_string(),
                "https://shop.example/uploads/b.png".to_string()
            ]
        );
        for image in &record.images {
            assert!(!image.contains("-100x100"));
            assert!(!image.contains("-150x150"));
        }
    }

    #[test]
    fn test_images_deduplicated_across_sources() {
        // The main image is selected again by the gallery pass and the
        // thumbnail resolves to the same full-size asset
        let record = extract(
            "<html><body><div class=\"woocommerce-product-gallery__image\">\
             <img src=\"/uploads/a.jpg\"></div>\
             <div data-thumb=\"/uploads/a-100x100.jpg\"></div>\
             </body></html>",
        );
        assert_eq!(
            record.images,
            vec!["https://shop.example/uploads/a.jpg".to_string()]
        );
    }

    #[test]
    fn test_gallery_large_image_attribute() {
        let record = extract(
            "<html><body><div class=\"product-gallery\">\
             <img data-large_image=\"/uploads/big.jpg\"></div></body></html>",
        );
        assert_eq!(
            record.images,
            vec!["https://shop.example/uploads/big.jpg".to_string()]
        );
    }
}
