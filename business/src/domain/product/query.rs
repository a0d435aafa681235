use std::collections::BTreeMap;

use super::model::Product;
use super::pagination::{PageRequest, PageResult};
use super::value_objects::PriceSort;

/// Field-name to value filter. A product matches when every entry matches
/// its field, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    criteria: BTreeMap<String, String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.criteria
            .insert(field.into().to_lowercase(), value.into().to_lowercase());
        self
    }

    /// Parses `field:value` pairs separated by commas. A bare value filters
    /// on `category`. Empty segments are ignored.
    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .fold(Self::new(), |filter, segment| match segment.split_once(':') {
                Some((field, value)) => filter.with(field.trim(), value.trim()),
                None => filter.with("category", segment),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Numeric fields compare by value, `status` and `code` by exact text,
    /// free-text fields by substring. All comparisons ignore case.
    pub fn matches(&self, product: &Product) -> bool {
        self.criteria.iter().all(|(field, expected)| match field.as_str() {
            "id" => expected.parse::<i64>().is_ok_and(|id| id == product.id),
            "stock" => expected.parse::<i64>().is_ok_and(|stock| stock == product.stock),
            "price" => expected.parse::<f64>().is_ok_and(|price| price == product.price),
            "status" | "code" => product
                .field_value(field)
                .is_some_and(|actual| actual.to_lowercase() == *expected),
            _ => product
                .field_value(field)
                .is_some_and(|actual| actual.to_lowercase().contains(expected.as_str())),
        })
    }
}

/// Everything a paginated listing needs: filter, then order, then page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort: PriceSort,
    pub page: PageRequest,
}

impl ProductQuery {
    pub fn run(&self, products: Vec<Product>) -> PageResult<Product> {
        let mut matching: Vec<Product> = products
            .into_iter()
            .filter(|p| self.filter.matches(p))
            .collect();

        match self.sort {
            PriceSort::Ascending => matching.sort_by(|a, b| a.price.total_cmp(&b.price)),
            PriceSort::Descending => matching.sort_by(|a, b| b.price.total_cmp(&a.price)),
            PriceSort::Unsorted => {}
        }

        PageResult::paginate(matching, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::ProductStatus;
    use chrono::Utc;

    fn product(id: i64, title: &str, price: f64, category: Option<&str>) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            price,
            code: format!("CODE-{}", id),
            stock: 5,
            category: category.map(str::to_string),
            status: ProductStatus::Active,
            thumbnails: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn should_match_substring_case_insensitively() {
        let filter = ProductFilter::new().with("title", "KEYB");

        assert!(filter.matches(&product(1, "Mechanical Keyboard", 10.0, None)));
        assert!(!filter.matches(&product(2, "Mouse", 10.0, None)));
    }

    #[test]
    fn should_match_status_exactly_when_filtering_active() {
        let mut inactive = product(2, "Old", 100.0, None);
        inactive.status = ProductStatus::Inactive;
        let products = vec![product(1, "New", 10.0, None), inactive];
        let query = ProductQuery {
            filter: ProductFilter::parse("status:active"),
            ..Default::default()
        };

        let ids: Vec<i64> = query.run(products).docs.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn should_match_numeric_fields_by_value() {
        let products = vec![
            product(1, "Cheap", 10.0, None),
            product(10, "Pricey", 100.0, None),
            product(11, "Odd", 10.5, None),
        ];

        let by_price = ProductFilter::parse("price:10");
        let by_decimal_price = ProductFilter::parse("price:10.0");
        let by_id = ProductFilter::parse("id:1");

        let matching = |filter: &ProductFilter| -> Vec<i64> {
            products
                .iter()
                .filter(|p| filter.matches(p))
                .map(|p| p.id)
                .collect()
        };
        assert_eq!(matching(&by_price), vec![1]);
        assert_eq!(matching(&by_decimal_price), vec![1]);
        assert_eq!(matching(&by_id), vec![1]);
    }

    #[test]
    fn should_not_match_numeric_field_when_value_unparsable() {
        let filter = ProductFilter::parse("stock:many");

        assert!(!filter.matches(&product(1, "A", 1.0, None)));
    }

    #[test]
    fn should_match_code_exactly_ignoring_case() {
        let filter = ProductFilter::parse("code:code-1");

        assert!(filter.matches(&product(1, "A", 1.0, None)));
        assert!(!filter.matches(&product(12, "B", 1.0, None)));
    }

    #[test]
    fn should_not_match_when_field_absent() {
        let filter = ProductFilter::new().with("category", "books");

        assert!(!filter.matches(&product(1, "Novel", 10.0, None)));
    }

    #[test]
    fn should_parse_pairs_and_bare_category() {
        let filter = ProductFilter::parse("status:active, books");

        assert_eq!(
            filter,
            ProductFilter::new()
                .with("status", "active")
                .with("category", "books")
        );
    }

    #[test]
    fn should_parse_empty_query_as_empty_filter() {
        assert!(ProductFilter::parse(" , ").is_empty());
    }

    #[test]
    fn should_sort_by_price_descending_before_paging() {
        let products = vec![
            product(1, "A", 5.0, None),
            product(2, "B", 50.0, None),
            product(3, "C", 20.0, None),
        ];
        let query = ProductQuery {
            sort: PriceSort::Descending,
            page: PageRequest::new(Some(1), Some(2)),
            ..Default::default()
        };

        let page = query.run(products);

        let ids: Vec<i64> = page.docs.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(page.total_docs, 3);
        assert!(page.has_next_page);
    }

    #[test]
    fn should_keep_store_order_when_unsorted() {
        let products = vec![
            product(3, "C", 20.0, Some("tools")),
            product(1, "A", 5.0, Some("books")),
            product(2, "B", 50.0, Some("tools")),
        ];
        let query = ProductQuery {
            filter: ProductFilter::parse("tools"),
            ..Default::default()
        };

        let page = query.run(products);

        let ids: Vec<i64> = page.docs.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(page.total_docs, 2);
    }
}
