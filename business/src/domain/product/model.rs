use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::ProductStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub code: String,
    pub stock: i64,
    pub category: Option<String>,
    pub status: ProductStatus,
    pub thumbnails: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw creation input. Required fields are optional here so that a missing
/// field is reported as a validation error instead of a parse failure.
#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub code: Option<String>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub thumbnails: Vec<String>,
}

/// A validated product that has not been assigned an id by the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub code: String,
    pub stock: i64,
    pub category: Option<String>,
    pub status: ProductStatus,
    pub thumbnails: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update. Only the fields that are `Some` overwrite the stored record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub code: Option<String>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub thumbnails: Option<Vec<String>>,
}

fn required_text(value: Option<String>, missing: ProductError) -> Result<String, ProductError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(missing),
    }
}

fn checked_price(price: f64) -> Result<f64, ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ProductError::PriceInvalid)
    }
}

fn checked_stock(stock: i64) -> Result<i64, ProductError> {
    if stock >= 0 {
        Ok(stock)
    } else {
        Err(ProductError::StockInvalid)
    }
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let title = required_text(props.title, ProductError::TitleRequired)?;
        let description = required_text(props.description, ProductError::DescriptionRequired)?;
        let price = checked_price(props.price.ok_or(ProductError::PriceRequired)?)?;
        let code = required_text(props.code, ProductError::CodeRequired)?;
        let stock = checked_stock(props.stock.ok_or(ProductError::StockRequired)?)?;

        Ok(Self {
            title,
            description,
            price,
            code,
            stock,
            category: props.category.filter(|c| !c.trim().is_empty()),
            status: props.status.unwrap_or_default(),
            thumbnails: props.thumbnails,
            created_at: Utc::now(),
        })
    }

    /// Attaches the id chosen by the store.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            code: self.code,
            stock: self.stock,
            category: self.category,
            status: self.status,
            thumbnails: self.thumbnails,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl ProductPatch {
    /// Applies the same field rules as creation to every supplied field.
    pub fn validate(&self) -> Result<(), ProductError> {
        if let Some(title) = &self.title {
            required_text(Some(title.clone()), ProductError::TitleRequired)?;
        }
        if let Some(description) = &self.description {
            required_text(Some(description.clone()), ProductError::DescriptionRequired)?;
        }
        if let Some(code) = &self.code {
            required_text(Some(code.clone()), ProductError::CodeRequired)?;
        }
        if let Some(price) = self.price {
            checked_price(price)?;
        }
        if let Some(stock) = self.stock {
            checked_stock(stock)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == ProductPatch::default()
    }
}

impl Product {
    /// Shallow merge of `patch` onto this record. The id never changes.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(code) = &patch.code {
            self.code = code.clone();
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        // A blank category clears it.
        if let Some(category) = &patch.category {
            self.category = Some(category.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string);
        }
        if let Some(status) = &patch.status {
            self.status = status.clone();
        }
        if let Some(thumbnails) = &patch.thumbnails {
            self.thumbnails = thumbnails.clone();
        }
        if !patch.is_empty() {
            self.updated_at = Utc::now();
        }
    }

    /// Stringified value of a top-level field, used by listing filters.
    pub fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "description" => Some(self.description.clone()),
            "price" => Some(self.price.to_string()),
            "code" => Some(self.code.clone()),
            "stock" => Some(self.stock.to_string()),
            "category" => self.category.clone(),
            "status" => Some(self.status.to_string()),
            "thumbnails" => Some(self.thumbnails.join(",")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_props() -> NewProductProps {
        NewProductProps {
            title: Some("Mechanical Keyboard".to_string()),
            description: Some("Hot-swappable, 75% layout".to_string()),
            price: Some(129.9),
            code: Some("KB-075".to_string()),
            stock: Some(12),
            category: Some("peripherals".to_string()),
            status: None,
            thumbnails: vec!["kb-front.png".to_string()],
        }
    }

    #[test]
    fn should_create_new_product_when_all_required_fields_present() {
        let product = NewProduct::new(valid_props()).unwrap().into_product(7);

        assert_eq!(product.id, 7);
        assert_eq!(product.title, "Mechanical Keyboard");
        assert_eq!(product.code, "KB-075");
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_reject_when_title_missing() {
        let props = NewProductProps {
            title: None,
            ..valid_props()
        };
        assert!(matches!(
            NewProduct::new(props),
            Err(ProductError::TitleRequired)
        ));
    }

    #[test]
    fn should_reject_when_description_blank() {
        let props = NewProductProps {
            description: Some("   ".to_string()),
            ..valid_props()
        };
        assert!(matches!(
            NewProduct::new(props),
            Err(ProductError::DescriptionRequired)
        ));
    }

    #[test]
    fn should_reject_when_price_missing_or_negative() {
        let missing = NewProductProps {
            price: None,
            ..valid_props()
        };
        let negative = NewProductProps {
            price: Some(-1.0),
            ..valid_props()
        };
        assert!(matches!(
            NewProduct::new(missing),
            Err(ProductError::PriceRequired)
        ));
        assert!(matches!(
            NewProduct::new(negative),
            Err(ProductError::PriceInvalid)
        ));
    }

    #[test]
    fn should_reject_when_code_empty() {
        let props = NewProductProps {
            code: Some(String::new()),
            ..valid_props()
        };
        assert!(matches!(
            NewProduct::new(props),
            Err(ProductError::CodeRequired)
        ));
    }

    #[test]
    fn should_reject_when_stock_missing_or_negative() {
        let missing = NewProductProps {
            stock: None,
            ..valid_props()
        };
        let negative = NewProductProps {
            stock: Some(-3),
            ..valid_props()
        };
        assert!(matches!(
            NewProduct::new(missing),
            Err(ProductError::StockRequired)
        ));
        assert!(matches!(
            NewProduct::new(negative),
            Err(ProductError::StockInvalid)
        ));
    }

    #[test]
    fn should_accept_zero_stock() {
        let props = NewProductProps {
            stock: Some(0),
            ..valid_props()
        };
        assert_eq!(NewProduct::new(props).unwrap().stock, 0);
    }

    #[test]
    fn should_only_change_price_when_patch_has_price() {
        let original = NewProduct::new(valid_props()).unwrap().into_product(1);
        let mut updated = original.clone();

        updated.apply(&ProductPatch {
            price: Some(99.0),
            ..Default::default()
        });

        assert_eq!(updated.price, 99.0);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.code, original.code);
        assert_eq!(updated.stock, original.stock);
        assert_eq!(updated.category, original.category);
        assert_eq!(updated.thumbnails, original.thumbnails);
    }

    #[test]
    fn should_clear_category_when_patch_category_blank() {
        let mut product = NewProduct::new(valid_props()).unwrap().into_product(1);

        product.apply(&ProductPatch {
            category: Some("  ".to_string()),
            ..Default::default()
        });

        assert_eq!(product.category, None);
    }

    #[test]
    fn should_replace_category_when_patch_category_present() {
        let mut product = NewProduct::new(valid_props()).unwrap().into_product(1);

        product.apply(&ProductPatch {
            category: Some(" audio ".to_string()),
            ..Default::default()
        });

        assert_eq!(product.category.as_deref(), Some("audio"));
    }

    #[test]
    fn should_leave_record_untouched_when_patch_empty() {
        let original = NewProduct::new(valid_props()).unwrap().into_product(1);
        let mut updated = original.clone();

        updated.apply(&ProductPatch::default());

        assert_eq!(updated, original);
    }

    #[test]
    fn should_reject_patch_with_blank_title() {
        let patch = ProductPatch {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(matches!(patch.validate(), Err(ProductError::TitleRequired)));
    }

    #[test]
    fn should_expose_stringified_field_values() {
        let product = NewProduct::new(valid_props()).unwrap().into_product(3);

        assert_eq!(product.field_value("id").as_deref(), Some("3"));
        assert_eq!(product.field_value("stock").as_deref(), Some("12"));
        assert_eq!(product.field_value("status").as_deref(), Some("active"));
        assert_eq!(product.field_value("unknown"), None);
    }

    proptest! {
        #[test]
        fn patching_stock_never_touches_other_fields(stock in 0i64..1_000_000) {
            let original = NewProduct::new(valid_props()).unwrap().into_product(1);
            let mut updated = original.clone();

            updated.apply(&ProductPatch { stock: Some(stock), ..Default::default() });

            prop_assert_eq!(updated.stock, stock);
            prop_assert_eq!(&updated.title, &original.title);
            prop_assert_eq!(updated.price, original.price);
            prop_assert_eq!(&updated.code, &original.code);
        }
    }
}
