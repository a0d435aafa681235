use crate::domain::product::model::Product;

/// A product change fanned out to every connected real-time subscriber.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEvent {
    ProductAdded(Product),
    ProductRemoved { id: i64 },
}

impl ProductEvent {
    pub fn product_id(&self) -> i64 {
        match self {
            ProductEvent::ProductAdded(product) => product.id,
            ProductEvent::ProductRemoved { id } => *id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProductEvent::ProductAdded(_) => "productAdded",
            ProductEvent::ProductRemoved { .. } => "productRemoved",
        }
    }
}
