use chrono::{DateTime, Utc};

use super::errors::CartError;

/// A product-quantity pair inside a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: i64,
    pub products: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A change to the line items of one cart. Stores apply it inside their
/// read-modify-write so concurrent mutations on a cart never interleave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartMutation {
    AddItem { product_id: i64, quantity: u32 },
    RemoveItem { product_id: i64 },
    SetQuantity { product_id: i64, quantity: u32 },
}

impl Cart {
    /// An empty cart with the id assigned by the store.
    pub fn empty(id: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            products: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        products: Vec<CartItem>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            products,
            created_at,
            updated_at,
        }
    }

    pub fn item(&self, product_id: i64) -> Option<&CartItem> {
        self.products.iter().find(|i| i.product_id == product_id)
    }

    /// Upsert by product: an existing line item grows by `quantity`,
    /// otherwise a new one is appended.
    pub fn add_item(&mut self, product_id: i64, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::QuantityInvalid);
        }

        match self.products.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.products.push(CartItem {
                product_id,
                quantity,
            }),
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Returns whether a line item was removed. Absent products are a no-op.
    pub fn remove_item(&mut self, product_id: i64) -> bool {
        let before = self.products.len();
        self.products.retain(|i| i.product_id != product_id);
        let removed = self.products.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    pub fn set_item_quantity(&mut self, product_id: i64, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::QuantityInvalid);
        }

        let item = self
            .products
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or(CartError::ItemNotFound)?;
        item.quantity = quantity;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Applies `mutation`, returning whether the line items changed.
    pub fn apply(&mut self, mutation: &CartMutation) -> Result<bool, CartError> {
        match *mutation {
            CartMutation::AddItem {
                product_id,
                quantity,
            } => self.add_item(product_id, quantity).map(|_| true),
            CartMutation::RemoveItem { product_id } => Ok(self.remove_item(product_id)),
            CartMutation::SetQuantity {
                product_id,
                quantity,
            } => self.set_item_quantity(product_id, quantity).map(|_| true),
        }
    }
}
