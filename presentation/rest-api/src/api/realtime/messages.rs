use serde::{Deserialize, Serialize};

use business::domain::notification::model::ProductEvent;

use crate::api::product::dto::{CreateProductRequest, ProductResponse};

/// Frames a client may send: `{"event": "<name>", "data": <payload>}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientMessage {
    NewProduct(CreateProductRequest),
    DeleteProduct { id: i64 },
}

/// Frames pushed to clients, same envelope as [`ClientMessage`].
#[derive(Debug, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Catalogue snapshot sent once right after connecting.
    Products(Vec<ProductResponse>),
    ProductAdded(ProductResponse),
    ProductRemoved { id: i64 },
    /// Sent only to the client whose request failed.
    ProductError { message: String },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::ProductError {
            message: message.into(),
        }
    }
}

impl From<ProductEvent> for ServerMessage {
    fn from(event: ProductEvent) -> Self {
        match event {
            ProductEvent::ProductAdded(product) => ServerMessage::ProductAdded(product.into()),
            ProductEvent::ProductRemoved { id } => ServerMessage::ProductRemoved { id },
        }
    }
}
