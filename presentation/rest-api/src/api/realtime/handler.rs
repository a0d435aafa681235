use std::sync::Arc;

use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

use super::messages::{ClientMessage, ServerMessage};

/// Runs the mutations clients request over the real-time channel.
///
/// Successful mutations are announced to everyone through the event bus by
/// the use cases themselves, so only failures produce a direct reply.
pub struct RealtimeHandler {
    create_use_case: Arc<dyn CreateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl RealtimeHandler {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            delete_use_case,
        }
    }

    /// Returns the reply owed to the sender of `frame`, if any.
    pub async fn handle_frame(&self, frame: &str) -> Option<ServerMessage> {
        let message = match serde_json::from_str::<ClientMessage>(frame) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable real-time frame");
                return Some(ServerMessage::error("realtime.invalid_message"));
            }
        };

        match message {
            ClientMessage::NewProduct(request) => {
                match self.create_use_case.execute(request.into()).await {
                    Ok(_) => None,
                    Err(e) => Some(ServerMessage::error(e.to_string())),
                }
            }
            ClientMessage::DeleteProduct { id } => {
                match self
                    .delete_use_case
                    .execute(DeleteProductParams { id })
                    .await
                {
                    Ok(true) => None,
                    Ok(false) => Some(ServerMessage::error("product.not_found")),
                    Err(e) => Some(ServerMessage::error(e.to_string())),
                }
            }
        }
    }
}
