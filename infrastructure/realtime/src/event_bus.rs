use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use business::domain::notification::event_bus::{
    EventDelivery, ProductEventBus, ProductEventSubscription,
};
use business::domain::notification::model::ProductEvent;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// In-process fan-out of product events over a `tokio` broadcast channel.
///
/// Each subscriber gets its own receiver. A receiver that falls more than
/// `capacity` events behind skips the oldest ones; nothing is retried.
#[derive(Debug, Clone)]
pub struct BroadcastEventBus {
    sender: broadcast::Sender<ProductEvent>,
}

impl BroadcastEventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductEventBus for BroadcastEventBus {
    fn publish(&self, event: ProductEvent) -> usize {
        let name = event.name();
        let product_id = event.product_id();

        match self.sender.send(event) {
            Ok(delivered) => {
                tracing::debug!(event = name, product_id, delivered, "Product event published");
                delivered
            }
            // No subscriber is connected; the event is dropped.
            Err(_) => {
                tracing::debug!(event = name, product_id, "Product event had no subscribers");
                0
            }
        }
    }

    fn subscribe(&self) -> Box<dyn ProductEventSubscription> {
        let receiver = self.sender.subscribe();
        tracing::debug!(
            subscribers = self.sender.receiver_count(),
            "Subscriber connected to product events"
        );
        Box::new(BroadcastSubscription { receiver })
    }
}

/// A [`BroadcastEventBus`] receiver behind the domain subscription port.
pub struct BroadcastSubscription {
    receiver: broadcast::Receiver<ProductEvent>,
}

#[async_trait]
impl ProductEventSubscription for BroadcastSubscription {
    async fn next(&mut self) -> EventDelivery {
        match self.receiver.recv().await {
            Ok(event) => EventDelivery::Event(event),
            Err(RecvError::Lagged(missed)) => EventDelivery::Lagged(missed),
            Err(RecvError::Closed) => EventDelivery::Closed,
        }
    }
}
