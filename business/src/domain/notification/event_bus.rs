use async_trait::async_trait;

use super::model::ProductEvent;

/// Outcome of waiting on a [`ProductEventSubscription`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventDelivery {
    Event(ProductEvent),
    /// The subscriber fell behind and this many events were dropped for it.
    Lagged(u64),
    /// The bus is gone; no further events will arrive.
    Closed,
}

/// One subscriber's view of the bus, created by [`ProductEventBus::subscribe`].
#[async_trait]
pub trait ProductEventSubscription: Send {
    /// Waits for the next delivery. Dropping the future loses no event.
    async fn next(&mut self) -> EventDelivery;
}

/// Publish/subscribe port for product change notifications.
///
/// Delivery is fire-and-forget: an event reaches the subscribers that exist
/// when it is published, once at most, and is not kept for later ones.
pub trait ProductEventBus: Send + Sync {
    /// Returns how many subscribers the event was handed to.
    fn publish(&self, event: ProductEvent) -> usize;
    fn subscribe(&self) -> Box<dyn ProductEventSubscription>;
}
