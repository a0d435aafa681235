use std::sync::Arc;

use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use poem::web::Data;
use poem::web::websocket::{Message, WebSocket, WebSocketStream};
use poem::{IntoResponse, handler};
use uuid::Uuid;

use business::domain::notification::event_bus::{EventDelivery, ProductEventBus};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use super::handler::RealtimeHandler;
use super::messages::ServerMessage;

/// Shared state behind `GET /ws`.
#[derive(Clone)]
pub struct RealtimeGateway {
    pub event_bus: Arc<dyn ProductEventBus>,
    pub get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    pub handler: Arc<RealtimeHandler>,
}

/// What to do with one item received from the event bus.
#[derive(Debug)]
enum BusStep {
    Forward(ServerMessage),
    Skip,
    Stop,
}

fn bus_step(session: Uuid, delivery: EventDelivery) -> BusStep {
    match delivery {
        EventDelivery::Event(event) => BusStep::Forward(event.into()),
        EventDelivery::Lagged(missed) => {
            tracing::warn!(%session, missed, "Real-time subscriber lagging, events skipped");
            BusStep::Skip
        }
        EventDelivery::Closed => BusStep::Stop,
    }
}

type Sink = SplitSink<WebSocketStream, Message>;

/// Returns `false` once the client is gone.
async fn send(sink: &mut Sink, session: Uuid, message: &ServerMessage) -> bool {
    let json = match serde_json::to_string(message) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(%session, error = %e, "Could not encode real-time frame");
            return true;
        }
    };
    sink.send(Message::Text(json)).await.is_ok()
}

impl RealtimeGateway {
    async fn serve(self, socket: WebSocketStream) {
        let session = Uuid::new_v4();
        // Subscribe before the snapshot so nothing published in between is missed.
        let mut events = self.event_bus.subscribe();
        let (mut sink, mut stream) = socket.split();
        tracing::info!(%session, "Real-time subscriber connected");

        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let snapshot =
                    ServerMessage::Products(products.into_iter().map(Into::into).collect());
                if !send(&mut sink, session, &snapshot).await {
                    return;
                }
            }
            Err(e) => tracing::warn!(%session, error = %e, "Could not load product snapshot"),
        }

        loop {
            tokio::select! {
                delivery = events.next() => match bus_step(session, delivery) {
                    BusStep::Forward(message) => {
                        if !send(&mut sink, session, &message).await {
                            break;
                        }
                    }
                    BusStep::Skip => {}
                    BusStep::Stop => break,
                },
                frame = stream.next() => match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(reply) = self.handler.handle_frame(&text).await
                            && !send(&mut sink, session, &reply).await
                        {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::warn!(%session, error = %e, "Real-time socket error");
                        break;
                    }
                    _ => {} // Binary, Ping, Pong
                },
            }
        }

        tracing::info!(%session, "Real-time subscriber disconnected");
    }
}

/// `GET /ws`: upgrades to the real-time product channel.
#[handler]
pub fn realtime_gateway(ws: WebSocket, gateway: Data<&RealtimeGateway>) -> impl IntoResponse {
    let gateway = gateway.0.clone();
    ws.on_upgrade(move |socket| gateway.serve(socket))
}
