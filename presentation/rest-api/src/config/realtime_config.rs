use anyhow::Context;
use realtime::event_bus::DEFAULT_CHANNEL_CAPACITY;

/// Real-time channel settings
#[derive(Debug, Clone)]
pub struct RealtimeConfig {
    /// Events buffered per subscriber before the slowest ones start skipping.
    pub channel_capacity: usize,
}

impl RealtimeConfig {
    /// Environment variables:
    /// - REALTIME_CHANNEL_CAPACITY: broadcast buffer size (default: 256)
    pub fn from_env() -> anyhow::Result<Self> {
        let channel_capacity = match std::env::var("REALTIME_CHANNEL_CAPACITY") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("Invalid REALTIME_CHANNEL_CAPACITY: {raw}"))?,
            Err(_) => DEFAULT_CHANNEL_CAPACITY,
        };

        Ok(Self { channel_capacity })
    }
}
