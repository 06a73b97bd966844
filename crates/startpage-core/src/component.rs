use anyhow::Result;
use std::sync::Arc;

use crate::{Config, EventSender};

/// A page component: owns its timers or listeners and reports through events
pub trait Component: Send {
    /// Unique identifier for this component
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Start the component. Must not block; long-running work is spawned
    /// onto the current tokio runtime.
    fn start(&mut self, ctx: &ComponentContext) -> Result<()>;

    /// Stop any spawned work
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Context handed to every component on start
#[derive(Debug, Clone)]
pub struct ComponentContext {
    pub config: Arc<Config>,
    pub events: EventSender,
}

impl ComponentContext {
    pub fn new(config: Arc<Config>, events: EventSender) -> Self {
        Self { config, events }
    }
}
