//! Shows the time-of-day background and swaps it when the range changes.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, Timelike};
use startpage_core::{Component, ComponentContext, PageEvent};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::models::BackgroundSelector;

/// Current local hour, 0..24
pub type HourFn = Arc<dyn Fn() -> u32 + Send + Sync>;

pub struct BackgroundComponent {
    hour: HourFn,
    handle: Option<JoinHandle<()>>,
}

impl BackgroundComponent {
    pub fn new() -> Self {
        Self::with_source(Arc::new(|| Local::now().hour()))
    }

    pub fn with_source(hour: HourFn) -> Self {
        Self { hour, handle: None }
    }
}

impl Default for BackgroundComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BackgroundComponent {
    fn id(&self) -> &str {
        "background"
    }

    fn name(&self) -> &str {
        "Background"
    }

    fn start(&mut self, ctx: &ComponentContext) -> Result<()> {
        let events = ctx.events.clone();
        let poll = Duration::from_secs(ctx.config.background.poll_minutes.max(1) * 60);
        let mut selector = BackgroundSelector::new(ctx.config.background.image_dir.clone());
        let hour = self.hour.clone();

        events.send(PageEvent::SetBackground(selector.initial(hour())));

        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + poll, poll);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if let Some(path) = selector.check(hour()) {
                    tracing::info!("Switching background to {}", path);
                    if !events.send(PageEvent::SetBackground(path)) {
                        break;
                    }
                } else if events.is_closed() {
                    break;
                }
            }
        }));

        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        Ok(())
    }
}
