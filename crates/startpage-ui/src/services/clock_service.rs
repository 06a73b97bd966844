//! Renders time and date on a fixed tick.

use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use startpage_core::{Component, ComponentContext, Region};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::models::{format_date, format_time};

/// Wall-clock source, local time
pub type NowFn = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub struct ClockComponent {
    now: NowFn,
    handle: Option<JoinHandle<()>>,
}

impl ClockComponent {
    pub fn new() -> Self {
        Self::with_source(local_now)
    }

    pub fn with_source(now: NowFn) -> Self {
        Self { now, handle: None }
    }
}

impl Default for ClockComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ClockComponent {
    fn id(&self) -> &str {
        "clock"
    }

    fn name(&self) -> &str {
        "Clock"
    }

    fn start(&mut self, ctx: &ComponentContext) -> Result<()> {
        let events = ctx.events.clone();
        let tick = Duration::from_millis(ctx.config.clock.tick_ms.max(1));
        let now = self.now;

        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                // First tick completes immediately, rendering on start
                interval.tick().await;
                let t = now();
                if !events.set_text(Region::Time, format_time(&t))
                    || !events.set_text(Region::Date, format_date(&t))
                {
                    tracing::debug!("Page closed, clock stopped");
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
