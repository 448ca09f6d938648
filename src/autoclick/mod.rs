//! Scheduled left clicks at a wall-clock time taken from the network clock
//!
//! A schedule measures the delay once, waits once, then emits all of its
//! clicks at the current pointer position. It can be cancelled any time
//! before it fires.

pub mod pointer;

pub use pointer::{Point, PointerDevice, RecordingPointer, SystemPointer};

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::{ChetError, Result};
use crate::ntp::TimeSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickPlan {
    pub target: NaiveDateTime,
    pub clicks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Fired { clicks: u32, at: Point },
    Cancelled,
}

/// Time left until `target`; `None` once it has passed
pub fn delay_until(target: NaiveDateTime, now: NaiveDateTime) -> Option<Duration> {
    target
        .signed_duration_since(now)
        .to_std()
        .ok()
        .filter(|d| !d.is_zero())
}

/// Click `count` times at the current pointer position
pub fn emit_clicks(device: &dyn PointerDevice, count: u32) -> Result<ClickOutcome> {
    let at = device.position()?;
    for _ in 0..count {
        device.left_click()?;
    }
    info!("Sent {} clicks at ({}, {})", count, at.x, at.y);
    Ok(ClickOutcome::Fired { clicks: count, at })
}

/// A pending schedule
#[derive(Debug)]
pub struct ScheduledClick {
    delay: Duration,
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<ClickOutcome>>,
}

impl ScheduledClick {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stop the schedule if it has not fired yet
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // The task may already be done; then there is no one to tell
            let _ = cancel.send(());
        }
    }

    /// Wait for the schedule to fire or be cancelled
    pub async fn wait(self) -> Result<ClickOutcome> {
        self.handle
            .await
            .map_err(|e| ChetError::Other(format!("click task failed: {e}")))?
    }
}

/// Read the clock and start a schedule; `None` when the target is not in the future
pub async fn schedule(
    plan: ClickPlan,
    clock: &dyn TimeSource,
    device: Arc<dyn PointerDevice>,
) -> Option<ScheduledClick> {
    let now = clock.now().await;
    let Some(delay) = delay_until(plan.target, now) else {
        info!(
            "Target {} is not after {}; nothing scheduled",
            plan.target, now
        );
        return None;
    };
    debug!("Clicking {} times in {:?}", plan.clicks, delay);

    let (cancel, cancelled) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                tokio::task::spawn_blocking(move || emit_clicks(device.as_ref(), plan.clicks))
                    .await
                    .map_err(|e| ChetError::Other(format!("click task failed: {e}")))?
            }
            Ok(()) = cancelled => {
                info!("Scheduled clicks cancelled");
                Ok(ClickOutcome::Cancelled)
            }
        }
    });

    Some(ScheduledClick {
        delay,
        cancel: Some(cancel),
        handle,
    })
}
