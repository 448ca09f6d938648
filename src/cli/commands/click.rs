//! `chet click`

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::parse_when;
use super::time::client_for;
use crate::autoclick::{schedule, ClickOutcome, ClickPlan, PointerDevice, RecordingPointer, SystemPointer};
use crate::config::Settings;
use crate::ext::datetime::DateTimeExt;
use crate::ntp::{LocalClock, TimeSource};

pub struct ClickParams {
    pub target: String,
    pub count: u32,
    pub local_clock: bool,
    pub dry_run: bool,
}

pub async fn run_click_command(params: ClickParams, settings: &Settings) -> Result<()> {
    let target = parse_when(&params.target)?;
    let plan = ClickPlan {
        target,
        clicks: params.count,
    };

    let clock: Box<dyn TimeSource> = if params.local_clock {
        Box::new(LocalClock)
    } else {
        Box::new(client_for(settings, None, None))
    };
    let device: Arc<dyn PointerDevice> = if params.dry_run {
        Arc::new(RecordingPointer::default())
    } else {
        Arc::new(SystemPointer)
    };

    let Some(mut scheduled) = schedule(plan, clock.as_ref(), device).await else {
        println!(
            "{} has already passed; nothing scheduled",
            target.to_default_string()
        );
        return Ok(());
    };

    println!(
        "Clicking {} time(s) at {} (in {:.1}s, Ctrl+C to cancel)",
        params.count,
        target.to_default_string(),
        scheduled.delay().as_secs_f64()
    );

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, cancelling scheduled clicks");
            scheduled.cancel();
        }
        _ = tokio::time::sleep(scheduled.delay()) => {}
    }

    match scheduled.wait().await? {
        ClickOutcome::Fired { clicks, at } => {
            let mode = if params.dry_run { " (dry run)" } else { "" };
            println!("Sent {} click(s) at ({}, {}){}", clicks, at.x, at.y, mode);
        }
        ClickOutcome::Cancelled => println!("Cancelled"),
    }
    Ok(())
}
