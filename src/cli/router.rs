//! Command routing and execution

use anyhow::Result;

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::Settings;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Time {
            server,
            timeout_ms,
            strict,
            format,
        } => {
            run_time_command(
                TimeParams {
                    server,
                    timeout_ms,
                    strict,
                    format,
                },
                settings,
            )
            .await
        }
        Commands::Click {
            target,
            count,
            local_clock,
            dry_run,
        } => {
            run_click_command(
                ClickParams {
                    target,
                    count,
                    local_clock,
                    dry_run,
                },
                settings,
            )
            .await
        }
        Commands::Group {
            input,
            threshold_minutes,
            by_key,
            json,
        } => run_group_command(
            GroupParams {
                input,
                threshold_minutes,
                by_key,
                json,
            },
            settings,
        ),
        Commands::Upper { amount } => run_upper_command(&amount),
        Commands::Pinyin { text, initials } => run_pinyin_command(&text, initials),
        Commands::Lunar { date } => run_lunar_command(date.as_deref()),
        Commands::Julian { date } => run_julian_command(date.as_deref()),
        Commands::Elapsed { from, to } => run_elapsed_command(from.as_deref(), to.as_deref()),
    }
}
