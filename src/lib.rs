//! # chet
//!
//! Fail-soft conversion helpers, Chinese formatting, a network clock and a
//! scheduled auto-clicker.
//!
//! ## Modules
//!
//! - `ext` - Extension traits and free helpers grouped by value type
//! - `format` - Culture conventions, numeric and date-time patterns, Chinese numerals
//! - `calendar` - Lunar dates, Julian Day Numbers and time-zone ids
//! - `pinyin` - Toneless pinyin for common hanzi
//! - `table` - A small row/column table with filter and sort expressions
//! - `grouping` - Time-proximity grouping of records
//! - `ntp` - SNTP client with local-clock fallback
//! - `autoclick` - Cancellable scheduled left clicks
//! - `config` - TOML settings with environment overrides
//!
//! ```
//! use chet::ext::{DecimalExt, StrExt};
//! use rust_decimal::Decimal;
//!
//! assert_eq!("42".to_int_or(0), 42);
//! assert_eq!(Decimal::new(12345, 2).to_chinese_upper(), "壹佰贰拾叁元肆角伍分");
//! ```

pub mod app;
pub mod autoclick;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod ext;
pub mod format;
pub mod grouping;
pub mod ntp;
pub mod pinyin;
pub mod table;

pub use error::{ChetError, Result};
