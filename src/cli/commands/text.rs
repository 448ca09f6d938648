//! `chet upper` and `chet pinyin`

use std::str::FromStr;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::ext::decimal::DecimalExt;
use crate::pinyin;

pub fn run_upper_command(amount: &str) -> Result<()> {
    let value = Decimal::from_str(amount.trim())
        .map_err(|_| anyhow!("Not a decimal amount: '{}'", amount))?;
    println!("{}", value.to_chinese_upper());
    Ok(())
}

pub fn run_pinyin_command(text: &str, initials: bool) -> Result<()> {
    if initials {
        println!("{}", pinyin::initials(text));
    } else {
        println!("{}", pinyin::to_pinyin(text));
    }
    Ok(())
}
