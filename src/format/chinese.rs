//! Financial (大写) Chinese numerals

const DIGITS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];
const RADICES: [&str; 4] = ["", "拾", "佰", "仟"];
const UNITS: [&str; 4] = ["", "万", "亿", "兆"];

pub const OUT_OF_RANGE: &str = "超出最大处理数";

/// Render one group of up to four digits, emitting 零 before a digit that follows zeros
fn render_group(group: &[u8]) -> String {
    let mut out = String::new();
    let mut pending_zero = false;
    let len = group.len();
    for (i, &digit) in group.iter().enumerate() {
        if digit == 0 {
            pending_zero = true;
            continue;
        }
        if pending_zero {
            out.push(DIGITS[0]);
            pending_zero = false;
        }
        out.push(DIGITS[digit as usize]);
        out.push_str(RADICES[len - 1 - i]);
    }
    out
}

/// Integer part in financial numerals without the 元 suffix; empty for zero
pub fn integer_part(value: u64) -> String {
    let digits: Vec<u8> = value.to_string().bytes().map(|b| b - b'0').collect();

    // lowest group first
    let mut groups: Vec<Vec<u8>> = digits.rchunks(4).map(|c| c.to_vec()).collect();
    let last = groups.len().saturating_sub(1);
    for group in groups.iter_mut().take(last) {
        while group.len() < 4 {
            group.insert(0, 0);
        }
    }

    let mut result = String::new();
    for (index, group) in groups.iter().enumerate() {
        if group.iter().all(|&d| d == 0) {
            if !result.is_empty() && !result.starts_with(DIGITS[0]) {
                result.insert(0, DIGITS[0]);
            }
            continue;
        }
        let unit = UNITS.get(index).copied().unwrap_or_default();
        result = format!("{}{}{}", render_group(group), unit, result);
    }

    result.trim_start_matches(DIGITS[0]).to_string()
}

/// Currency amount in financial numerals: `壹佰贰拾叁元肆角伍分`
///
/// `cents` is the truncated fractional part in hundredths (0..100).
pub fn money(integer: u64, cents: u32, negative: bool) -> String {
    if integer == 0 && cents == 0 {
        return "零元整".to_string();
    }

    let mut out = String::new();
    if negative {
        out.push('负');
    }
    if integer > 0 {
        out.push_str(&integer_part(integer));
    } else {
        out.push(DIGITS[0]);
    }
    out.push('元');

    let jiao = (cents / 10 % 10) as usize;
    let fen = (cents % 10) as usize;
    if jiao == 0 && fen == 0 {
        out.push('整');
    } else {
        if jiao > 0 {
            out.push(DIGITS[jiao]);
            out.push('角');
        }
        if fen > 0 {
            out.push(DIGITS[fen]);
            out.push('分');
        }
    }
    out
}

/// Whole amount in financial numerals without the 整 marker: `壹仟零壹元`
pub fn integer_money(value: i64) -> String {
    if value == 0 {
        return "零元".to_string();
    }
    let sign = if value < 0 { "负" } else { "" };
    format!("{sign}{}元", integer_part(value.unsigned_abs()))
}
