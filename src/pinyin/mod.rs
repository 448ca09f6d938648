//! Toneless pinyin for common hanzi
//!
//! Covers the 3755 level-1 characters of GB2312, each mapped to the syllable
//! of its pronunciation band. Characters outside the table pass through
//! unchanged.

mod table;

use std::collections::HashMap;

use once_cell::sync::Lazy;

static LOOKUP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(3755);
    for (syllable, chars) in table::SYLLABLES {
        for c in chars.chars() {
            map.entry(c).or_insert(*syllable);
        }
    }
    map
});

/// Syllable for a single character, if it is in the table
pub fn syllable(c: char) -> Option<&'static str> {
    LOOKUP.get(&c).copied()
}

/// Transliterate `text`, concatenating syllables without separators
pub fn to_pinyin(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match syllable(c) {
            Some(s) => out.push_str(s),
            None => out.push(c),
        }
    }
    out
}

/// First letter of each syllable, other characters kept as they are
pub fn initials(text: &str) -> String {
    text.chars()
        .map(|c| {
            syllable(c)
                .and_then(|s| s.chars().next())
                .unwrap_or(c)
        })
        .collect()
}
