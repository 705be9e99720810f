//! # Locale-Aware Comparison
//!
//! A small three-level collation for display names:
//!
//! 1. **Primary**: base letters, ignoring case and accents (`Å` sorts with `a`).
//! 2. **Secondary**: accents (`a` before `å`).
//! 3. **Tertiary**: case (lowercase before uppercase).
//!
//! This matches what a default collation does for the Latin-script names the
//! countries endpoint returns. Scripts outside Latin compare by code point
//! at the primary level.
//!
//! It is a Latin-only approximation of a real collation: the secondary level
//! compares lowercased code points rather than accent weights, so ties such
//! as `æ` against `ae` fall back to code point order.

use std::cmp::Ordering;

/// Compares two strings the way a default locale collation would.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_cmp(a, b))
}

/// Lowercased, accent-folded form of `s`.
fn primary_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars() {
        for lower in c.to_lowercase() {
            push_folded(&mut key, lower);
        }
    }
    key
}

/// Lowercased form of `s` with accents kept.
fn secondary_key(s: &str) -> String {
    s.to_lowercase()
}

fn tertiary_cmp(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return ca.cmp(&cb),
        }
    }
    a.chars().count().cmp(&b.chars().count())
}

/// Appends the base letter(s) of a lowercase character.
fn push_folded(key: &mut String, c: char) {
    let folded: &str = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => "s",
        'ß' => "ss",
        'ţ' | 'ť' | 'ŧ' | 'ț' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        'þ' => "th",
        _ => {
            key.push(c);
            return;
        }
    };
    key.push_str(folded);
}
