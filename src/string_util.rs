// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{borrow::Cow, sync::LazyLock};

use dec_from_char::DecimalExtended;
use regex::Regex;

static NON_ASCII_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9]").expect("Invalid constant pattern!"));

/// Removes every character that is not an ascii digit.
///
/// Returns `Cow::Borrowed` if the string already contains only digits.
pub fn get_numeric(s: &str) -> Cow<'_, str> {
    NON_ASCII_DIGITS.replace_all(s, "")
}

/// Only ascii digits take part in dial code matching.
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

/// Converts any unicode decimal digit (full-width, arabic-indic...) to its
/// ascii counterpart. Returns `None` for everything else.
pub fn normalize_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    if !c.is_decimal_utf8() {
        return None;
    }
    dec_from_char::normalize_decimals(&c.to_string())
        .to_string()
        .chars()
        .next()
        .filter(char::is_ascii_digit)
}

/// Digit printed next to a latin letter on a phone keypad, as used by vanity
/// numbers like `1-800-FLOWERS`.
pub fn keypad_digit(c: char) -> Option<char> {
    let digit = match c.to_ascii_uppercase() {
        'A'..='C' => '2',
        'D'..='F' => '3',
        'G'..='I' => '4',
        'J'..='L' => '5',
        'M'..='O' => '6',
        'P'..='S' => '7',
        'T'..='V' => '8',
        'W'..='Z' => '9',
        _ => return None,
    };
    Some(digit)
}
