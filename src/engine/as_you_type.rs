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

use log::trace;
use phonenumber::{country, Mode};

use super::phonenumber_engine::{guarded, PhoneNumberEngine};
use crate::{
    interfaces::IncrementalFormatter,
    phonefacade::helper_constants::PLUS_SIGN,
    string_util::{keypad_digit, normalize_digit},
};

/// Formats a number while it is being typed.
///
/// Only a leading plus sign and decimal digits are accumulated. Keypad letters
/// are accumulated as their digits, everything else the user types (spaces,
/// brackets, dashes) is dropped, so the output does not depend on how the
/// input was punctuated.
pub struct AsYouTypeFormatter<'a> {
    engine: &'a PhoneNumberEngine,
    region: Option<country::Id>,
    international: bool,
    digits: String,
}

impl<'a> AsYouTypeFormatter<'a> {
    pub fn new(engine: &'a PhoneNumberEngine, region: Option<country::Id>) -> Self {
        Self { engine, region, international: false, digits: String::new() }
    }

    fn accept(&mut self, c: char) {
        if c == PLUS_SIGN && !self.international && self.digits.is_empty() {
            self.international = true;
        } else if let Some(digit) = normalize_digit(c).or_else(|| keypad_digit(c)) {
            self.digits.push(digit);
        }
    }

    /// Accumulated input in normalized form, e.g. `+16502`.
    fn normalized(&self) -> String {
        if self.international {
            fast_cat::concat_str!("+", self.digits.as_str())
        } else {
            self.digits.clone()
        }
    }

    fn formatted(&self) -> String {
        let normalized = self.normalized();
        if self.digits.is_empty() {
            return normalized;
        }
        let Ok(number) = self.engine.parse_number(&normalized, self.region) else {
            return normalized;
        };

        let international = self.international;
        let digits = self.digits.as_str();
        let formatted = guarded(|| {
            if phonenumber::is_valid(&number) {
                let mode = if international { Mode::International } else { Mode::National };
                return Some(number.format().mode(mode).to_string());
            }
            if !international {
                return None;
            }
            // Incomplete international number: split off the calling code.
            let mut buf = itoa::Buffer::new();
            let calling_code = buf.format(number.code().value());
            digits
                .strip_prefix(calling_code)
                .filter(|rest| !rest.is_empty())
                .map(|rest| fast_cat::concat_str!("+", calling_code, " ", rest))
        });

        match formatted {
            Ok(Some(formatted)) => formatted,
            Ok(None) => normalized,
            Err(err) => {
                trace!("As you type fallback for '{}': {}", normalized, err);
                normalized
            }
        }
    }
}

impl IncrementalFormatter for AsYouTypeFormatter<'_> {
    fn input_digit(&mut self, c: char) -> String {
        self.accept(c);
        self.formatted()
    }

    /// Formats once after the whole text is accumulated.
    fn input(&mut self, text: &str) -> String {
        text.chars().for_each(|c| self.accept(c));
        self.formatted()
    }

    fn clear(&mut self) {
        self.international = false;
        self.digits.clear();
    }
}
