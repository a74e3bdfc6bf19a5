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

use crate::{country::CallingCodeTable, string_util::is_numeric};

use super::helper_constants::{MAX_LENGTH_CALLING_CODE_KEY, PLUS_SIGN};

/// Returns the longest leading part of `number` whose digits form a key of
/// `calling_codes`, e.g. `"+1 204"` for `"+1 204 555 0100"` when `"1204"` is
/// a key.
///
/// Only numbers starting with a plus sign are considered. Characters that are
/// not ascii digits are skipped but kept in the returned slice, and at most
/// [`MAX_LENGTH_CALLING_CODE_KEY`] digits are looked at. Returns an empty
/// string when nothing matched.
pub(super) fn get_dial_code<'a>(number: &'a str, calling_codes: &CallingCodeTable) -> &'a str {
    let mut dial_code = "";
    if !number.starts_with(PLUS_SIGN) {
        return dial_code;
    }

    let mut numeric_chars = String::with_capacity(MAX_LENGTH_CALLING_CODE_KEY);
    for (index, c) in number.char_indices() {
        if !is_numeric(c) {
            continue;
        }
        numeric_chars.push(c);
        // last match wins, the accumulator only ever grows
        if calling_codes.contains_key(&numeric_chars) {
            dial_code = &number[..index + c.len_utf8()];
        }
        if numeric_chars.len() == MAX_LENGTH_CALLING_CODE_KEY {
            break;
        }
    }
    dial_code
}
