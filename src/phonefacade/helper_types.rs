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

/// Result of a single parse call. Not cached and never shared between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    valid: bool,
    /// E.164 form, e.g. `+16502530000`.
    international: String,
    /// National form, e.g. `(650) 253-0000`.
    national: String,
    type_code: i32,
    calling_code: u16,
    /// ISO2 region the number belongs to, upper case, if the engine could tell.
    region: Option<String>,
}

impl ParsedNumber {
    pub fn new(
        valid: bool,
        international: String,
        national: String,
        type_code: i32,
        calling_code: u16,
        region: Option<String>,
    ) -> Self {
        Self { valid, international, national, type_code, calling_code, region }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn international(&self) -> &str {
        &self.international
    }

    pub fn national(&self) -> &str {
        &self.national
    }

    pub fn type_code(&self) -> i32 {
        self.type_code
    }

    pub fn calling_code(&self) -> u16 {
        self.calling_code
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
