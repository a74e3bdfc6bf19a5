// Copyright (C) 2009 The Libphonenumber Authors
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

use strum::{EnumIter, IntoStaticStr};

/// Categorizes phone numbers based on their primary use.
///
/// Symbolic names (`FIXED_LINE`, `MOBILE`, ...) and integer codes follow
/// libphonenumber's numbering, which is also what the bundled
/// [`NumberTypeTable`](crate::NumberTypeTable) maps.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PhoneNumberType {
    /// **Fixed-line numbers.**
    /// These are traditional landline telephone numbers tied to a specific geographic location.
    FixedLine,
    /// **Mobile numbers.**
    /// These numbers are assigned to wireless devices like mobile phones.
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in regions (e.g., the USA) where it's impossible to distinguish between
    /// fixed-line and mobile numbers by looking at the phone number itself.
    FixedLineOrMobile,
    /// **Toll-free numbers.**
    TollFree,
    /// **Premium-rate numbers.**
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// **Voice over IP (VoIP) numbers.**
    Voip,
    /// **Personal numbers.**
    /// A number associated with a person, not a location or device.
    PersonalNumber,
    /// **Pagers.**
    Pager,
    /// **Universal Access Numbers (UAN).**
    Uan,
    /// **Voicemail access numbers.**
    Voicemail,
    /// **Unknown type.**
    /// The number does not match any of the known patterns for its region and its type
    /// cannot be determined.
    Unknown,
}

impl PhoneNumberType {
    /// Integer code of this type. `Unknown` shares `-1` with numbers that
    /// could not be parsed.
    pub fn code(self) -> i32 {
        match self {
            PhoneNumberType::FixedLine => 0,
            PhoneNumberType::Mobile => 1,
            PhoneNumberType::FixedLineOrMobile => 2,
            PhoneNumberType::TollFree => 3,
            PhoneNumberType::PremiumRate => 4,
            PhoneNumberType::SharedCost => 5,
            PhoneNumberType::Voip => 6,
            PhoneNumberType::PersonalNumber => 7,
            PhoneNumberType::Pager => 8,
            PhoneNumberType::Uan => 9,
            PhoneNumberType::Voicemail => 10,
            PhoneNumberType::Unknown => -1,
        }
    }

    /// Symbolic name, e.g. `"FIXED_LINE_OR_MOBILE"`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}
