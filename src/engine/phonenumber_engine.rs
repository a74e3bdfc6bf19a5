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

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    str::FromStr,
};

use log::{trace, warn};
use phonenumber::{country, metadata::DATABASE, Mode, PhoneNumber, Type};

use super::as_you_type::AsYouTypeFormatter;
use crate::{
    i18n::RegionCode,
    interfaces::{IncrementalFormatter, NumberEngine},
    phonefacade::{errors::ParseFailure, helper_types::ParsedNumber},
    PhoneNumberType,
};

/// [`NumberEngine`] backed by the `phonenumber` crate and its compiled-in
/// copy of libphonenumber's metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneNumberEngine;

impl PhoneNumberEngine {
    pub fn new() -> Self {
        Self
    }

    /// Resolves an ISO2 hint to the engine's region id. An empty hint means
    /// "no default region".
    pub(crate) fn region_id(iso_hint: Option<&str>) -> Result<Option<country::Id>, ParseFailure> {
        match RegionCode::normalize(iso_hint) {
            None => Ok(None),
            Some(code) => country::Id::from_str(&code)
                .map(Some)
                .map_err(|_| ParseFailure::UnknownRegion(code)),
        }
    }

    /// Parses with the engine. Panics raised inside the engine are turned into
    /// [`ParseFailure::Engine`].
    pub(crate) fn parse_number(
        &self,
        raw: &str,
        region: Option<country::Id>,
    ) -> Result<PhoneNumber, ParseFailure> {
        guarded(|| phonenumber::parse(region, raw))?
            .map_err(|err| ParseFailure::Malformed(err.to_string()))
    }
}

impl NumberEngine for PhoneNumberEngine {
    fn parse(&self, raw: &str, iso_hint: Option<&str>) -> Result<ParsedNumber, ParseFailure> {
        let region = Self::region_id(iso_hint)?;
        let number = self.parse_number(raw, region)?;
        let parsed = guarded(|| to_parsed_number(&number))?;
        trace!(
            "Parsed '{}' (hint {:?}) as {} valid={}",
            raw,
            iso_hint,
            parsed.international(),
            parsed.is_valid()
        );
        Ok(parsed)
    }

    fn as_you_type<'a>(&'a self, iso2: &str) -> Box<dyn IncrementalFormatter + 'a> {
        let region = Self::region_id(Some(iso2)).unwrap_or_else(|err| {
            warn!("{}; formatting without a default region", err);
            None
        });
        Box::new(AsYouTypeFormatter::new(self, region))
    }
}

/// Runs `f` and converts a panic into [`ParseFailure::Engine`].
pub(crate) fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, ParseFailure> {
    // Catch panics because the phonenumber crate has some questionable unwraps
    panic::catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| ParseFailure::Engine(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

fn to_parsed_number(number: &PhoneNumber) -> ParsedNumber {
    let region = number.country().id().map(|id| format!("{:?}", id));
    ParsedNumber::new(
        phonenumber::is_valid(number),
        number.format().mode(Mode::E164).to_string(),
        number.format().mode(Mode::National).to_string(),
        classify(number.number_type(&DATABASE)).code(),
        number.code().value(),
        region,
    )
}

fn classify(number_type: Type) -> PhoneNumberType {
    match number_type {
        Type::FixedLine => PhoneNumberType::FixedLine,
        Type::Mobile => PhoneNumberType::Mobile,
        Type::FixedLineOrMobile => PhoneNumberType::FixedLineOrMobile,
        Type::TollFree => PhoneNumberType::TollFree,
        Type::PremiumRate => PhoneNumberType::PremiumRate,
        Type::SharedCost => PhoneNumberType::SharedCost,
        Type::Voip => PhoneNumberType::Voip,
        Type::PersonalNumber => PhoneNumberType::PersonalNumber,
        Type::Pager => PhoneNumberType::Pager,
        Type::Uan => PhoneNumberType::Uan,
        Type::Voicemail => PhoneNumberType::Voicemail,
        // short codes, emergency numbers etc. have no code in the type table
        _ => PhoneNumberType::Unknown,
    }
}
