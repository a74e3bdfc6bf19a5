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

use std::borrow::Cow;

use log::{error, warn};

use super::{
    errors::{ParseFailure, ResourceError},
    helper_constants::UNPARSED_TYPE_CODE,
    helper_functions,
    helper_types::ParsedNumber,
};
use crate::{
    country::{BundledCountryDirectory, CountryRecord},
    engine::PhoneNumberEngine,
    interfaces::{CountryDirectory, NumberEngine},
    number_type::NumberTypeTable,
    string_util::get_numeric,
};

/// Parsing, validation and formatting of phone numbers keyed by ISO2 country
/// code.
///
/// Build it once at start up and share it by reference (or inside an `Arc`),
/// it holds no mutable state and every method is idempotent. None of the
/// convenience methods fail: invalid or unparsable input produces the
/// documented fallback value instead.
pub struct PhoneFacade {
    /// Country names, flags and the calling code table.
    directory: Box<dyn CountryDirectory>,

    /// An API for parsing, validation and formatting.
    engine: Box<dyn NumberEngine>,

    number_types: NumberTypeTable,
}

impl PhoneFacade {
    pub fn new(
        directory: Box<dyn CountryDirectory>,
        engine: Box<dyn NumberEngine>,
        number_types: NumberTypeTable,
    ) -> Self {
        Self { directory, engine, number_types }
    }

    /// Facade over the bundled country data, number type table and the
    /// `phonenumber` engine.
    pub fn bundled() -> Result<Self, ResourceError> {
        Self::builder().build()
    }

    pub fn builder() -> PhoneFacadeBuilder {
        PhoneFacadeBuilder::default()
    }

    pub fn get_all_countries(&self) -> &[CountryRecord] {
        self.directory.get_all()
    }

    pub fn get_country_data_by_code(&self, iso2: &str) -> Option<&CountryRecord> {
        self.directory.get_country_data_by_code(iso2)
    }

    /// Returns the raw leading part of an international number that holds its
    /// dial code, e.g. `"+44"` for `"+44 20 8765 4321"`, or an empty string.
    pub fn get_dial_code<'a>(&self, number: &'a str) -> &'a str {
        helper_functions::get_dial_code(number, self.directory.get_country_codes())
    }

    /// ISO2 code of the country an international number is dialled to, as
    /// stored in the country data (lower case). Empty when unknown.
    pub fn get_country_code_of_number(&self, number: &str) -> &str {
        let numeric = get_numeric(self.get_dial_code(number));
        self.directory
            .get_country_codes()
            .primary_region(&numeric)
            .unwrap_or_default()
    }

    /// Parses `number`, using `iso2` as the default region for numbers that
    /// are not written in international format.
    pub fn parse(&self, number: &str, iso2: Option<&str>) -> Result<ParsedNumber, ParseFailure> {
        self.engine.parse(number, iso2)
    }

    /// Same as [`PhoneFacade::parse`] but logs the failure and returns `None`.
    pub fn try_parse(&self, number: &str, iso2: Option<&str>) -> Option<ParsedNumber> {
        match self.parse(number, iso2) {
            Ok(parsed) => Some(parsed),
            Err(err) if err.is_malformed() => {
                warn!("Could not parse '{}' as a phone number: {}", number, err);
                None
            }
            Err(err) => {
                error!("Unexpected failure while parsing '{}': {}", number, err);
                None
            }
        }
    }

    pub fn is_valid_number(&self, number: &str, iso2: Option<&str>) -> bool {
        self.try_parse(number, iso2)
            .is_some_and(|parsed| parsed.is_valid())
    }

    /// E.164 form of a valid number, `None` otherwise.
    pub fn format_international(&self, number: &str, iso2: Option<&str>) -> Option<String> {
        self.try_parse(number, iso2)
            .filter(ParsedNumber::is_valid)
            .map(|parsed| parsed.international().to_owned())
    }

    /// National form of a valid number. Unlike
    /// [`PhoneFacade::format_international`] an invalid number is returned
    /// unchanged rather than dropped.
    pub fn format_national<'a>(&self, number: &'a str, iso2: Option<&str>) -> Cow<'a, str> {
        match self.try_parse(number, iso2) {
            Some(parsed) if parsed.is_valid() => Cow::Owned(parsed.national().to_owned()),
            _ => Cow::Borrowed(number),
        }
    }

    /// "As you type" formatting. A fresh formatter is fed the whole input on
    /// every call, nothing is remembered between calls.
    ///
    /// Keypad letters count as their digits. Only complete numbers are
    /// grouped: a partial national number is echoed as its digits and a
    /// partial international one is only split after the calling code
    /// (`"+1 650253"`).
    pub fn format(&self, number: &str, iso2: &str) -> String {
        self.engine.as_you_type(iso2).input(number)
    }

    /// Symbolic type name (`"MOBILE"`, `"FIXED_LINE"`...) of the number, or
    /// `None` if it could not be parsed or its type has no name in the number
    /// type table.
    pub fn get_number_type(&self, number: &str, iso2: Option<&str>) -> Option<&str> {
        let type_code = self
            .try_parse(number, iso2)
            .map_or(UNPARSED_TYPE_CODE, |parsed| parsed.type_code());
        self.number_types.name_of(type_code)
    }
}

/// Assembles a [`PhoneFacade`]. Every collaborator that is not provided falls
/// back to the bundled implementation.
#[derive(Default)]
pub struct PhoneFacadeBuilder {
    directory: Option<Box<dyn CountryDirectory>>,
    engine: Option<Box<dyn NumberEngine>>,
    number_types: Option<NumberTypeTable>,
}

impl PhoneFacadeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directory(mut self, directory: impl CountryDirectory + 'static) -> Self {
        self.directory = Some(Box::new(directory));
        self
    }

    pub fn engine(mut self, engine: impl NumberEngine + 'static) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    pub fn number_types(mut self, number_types: NumberTypeTable) -> Self {
        self.number_types = Some(number_types);
        self
    }

    pub fn build(self) -> Result<PhoneFacade, ResourceError> {
        let directory: Box<dyn CountryDirectory> = match self.directory {
            Some(directory) => directory,
            None => Box::new(BundledCountryDirectory::load()?),
        };
        let engine: Box<dyn NumberEngine> = match self.engine {
            Some(engine) => engine,
            None => Box::new(PhoneNumberEngine::new()),
        };
        let number_types = match self.number_types {
            Some(number_types) => number_types,
            None => NumberTypeTable::bundled()?,
        };
        Ok(PhoneFacade::new(directory, engine, number_types))
    }
}
