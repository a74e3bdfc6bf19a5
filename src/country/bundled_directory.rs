use std::collections::HashMap;

use log::trace;

use super::{CallingCodeTable, CountryRecord};
use crate::{
    interfaces::CountryDirectory,
    phonefacade::errors::{CountryDataError, ResourceError},
};

/// Country data compiled into the library.
const BUNDLED_COUNTRIES: &str = include_str!("../../resources/countries.json");

/// [`CountryDirectory`] backed by an in-memory list of countries. Everything
/// is built once in the constructor and read-only afterwards.
#[derive(Debug, Clone)]
pub struct BundledCountryDirectory {
    countries: Vec<CountryRecord>,
    /// Lower cased ISO2 code to index in `countries`.
    by_iso2: HashMap<String, usize>,
    calling_codes: CallingCodeTable,
}

impl BundledCountryDirectory {
    /// Loads the country list shipped with the crate.
    pub fn load() -> Result<Self, ResourceError> {
        Self::from_json(BUNDLED_COUNTRIES)
    }

    /// Loads a country list in the bundled format: a json array of
    /// `{ "name", "iso2", "dialCode", "priority", "areaCodes" }` objects.
    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        let countries: Vec<CountryRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(countries)?)
    }

    pub fn from_records(countries: Vec<CountryRecord>) -> Result<Self, CountryDataError> {
        let calling_codes = CallingCodeTable::from_records(&countries)?;
        let mut by_iso2 = HashMap::with_capacity(countries.len());
        for (index, country) in countries.iter().enumerate() {
            let key = country.iso2().to_ascii_lowercase();
            if by_iso2.insert(key, index).is_some() {
                return Err(CountryDataError::DuplicateIso2(country.iso2().to_owned()));
            }
        }
        trace!("Loaded {} countries", countries.len());
        Ok(Self { countries, by_iso2, calling_codes })
    }
}

impl CountryDirectory for BundledCountryDirectory {
    fn get_all(&self) -> &[CountryRecord] {
        &self.countries
    }

    fn get_country_codes(&self) -> &CallingCodeTable {
        &self.calling_codes
    }

    fn get_country_data_by_code(&self, iso2: &str) -> Option<&CountryRecord> {
        self.by_iso2
            .get(&iso2.trim().to_ascii_lowercase())
            .map(|&index| &self.countries[index])
    }
}
