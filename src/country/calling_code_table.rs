use std::collections::HashMap;

use log::trace;

use super::CountryRecord;
use crate::phonefacade::{
    errors::CountryDataError,
    helper_constants::{MAX_LENGTH_CALLING_CODE_KEY, MAX_PRIORITY},
};

/// A mapping from a calling code digit string to the ISO2 codes of the
/// countries using it. Note regions under NANPA share the calling code 1 and
/// Russia and Kazakhstan share 7, so every key maps to a list ordered by
/// priority. A list may contain `None` placeholders when the data skips a
/// priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallingCodeTable {
    codes: HashMap<String, Vec<Option<String>>>,
}

impl CallingCodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table the way the country data describes it: every country
    /// under its dial code at its priority, plus every country with area
    /// codes under `dial_code + area_code` at priority 0.
    pub fn from_records(records: &[CountryRecord]) -> Result<Self, CountryDataError> {
        let mut table = Self::new();
        for record in records {
            table.insert(record.dial_code(), record.iso2(), record.priority())?;
            for area_code in record.area_codes() {
                let key = fast_cat::concat_str!(record.dial_code(), area_code.as_str());
                table.insert(&key, record.iso2(), 0)?;
            }
        }
        trace!("Built calling code table with {} keys", table.len());
        Ok(table)
    }

    pub fn insert(
        &mut self,
        key: &str,
        iso2: &str,
        priority: usize,
    ) -> Result<(), CountryDataError> {
        if !is_valid_key(key) {
            return Err(CountryDataError::InvalidCallingCode {
                iso2: iso2.to_owned(),
                key: key.to_owned(),
            });
        }
        if priority > MAX_PRIORITY {
            return Err(CountryDataError::InvalidPriority { iso2: iso2.to_owned(), priority });
        }
        let regions = self.codes.entry(key.to_owned()).or_default();
        if regions.len() <= priority {
            regions.resize(priority + 1, None);
        }
        if regions[priority].is_some() {
            return Err(CountryDataError::DuplicatePriority { key: key.to_owned(), priority });
        }
        regions[priority] = Some(iso2.to_owned());
        Ok(())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.codes.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&[Option<String>]> {
        self.codes.get(key).map(Vec::as_slice)
    }

    /// First non-empty ISO2 code registered under `key`.
    pub fn primary_region(&self, key: &str) -> Option<&str> {
        self.get(key)?
            .iter()
            .flatten()
            .map(String::as_str)
            .find(|iso2| !iso2.is_empty())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<String>])> {
        self.codes.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_LENGTH_CALLING_CODE_KEY
        && key.chars().all(|c| c.is_ascii_digit())
}
