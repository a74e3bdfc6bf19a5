use serde::Deserialize;

use crate::i18n::RegionCode;

/// Static metadata of a single country or territory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    name: String,
    iso2: String,
    dial_code: String,
    /// Position of this country in the list of countries sharing
    /// `dial_code`, 0 being the main one (US for "1", GB for "44").
    #[serde(default)]
    priority: usize,
    /// NANPA style area codes that identify this country on their own,
    /// e.g. Canada's "204".
    #[serde(default)]
    area_codes: Option<Vec<String>>,
}

impl CountryRecord {
    pub fn new(
        name: impl Into<String>,
        iso2: impl Into<String>,
        dial_code: impl Into<String>,
        priority: usize,
        area_codes: Option<Vec<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            iso2: iso2.into(),
            dial_code: dial_code.into(),
            priority,
            area_codes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iso2(&self) -> &str {
        &self.iso2
    }

    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    pub fn priority(&self) -> usize {
        self.priority
    }

    pub fn area_codes(&self) -> &[String] {
        self.area_codes.as_deref().unwrap_or_default()
    }

    pub fn flag(&self) -> Option<String> {
        RegionCode::flag(&self.iso2)
    }
}
