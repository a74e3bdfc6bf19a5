use std::collections::BTreeMap;

use crate::phonefacade::errors::ResourceError;

const BUNDLED_NUMBER_TYPES: &str = include_str!("../resources/number_type.json");

/// Symbolic number type name (`"MOBILE"`, `"FIXED_LINE"`...) to the integer
/// code the engine classifies numbers with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberTypeTable {
    types: BTreeMap<String, i32>,
}

impl NumberTypeTable {
    pub fn bundled() -> Result<Self, ResourceError> {
        Self::from_json(BUNDLED_NUMBER_TYPES)
    }

    /// Parses a json object of `"NAME": code` pairs.
    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        let types = serde_json::from_str(json)?;
        Ok(Self { types })
    }

    pub fn code_of(&self, name: &str) -> Option<i32> {
        self.types.get(name).copied()
    }

    /// Name whose code equals `code`. With duplicated codes the
    /// alphabetically first name wins.
    pub fn name_of(&self, code: i32) -> Option<&str> {
        self.types
            .iter()
            .find(|(_, value)| **value == code)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<(String, i32)> for NumberTypeTable {
    fn from_iter<T: IntoIterator<Item = (String, i32)>>(iter: T) -> Self {
        Self { types: iter.into_iter().collect() }
    }
}
