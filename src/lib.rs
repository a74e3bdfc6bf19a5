mod interfaces;
mod country;
mod engine;
mod number_type;
mod phonefacade;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use country::{BundledCountryDirectory, CallingCodeTable, CountryRecord};
pub use engine::{AsYouTypeFormatter, PhoneNumberEngine};
pub use interfaces::{CountryDirectory, IncrementalFormatter, NumberEngine};
pub use number_type::NumberTypeTable;
pub use phonefacade::{
    CountryDataError, ParseFailure, ParsedNumber, PhoneFacade, PhoneFacadeBuilder,
    PhoneNumberType, ResourceError,
};
