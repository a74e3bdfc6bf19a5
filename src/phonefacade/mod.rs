pub(crate) mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonefacade;
pub(crate) mod helper_types;

pub use enums::PhoneNumberType;
pub use errors::{CountryDataError, ParseFailure, ResourceError};
pub use helper_types::ParsedNumber;
pub use phonefacade::{PhoneFacade, PhoneFacadeBuilder};
