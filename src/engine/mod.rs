mod as_you_type;
mod phonenumber_engine;

pub use as_you_type::AsYouTypeFormatter;
pub use phonenumber_engine::PhoneNumberEngine;
