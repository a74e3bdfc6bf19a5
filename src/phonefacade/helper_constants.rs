/// Only numbers starting with this sign are scanned for a dial code.
pub const PLUS_SIGN: char = '+';

/// The maximum length of a calling code key, area code included
/// (e.g. "1204" for Manitoba). The scanner never looks further.
pub const MAX_LENGTH_CALLING_CODE_KEY: usize = 4;

/// Highest priority a country may have under one calling code key. Keeps
/// the per key region list small whatever the data says.
pub const MAX_PRIORITY: usize = 99;

/// Type code reported by [`crate::PhoneFacade::get_number_type`] when the
/// number could not be parsed at all.
pub const UNPARSED_TYPE_CODE: i32 = -1;
