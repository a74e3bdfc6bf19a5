use crate::{
    country::{CallingCodeTable, CountryRecord},
    phonefacade::{errors::ParseFailure, helper_types::ParsedNumber},
};

/// Country metadata API used to isolate the facade from where country data
/// comes from, so a different data set can be swapped in easily.
pub trait CountryDirectory: Send + Sync {
    /// Every known country, in directory order.
    fn get_all(&self) -> &[CountryRecord];

    /// Calling code (area code included where the data has one) to the
    /// ordered list of ISO2 codes sharing it.
    fn get_country_codes(&self) -> &CallingCodeTable;

    /// Case-insensitive lookup by ISO2 code.
    fn get_country_data_by_code(&self, iso2: &str) -> Option<&CountryRecord>;
}

/// Phone number grammar API. The facade never parses numbers itself, it only
/// pre and post processes around an implementation of this trait.
pub trait NumberEngine: Send + Sync {
    /// Parses `raw` using `iso_hint` (ISO2, any case) as the default region
    /// for numbers written without a calling code.
    fn parse(&self, raw: &str, iso_hint: Option<&str>) -> Result<ParsedNumber, ParseFailure>;

    /// Creates a fresh incremental formatter for the given region.
    fn as_you_type<'a>(&'a self, iso2: &str) -> Box<dyn IncrementalFormatter + 'a>;
}

/// "As you type" formatter. Every call returns the formatted echo of all
/// input received so far.
pub trait IncrementalFormatter {
    fn input_digit(&mut self, c: char) -> String;

    fn input(&mut self, text: &str) -> String {
        let mut formatted = String::new();
        for c in text.chars() {
            formatted = self.input_digit(c);
        }
        formatted
    }

    fn clear(&mut self);
}
