mod bundled_directory;
mod calling_code_table;
mod country_record;

pub use bundled_directory::BundledCountryDirectory;
pub use calling_code_table::CallingCodeTable;
pub use country_record::CountryRecord;
