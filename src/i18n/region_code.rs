pub struct RegionCode {
}

impl RegionCode {
    /// Upper cases a region hint and drops empty ones, e.g. `Some("us")`
    /// becomes `Some("US")` and `Some("")` becomes `None`.
    pub fn normalize(iso2: Option<&str>) -> Option<String> {
        iso2.map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_ascii_uppercase)
    }

    /// Regional indicator emoji for a two letter code, `None` for anything
    /// else.
    pub fn flag(iso2: &str) -> Option<String> {
        if iso2.len() != 2 || !iso2.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        iso2.chars()
            .map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
            .collect()
    }
}
