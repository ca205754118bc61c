pub const PASSCODE_HEADER: &str = "Passcode";

pub const MAX_USERNAME_LENGTH: usize = 32;
pub const FALLBACK_USERNAME: &str = "Player";
pub const DEFAULT_ISSUING_COUNTRY: &str = "USA";

/// Countries offered on the login form, by alpha-3 code.
pub const SUPPORTED_COUNTRIES: [(&str, &str); 7] = [
    ("USA", "United States"),
    ("GBR", "United Kingdom"),
    ("DEU", "Germany"),
    ("FRA", "France"),
    ("JPN", "Japan"),
    ("CAN", "Canada"),
    ("AUS", "Australia"),
];
