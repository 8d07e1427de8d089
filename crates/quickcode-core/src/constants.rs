/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const ENCODE_ROUTE_COMPONENT: &str = "encode";
pub const ENCODE_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", ENCODE_ROUTE_COMPONENT);

/// Content type tags accepted by explicit field requests.
pub mod content_type {
    pub const TEXT: &str = "TEXT_TYPE";
    pub const EMAIL: &str = "EMAIL_TYPE";
    pub const PHONE: &str = "PHONE_TYPE";
    pub const SMS: &str = "SMS_TYPE";
    pub const CONTACT: &str = "CONTACT_TYPE";
    pub const LOCATION: &str = "LOCATION_TYPE";
}

/// Field keys of a contact bundle.
pub mod contact_keys {
    pub const NAME: &str = "name";
    pub const POSTAL: &str = "postal";
    pub const URL: &str = "URL_KEY";
    pub const NOTE: &str = "NOTE_KEY";

    /// Every key that may hold a phone number, in precedence order.
    pub const PHONE_KEYS: [&str; 3] = ["phone", "secondary_phone", "tertiary_phone"];

    /// Every key that may hold an email address, in precedence order.
    pub const EMAIL_KEYS: [&str; 3] = ["email", "secondary_email", "tertiary_email"];
}

/// Field keys of a location bundle.
pub mod location_keys {
    pub const LATITUDE: &str = "LAT";
    pub const LONGITUDE: &str = "LONG";
}

/// Prefix that opens every MECARD payload.
pub const MECARD_PREFIX: &str = "MECARD:";

/// Character set designator handed to the barcode writer for wide payloads.
pub const UTF8_CHARSET: &str = "UTF-8";
