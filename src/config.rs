#[cfg(debug_assertions)]
pub fn site_origin() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn site_origin() -> &'static str {
    "https://www.trembachlawfirm.com"
}

pub const FIRM_NAME: &str = "Trembach Law Firm";

pub const PHONE_DISPLAY: &str = "(818) 123-4567";
pub const PHONE_DIGITS: &str = "8181234567";

pub const INTAKE_EMAIL: &str = "info@trembachlawfirm.com";
pub const CONFIDENTIAL_EMAIL: &str = "confidential@trembachlawfirm.com";
