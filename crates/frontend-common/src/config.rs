//! Frontend configuration

/// Backend and browser-storage configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Backend origin used when `ALSHIFA_API_URL` is not set at build time
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    /// Local storage key holding the raw access token
    pub const TOKEN_KEY: &'static str = "token";

    /// Local storage key holding the raw role string
    pub const ROLE_KEY: &'static str = "role";

    /// How long transient success notices stay on screen
    pub const NOTICE_TIMEOUT_MS: u32 = 3_000;

    /// Backend origin, fixed at build time
    pub fn base_url() -> &'static str {
        option_env!("ALSHIFA_API_URL").unwrap_or(Self::DEFAULT_BASE_URL)
    }
}

/// Values the signup form offers
pub struct SignupConfig;

impl SignupConfig {
    pub const DEFAULT_SPECIALIZATION: &'static str = "General Dentist";

    /// Placeholder sent until document upload is wired to storage
    pub const PENDING_DOCUMENT: &'static str = "pending_upload";

    pub const HOSPITALS: &'static [&'static str] = &[
        "Al-Shifa Main Center",
        "Al-Shifa Banjara Hills",
        "Al-Shifa Gachibowli",
        "Al-Shifa Secunderabad",
    ];

    pub const SPECIALIZATIONS: &'static [&'static str] = &[
        "General Dentist",
        "Orthodontist",
        "Endodontist",
        "Periodontist",
        "Prosthodontist",
        "Oral Surgeon",
        "Pediatric Dentist",
    ];
}
