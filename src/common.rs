// Default URLs
pub static DEFAULT_API_URL: &str = "https://api.processout.com";
pub static DEFAULT_API_VERSION: &str = "1.3.0.0";

// Header names
pub static IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";
pub static API_VERSION_HEADER: &str = "API-Version";

// Environment variables
pub static PROJECT_ID_ENV: &str = "PROCESSOUT_PROJECT_ID";
pub static PROJECT_SECRET_ENV: &str = "PROCESSOUT_PROJECT_SECRET";
