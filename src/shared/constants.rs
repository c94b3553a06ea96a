/// localStorage key holding the bearer token for the current session
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Application name used in share messages
pub const APP_NAME: &str = "Kurasi Map";

/// Tweet composer used when the Web Share API is unavailable
pub const TWITTER_INTENT_URL: &str = "https://twitter.com/intent/tweet";

// =============================================================================
// API PAGING
// =============================================================================

/// Default number of locations per page
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Maximum page size the API accepts
pub const MAX_PAGE_SIZE: i64 = 100;
