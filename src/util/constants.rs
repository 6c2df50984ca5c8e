// HookLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "HookLog";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "HookLog";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend API
// =============================================================================

/// Default backend base URL (no trailing slash).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Path of the paginated webhook log endpoint, appended to the base URL.
pub const DEFAULT_WEBHOOK_ENDPOINT: &str = "/admin/payment-transactions/webhooks";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "HOOKLOG_TOKEN";

/// Query parameter carrying the gateway filter.
pub const FILTER_QUERY_PARAM: &str = "gateway";

/// Records requested per page.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Smallest configurable page size.
pub const MIN_PER_PAGE: u32 = 1;

/// Largest configurable page size. The backend caps pages well below this.
pub const MAX_PER_PAGE: u32 = 500;

/// HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum configurable request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum configurable request timeout (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Gateways offered in the filter bar when `[filter] gateways` is not set.
pub const DEFAULT_GATEWAYS: &[&str] = &["razorpay", "payu", "phonepe", "cashfree"];

/// Maximum number of gateway choices accepted from config.
pub const MAX_GATEWAYS: usize = 32;

// =============================================================================
// Status classification
// =============================================================================

/// Status strings rendered as a successful outcome.
pub const POSITIVE_STATUSES: &[&str] = &["paid", "success", "completed"];

/// Status strings rendered as a failed outcome.
pub const NEGATIVE_STATUSES: &[&str] = &["failed", "cancelled"];

// =============================================================================
// UI
// =============================================================================

/// Display format for record timestamps.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%b %d, %Y %H:%M:%S";

/// Placeholder shown for absent optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Repaint interval while a request is in flight (ms).
pub const FETCH_POLL_INTERVAL_MS: u64 = 100;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
