// Single source of truth for all default values.

// --- Memory service ---
pub const DEFAULT_MEMORY_BASE_URL: &str = "http://localhost:8765";
pub const DEFAULT_MEMORY_SEARCH_PATH: &str = "/api/memory/search";
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

// --- Pipeline ---
pub const DEFAULT_LIMIT: usize = 6;
pub const DEFAULT_MAX_LIMIT: usize = 48;
pub const DEFAULT_OVERFETCH_FACTOR: usize = 2;

// --- Synthesis ---
pub const DEFAULT_SYNTHETIC_SCORE_MIN: f64 = 0.6;
pub const DEFAULT_SYNTHETIC_SCORE_MAX: f64 = 0.8;
pub const DEFAULT_DETERMINISTIC_NAMES: bool = false;

// --- Fallback ---
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.6;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
