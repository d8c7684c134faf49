/// Atelier system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Context key of the pattern used when a lookup misses.
pub const DEFAULT_CONTEXT_KEY: &str = "modular_systems";

/// Hard caps on list-valued template fields.
pub const MAX_TAGS: usize = 8;
pub const MAX_MODULES: usize = 4;
pub const MAX_MOTION_PRESETS: usize = 3;

/// Bounds on the primary palette.
pub const MIN_PRIMARY_COLORS: usize = 3;
pub const MAX_PRIMARY_COLORS: usize = 5;

/// Number of extracted hex colors kept when extraction succeeds.
pub const EXTRACTED_PALETTE_LEN: usize = 4;

/// Minimum number of modules every template carries.
pub const MIN_MODULES: usize = 2;

/// Summary extraction bounds (characters).
pub const SUMMARY_MIN_FRAGMENT_CHARS: usize = 30;
pub const SUMMARY_MAX_CHARS: usize = 150;
