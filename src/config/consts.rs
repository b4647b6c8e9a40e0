// src/config/consts.rs

// Currency
pub const DEFAULT_JPY_TO_TWD_RATE: f64 = 0.20;

// Vendor fingerprints (substring of the raw document)
pub const OKURAYA_FINGERPRINT: &str = "okuraya-kanekiya.com";
pub const HACHIYOH_FINGERPRINT: &str = "hachiyoh.co.jp";

// Format A lookahead, in line nodes, counted from the drink_content boundary
pub const LOOKAHEAD: usize = 20;

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "report";
