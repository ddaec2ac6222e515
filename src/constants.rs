pub const APP_NAME: &str = "Zoo Companion";
pub const APP_DIR_NAME: &str = "zoo-companion";
pub const CONFIG_FILE: &str = ".zoo-companion.json";
pub const SCAN_SEED_ENV: &str = "ZOO_SCAN_SEED";

pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2500;
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
pub const DEFAULT_SCAN_SEED: u64 = 42;

/// Ticks a simulated scan runs before an animal is identified.
pub const SCAN_TICKS: u8 = 12;

/// Seconds a success/info notification stays on screen.
pub const NOTIFICATION_TTL_SECS: u64 = 5;

/// Animals saved for a fresh session.
pub const SEED_SAVED_ANIMALS: [&str; 2] = ["lion", "penguin"];
