//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Seeding the RNG from the clock
//! - DOM lookup and repainting (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Run seed from the current time (milliseconds)
#[cfg(target_arch = "wasm32")]
pub fn seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Run seed from the current time (milliseconds)
#[cfg(not(target_arch = "wasm32"))]
pub fn seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
