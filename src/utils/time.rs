//! Time and timestamp utilities

use chrono::Utc;

/// Get current Unix timestamp in milliseconds
///
/// Millisecond resolution matches the id generation schemes, which embed
/// a creation timestamp for uniqueness.
pub fn timestamp_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
