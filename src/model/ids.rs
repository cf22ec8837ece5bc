//! Entity id generation.
//!
//! Ids are `{prefix}-{timestamp}[-{sequence}]` strings. The sequence suffix
//! only appears when two ids are generated within the same millisecond, so
//! ids stay short in the common case. Ids are never reused or renumbered.

use chrono::Utc;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Last issued (timestamp, sequence) pair, shared process-wide.
static LAST_ISSUED: Lazy<Mutex<(i64, u64)>> = Lazy::new(|| Mutex::new((0, 0)));

/// Generate a fresh entity id with the given prefix.
///
/// The timestamp component is milliseconds since the Unix epoch; a
/// monotonically increasing sequence disambiguates same-millisecond calls.
pub fn generate_id(prefix: &str) -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUED.lock();

    if last.0 == now {
        last.1 += 1;
        format!("{prefix}-{now}-{}", last.1)
    } else {
        *last = (now, 0);
        format!("{prefix}-{now}")
    }
}
