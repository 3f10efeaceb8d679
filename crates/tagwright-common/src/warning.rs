//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The parser uses it to report markup it had to repair in lenient mode.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable problem (prints once per unique message).
///
/// Returns `true` when the warning was printed, `false` when an identical
/// warning had already been reported.
///
/// # Example
/// ```
/// use tagwright_common::warning::warn_once;
///
/// let _ = warn_once("HTML Parser", "end tag </p> has no matching start tag");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!(
            "{}",
            format!("[tagwright {component}] ⚠ {message}").yellow()
        );
    }
    should_print
}

/// Clear all recorded warnings (call before processing a new input).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
