//! Wire rendering for log entries.
//!
//! Entries travel as newline-delimited JSON, one object per line, with a
//! fixed field order the agent relies on. The encoder copies message,
//! source, and label text into the output verbatim: **no string escaping is
//! performed**. Embedded quotes or control characters in untrusted text will
//! corrupt the payload, so callers must pre-sanitise such input. This is a
//! documented contract of the wire format, not an oversight.

use std::fmt::Write;
use std::time::UNIX_EPOCH;

use crate::entry::Entry;

/// Render `entry` into a single JSON object.
///
/// Field order is `id`, `message`, `source`, `entry_type`, `level`,
/// `timestamp`, then `shared_secret` when a non-empty secret is supplied,
/// then `labels` when the entry carries at least one. The caller appends the
/// trailing newline when framing the payload for the socket.
pub fn serialise_entry(entry: &Entry, shared_secret: Option<&str>) -> String {
    let timestamp = entry
        .timestamp()
        .duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_secs())
        .unwrap_or_default();

    // Writing into a String cannot fail, so the fmt results are discarded.
    let mut json = String::with_capacity(256);
    let _ = write!(
        json,
        "{{\"id\":\"{}\",\"message\":\"{}\",\"source\":\"{}\",\"entry_type\":{},\"level\":{},\"timestamp\":{}",
        entry.id(),
        entry.message(),
        entry.source(),
        entry.entry_type().as_u8(),
        entry.level().as_u8(),
        timestamp,
    );

    if let Some(secret) = shared_secret.filter(|s| !s.is_empty()) {
        let _ = write!(json, ",\"shared_secret\":\"{secret}\"");
    }

    if !entry.labels().is_empty() {
        json.push_str(",\"labels\":{");
        for (i, (key, value)) in entry.labels().iter().enumerate() {
            if i > 0 {
                json.push(',');
            }
            let _ = write!(json, "\"{key}\":\"{value}\"");
        }
        json.push('}');
    }

    json.push('}');
    json
}
