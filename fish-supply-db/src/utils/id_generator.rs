//! Human-readable identifiers for new records.
//!
//! Keys look like `PID-00008`: an entity prefix and a zero-padded sequence
//! number one past the highest one already in use. Nothing reserves the
//! number, so two callers working from the same snapshot produce the same
//! key and the second insert fails on the primary key.

use chrono::Utc;
use tracing::warn;

/// Minimum number of digits after the prefix.
pub const DEFAULT_SEQUENCE_WIDTH: usize = 5;

/// Returns `prefix` followed by the highest numeric suffix among
/// `existing_ids` sharing that prefix, plus one.
///
/// The result keeps the widest suffix width seen (at least
/// [`DEFAULT_SEQUENCE_WIDTH`]). Ids with another prefix are ignored. If a
/// suffix under `prefix` is not a number, falls back to [`timestamp_id`].
pub fn generate_next_id<I, S>(prefix: &str, existing_ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut highest: u64 = 0;
    let mut width = DEFAULT_SEQUENCE_WIDTH;

    for id in existing_ids {
        let Some(suffix) = id.as_ref().strip_prefix(prefix) else {
            continue;
        };
        let parsed = if suffix.bytes().all(|b| b.is_ascii_digit()) {
            suffix.parse::<u64>().ok()
        } else {
            None
        };
        match parsed {
            Some(number) => {
                highest = highest.max(number);
                width = width.max(suffix.len());
            }
            None => {
                warn!(id = id.as_ref(), prefix, "Unparseable id suffix, using timestamp id");
                return timestamp_id(prefix);
            }
        }
    }

    match highest.checked_add(1) {
        Some(next) => format!("{prefix}{next:0width$}"),
        None => timestamp_id(prefix),
    }
}

/// `prefix` followed by the current UTC time down to milliseconds,
/// e.g. `TID-20240501080000123`.
pub fn timestamp_id(prefix: &str) -> String {
    format!("{prefix}{}", Utc::now().format("%Y%m%d%H%M%S%3f"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_highest() {
        assert_eq!(generate_next_id("PID-", ["PID-00001", "PID-00007"]), "PID-00008");
    }

    #[test]
    fn test_first_id() {
        assert_eq!(generate_next_id("CID-", Vec::<String>::new()), "CID-00001");
    }

    #[test]
    fn test_other_prefixes_are_ignored() {
        let ids = vec!["SID-00042".to_string(), "PID-00003".to_string()];
        assert_eq!(generate_next_id("PID-", &ids), "PID-00004");
    }

    #[test]
    fn test_wider_suffix_is_kept() {
        assert_eq!(generate_next_id("TID-", ["TID-0000099"]), "TID-0000100");
        assert_eq!(generate_next_id("TID-", ["TID-99999"]), "TID-100000");
    }

    #[test]
    fn test_unparseable_suffix_falls_back_to_timestamp() {
        let id = generate_next_id("EID-", ["EID-00001", "EID-temp"]);
        assert!(id.starts_with("EID-"));
        let suffix = &id["EID-".len()..];
        assert_eq!(suffix.len(), 17);
        assert!(suffix.bytes().all(|b| b.is_ascii_digit()));
    }
}
