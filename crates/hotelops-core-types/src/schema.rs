//! Field keys and event names of operation log events
//!
//! The operation macros write these and the test capture layer reads them
//! back by the same names.

/// Module that emitted the event
pub const FIELD_COMPONENT: &str = "component";
/// Menu operation name (`add_booking`, `available_rooms`, ...)
pub const FIELD_OP: &str = "op";
/// One of the `EVENT_*` names below
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
/// Per-command correlation id
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Every field key above, for lookups that must not miss one
pub const ALL_FIELDS: [&str; 7] = [
    FIELD_COMPONENT,
    FIELD_OP,
    FIELD_EVENT,
    FIELD_DURATION_MS,
    FIELD_REQUEST_ID,
    FIELD_ERR_KIND,
    FIELD_ERR_CODE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_keys_are_unique() {
        let unique: HashSet<_> = ALL_FIELDS.iter().collect();
        assert_eq!(unique.len(), ALL_FIELDS.len());
    }

    #[test]
    fn test_field_keys_are_plain_identifiers() {
        // tracing field names in the macros are written as bare identifiers
        for key in ALL_FIELDS {
            assert!(key.chars().all(|c| c.is_ascii_lowercase() || c == '_'), "{}", key);
        }
    }

    #[test]
    fn test_event_names_are_distinct() {
        let events: HashSet<_> = [EVENT_START, EVENT_END, EVENT_END_ERROR].into_iter().collect();
        assert_eq!(events.len(), 3);
    }
}
