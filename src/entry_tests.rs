use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rstest::rstest;

use super::{DEFAULT_SOURCE, Entry};
use crate::error::ClientError;
use crate::level::{EntryType, Level};

#[rstest]
fn new_populates_defaults() {
    let before = SystemTime::now();
    let entry = Entry::new("hello").expect("create entry");
    assert!(!entry.id().is_empty());
    assert_eq!(entry.message(), "hello");
    assert_eq!(entry.source(), DEFAULT_SOURCE);
    assert_eq!(entry.level(), Level::Info);
    assert_eq!(entry.entry_type(), EntryType::Log);
    assert!(entry.labels().is_empty());
    let now = SystemTime::now();
    assert!(entry.timestamp() <= now, "timestamp is in the future");
    assert!(
        entry.timestamp() >= before - Duration::from_secs(5),
        "timestamp is too far in the past"
    );
}

#[rstest]
fn new_rejects_empty_message() {
    let err = Entry::new("").expect_err("empty message must fail");
    assert!(matches!(err, ClientError::InvalidParameter(_)));
}

#[rstest]
fn ids_are_unique_per_entry() {
    let a = Entry::new("a").expect("create entry");
    let b = Entry::new("b").expect("create entry");
    assert_ne!(a.id(), b.id());
}

#[rstest]
fn setters_replace_fields() {
    let mut entry = Entry::new("message").expect("create entry");
    entry.set_level(Level::Error);
    entry.set_type(EntryType::Metric);
    entry.set_source("test-suite");
    assert_eq!(entry.level(), Level::Error);
    assert_eq!(entry.entry_type(), EntryType::Metric);
    assert_eq!(entry.source(), "test-suite");
}

#[rstest]
fn set_source_accepts_any_string() {
    let mut entry = Entry::new("message").expect("create entry");
    entry.set_source("");
    assert_eq!(entry.source(), "", "empty sources are stored verbatim");
}

#[rstest]
fn set_timestamp_overwrites_unconditionally() {
    let mut entry = Entry::new("message").expect("create entry");
    let epoch = UNIX_EPOCH;
    entry.set_timestamp(epoch);
    assert_eq!(entry.timestamp(), epoch);
}

#[rstest]
fn add_label_is_append_only() {
    let mut entry = Entry::new("message").expect("create entry");
    entry.add_label("key", "first");
    entry.add_label("key", "second");
    assert_eq!(
        entry.labels(),
        &[
            ("key".to_owned(), "first".to_owned()),
            ("key".to_owned(), "second".to_owned()),
        ],
        "duplicate keys are appended, not merged"
    );
}

#[rstest]
#[case(0, Level::Emergency)]
#[case(3, Level::Error)]
#[case(7, Level::Debug)]
fn level_from_numeric(#[case] raw: u8, #[case] expected: Level) {
    assert_eq!(Level::try_from(raw).expect("in-range level"), expected);
    assert_eq!(expected.as_u8(), raw);
}

#[rstest]
fn level_rejects_out_of_range() {
    let err = Level::try_from(8).expect_err("out-of-range level must fail");
    assert!(matches!(err, ClientError::InvalidParameter(_)));
}

#[rstest]
#[case(1, EntryType::Log)]
#[case(2, EntryType::Metric)]
#[case(5, EntryType::Audit)]
fn entry_type_from_numeric(#[case] raw: u8, #[case] expected: EntryType) {
    assert_eq!(EntryType::try_from(raw).expect("in-range type"), expected);
    assert_eq!(expected.as_u8(), raw);
}

#[rstest]
#[case(0)]
#[case(6)]
fn entry_type_rejects_out_of_range(#[case] raw: u8) {
    let err = EntryType::try_from(raw).expect_err("out-of-range type must fail");
    assert!(matches!(err, ClientError::InvalidParameter(_)));
}

#[rstest]
fn failed_numeric_conversion_leaves_entry_unchanged() {
    let mut entry = Entry::new("message").expect("create entry");
    entry.set_level(Level::Warning);
    if let Ok(level) = Level::try_from(42) {
        entry.set_level(level);
    }
    assert_eq!(entry.level(), Level::Warning);
}

#[rstest]
fn level_parses_case_insensitively() {
    assert_eq!("WARNING".parse::<Level>().expect("parse"), Level::Warning);
    assert_eq!("notice".parse::<Level>().expect("parse"), Level::Notice);
    assert!("verbose".parse::<Level>().is_err());
}

#[rstest]
fn entry_type_parses_case_insensitively() {
    assert_eq!("METRIC".parse::<EntryType>().expect("parse"), EntryType::Metric);
    assert_eq!("audit".parse::<EntryType>().expect("parse"), EntryType::Audit);
    assert!("gauge".parse::<EntryType>().is_err());
}

#[rstest]
#[case(Level::Emergency, "emergency")]
#[case(Level::Warning, "warning")]
#[case(Level::Debug, "debug")]
fn levels_display_lowercase_names(#[case] level: Level, #[case] expected: &str) {
    assert_eq!(level.to_string(), expected);
}

#[rstest]
#[case(EntryType::Log, "log")]
#[case(EntryType::Trace, "trace")]
#[case(EntryType::Audit, "audit")]
fn entry_types_display_lowercase_names(#[case] entry_type: EntryType, #[case] expected: &str) {
    assert_eq!(entry_type.to_string(), expected);
}
