//! Unit tests for torch-core primitives.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink shared with the subscriber.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Captured {
        self.clone()
    }
}

/// Run `f` with a WARN-level subscriber and return what it logged.
fn capture_warnings(f: impl FnOnce()) -> String {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[cfg(test)]
mod roster {
    use crate::{CrossTime, MAX_PEOPLE, PersonId, Roster, TorchError};

    #[test]
    fn sorted_by_name() {
        let roster = Roster::new([("prof", CrossTime(10)), ("me", CrossTime(1)), ("janitor", CrossTime(5))]).unwrap();
        let names: Vec<&str> = roster.ids().map(|id| roster.name(id)).collect();
        assert_eq!(names, ["janitor", "me", "prof"]);
        assert_eq!(roster.time(PersonId(2)), CrossTime(10));
    }

    #[test]
    fn id_lookup() {
        let roster = Roster::new([("b", CrossTime(2)), ("a", CrossTime(1))]).unwrap();
        assert_eq!(roster.id_of("a"), Some(PersonId(0)));
        assert_eq!(roster.id_of("b"), Some(PersonId(1)));
        assert_eq!(roster.id_of("c"), None);
    }

    #[test]
    fn duplicate_name_keeps_later_entry() {
        let mut roster = None;
        let logs = super::capture_warnings(|| {
            roster = Some(Roster::new([("a", CrossTime(1)), ("a", CrossTime(7))]).unwrap());
        });
        let roster = roster.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.time(PersonId(0)), CrossTime(7));
        assert!(logs.contains("duplicate name"), "logs: {logs}");
        assert!(logs.contains("previous=1"), "logs: {logs}");
        assert!(logs.contains("replacement=7"), "logs: {logs}");
    }

    #[test]
    fn unique_names_log_nothing() {
        let logs = super::capture_warnings(|| {
            Roster::new([("a", CrossTime(1)), ("b", CrossTime(7))]).unwrap();
        });
        assert!(logs.is_empty(), "logs: {logs}");
    }

    #[test]
    fn default_roster_is_empty() {
        assert!(Roster::default().is_empty());
        assert!(!Roster::from_args(&["a", "1"]).unwrap().is_empty());
    }

    #[test]
    fn oversized_roster_rejected() {
        let entries = (0..=MAX_PEOPLE).map(|i| (format!("p{i}"), CrossTime(1)));
        let err = Roster::new(entries).unwrap_err();
        assert!(matches!(err, TorchError::TooManyPeople(n) if n == MAX_PEOPLE + 1));
    }

    #[test]
    fn largest_roster_ids_are_all_distinct() {
        let roster = Roster::new((0..MAX_PEOPLE).map(|i| (format!("p{i:05}"), CrossTime(1)))).unwrap();
        assert_eq!(roster.ids().count(), MAX_PEOPLE);
        assert_eq!(roster.ids().last(), Some(PersonId(u16::MAX)));
    }

    #[test]
    fn person_id_conversion_is_checked() {
        assert_eq!(PersonId::try_from(7usize).unwrap(), PersonId(7));
        assert_eq!(PersonId::try_from(7usize).unwrap().index(), 7);
        assert!(PersonId::try_from(MAX_PEOPLE).is_err());
    }

    #[test]
    fn parses_flat_args() {
        let roster = Roster::from_args(&["me", "1", "assistant", "2", "janitor", "5", "prof", "10"]).unwrap();
        assert_eq!(roster.len(), 4);
        let me = roster.id_of("me").unwrap();
        assert_eq!(roster.time(me), CrossTime(1));
    }

    #[test]
    fn empty_args_rejected() {
        let args: [&str; 0] = [];
        assert!(matches!(Roster::from_args(&args), Err(TorchError::EmptyInput)));
    }

    #[test]
    fn odd_arg_count_rejected() {
        let err = Roster::from_args(&["a", "1", "b"]).unwrap_err();
        assert!(matches!(err, TorchError::OddArgumentCount(3)));
        assert_eq!(err.to_string(), "expected name/time pairs but got 3 arguments");
    }

    #[test]
    fn non_numeric_time_rejected() {
        let err = Roster::from_args(&["a", "fast"]).unwrap_err();
        match err {
            TorchError::InvalidTime { name, value, .. } => {
                assert_eq!(name, "a");
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn negative_time_rejected() {
        assert!(matches!(
            Roster::from_args(&["a", "-1"]),
            Err(TorchError::InvalidTime { .. })
        ));
    }
}

#[cfg(test)]
mod side {
    use crate::Side;

    #[test]
    fn flip_is_involution() {
        assert_eq!(Side::Left.flip(), Side::Right);
        assert_eq!(Side::Right.flip().flip(), Side::Right);
    }

    #[test]
    fn default_is_left() {
        assert_eq!(Side::default(), Side::Left);
        assert_eq!(Side::Right.to_string(), "right");
    }
}

#[cfg(test)]
mod time {
    use crate::CrossTime;

    #[test]
    fn pair_cost_is_slower_member() {
        assert_eq!(CrossTime::pair(CrossTime(2), CrossTime(10)), CrossTime(10));
        assert_eq!(CrossTime::pair(CrossTime(5), CrossTime(5)), CrossTime(5));
    }

    #[test]
    fn arithmetic() {
        let mut t = CrossTime(2) + CrossTime(3);
        t += CrossTime(1);
        assert_eq!(t, CrossTime(6));
        let total: CrossTime = [CrossTime(2), CrossTime(1), CrossTime(10)].into_iter().sum();
        assert_eq!(total, CrossTime(13));
        assert_eq!(total.to_string(), "13");
    }
}

#[cfg(test)]
mod config {
    use crate::{SearchConfig, TieBreak};

    #[test]
    fn defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.tie_break, TieBreak::LexicographicSteps);
        assert_eq!(cfg.warn_above, 6);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_support {
    use crate::{CrossTime, Person, Side};

    #[test]
    fn person_json() {
        let p = Person { name: "me".into(), time: CrossTime(1) };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"name":"me","time":1}"#);
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(serde_json::to_string(&Side::Right).unwrap(), r#""Right""#);
    }
}
