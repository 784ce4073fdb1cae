use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;

use super::*;

fn counting() -> (Arc<AtomicUsize>, OnChange) {
	let calls = Arc::new(AtomicUsize::new(0));
	let seen = Arc::clone(&calls);
	let on_change = OnChange::new(move |_| {
		seen.fetch_add(1, Ordering::SeqCst);
	});
	(calls, on_change)
}

#[test]
fn construction_sets_current_to_default() {
	let spin = UciOption::integer_range(16, 1, 1024);
	assert_eq!(spin.as_int(), 16);
	assert!(spin.is_default());
	assert_eq!(spin.index(), None);
	assert_eq!(spin.bounds(), Some((1, 1024)));

	let check = UciOption::boolean(true);
	assert!(check.as_bool());
	assert_eq!(check.bounds(), None);

	let string = UciOption::string("<empty>");
	assert_eq!(string.as_str(), "<empty>");
	assert_eq!(string.default_text().as_deref(), Some("<empty>"));

	let button = UciOption::trigger();
	assert_eq!(button.kind(), OptionKind::Trigger);
	assert_eq!(button.default_text(), None);
	assert_eq!(button.current_text(), None);
}

#[test]
fn kind_names() {
	assert_eq!(OptionKind::String.uci_name(), "string");
	assert_eq!(OptionKind::Boolean.uci_name(), "check");
	assert_eq!(OptionKind::Trigger.uci_name(), "button");
	assert_eq!(OptionKind::IntegerRange.to_string(), "spin");
}

#[rstest]
#[case("0", Err(Rejection::OutOfRange { value: 0, min: 1, max: 512 }))]
#[case("1", Ok(1))]
#[case("128", Ok(128))]
#[case("512", Ok(512))]
#[case("513", Err(Rejection::OutOfRange { value: 513, min: 1, max: 512 }))]
#[case("-4", Err(Rejection::OutOfRange { value: -4, min: 1, max: 512 }))]
#[case(" 64", Ok(64))]
#[case("eight", Err(Rejection::NotInteger("eight".into())))]
#[case("1.5", Err(Rejection::NotInteger("1.5".into())))]
#[case("", Err(Rejection::Empty))]
fn spin_accepts_only_in_range_integers(#[case] input: &str, #[case] expected: Result<i64, Rejection>) {
	let (calls, on_change) = counting();
	let mut threads = UciOption::integer_range(4, 1, 512).with_on_change(on_change);

	let result = threads.assign(input).map(|()| threads.as_int());

	assert_eq!(result, expected);
	match expected {
		Ok(value) => {
			assert_eq!(threads.as_int(), value);
			assert_eq!(calls.load(Ordering::SeqCst), 1);
		}
		Err(_) => {
			assert_eq!(threads.as_int(), 4);
			assert_eq!(calls.load(Ordering::SeqCst), 0);
		}
	}
}

#[rstest]
#[case("true", Ok(true))]
#[case("false", Ok(false))]
#[case("maybe", Err(Rejection::NotBoolean("maybe".into())))]
#[case("TRUE", Err(Rejection::NotBoolean("TRUE".into())))]
#[case("1", Err(Rejection::NotBoolean("1".into())))]
#[case("", Err(Rejection::Empty))]
fn check_accepts_only_true_or_false(#[case] input: &str, #[case] expected: Result<bool, Rejection>) {
	let mut ponder = UciOption::boolean(false);
	let result = ponder.assign(input).map(|()| ponder.as_bool());
	assert_eq!(result, expected);
	if expected.is_err() {
		assert!(!ponder.as_bool());
	}
}

#[test]
fn string_rejects_empty_only() {
	let (calls, on_change) = counting();
	let mut path = UciOption::string("<empty>").with_on_change(on_change);

	assert_eq!(path.assign(""), Err(Rejection::Empty));
	assert_eq!(path.as_str(), "<empty>");

	path.assign("/tb/syzygy").unwrap();
	assert_eq!(path.as_str(), "/tb/syzygy");
	assert_eq!(path.current_text().as_deref(), Some("/tb/syzygy"));
	assert_eq!(path.default_text().as_deref(), Some("<empty>"));
	assert!(!path.is_default());
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn trigger_fires_for_any_value() {
	let (calls, on_change) = counting();
	let mut clear = UciOption::trigger().with_on_change(on_change);

	clear.assign("").unwrap();
	clear.assign("anything").unwrap();

	assert_eq!(calls.load(Ordering::SeqCst), 2);
	assert_eq!(clear.value(), &OptionValue::Trigger);
}

#[test]
fn hook_observes_new_value() {
	let seen = Arc::new(AtomicUsize::new(0));
	let sink = Arc::clone(&seen);
	let mut hash = UciOption::integer_range(16, 1, 1024).with_on_change(OnChange::new(move |o| {
		sink.store(o.as_int() as usize, Ordering::SeqCst);
	}));

	hash.assign("256").unwrap();

	assert_eq!(seen.load(Ordering::SeqCst), 256);
}

#[test]
fn assignment_without_hook() {
	let mut contempt = UciOption::integer_range(0, -100, 100);
	contempt.assign("-100").unwrap();
	assert_eq!(contempt.as_int(), -100);
	assert_eq!(contempt.current_text().as_deref(), Some("-100"));
	assert_eq!(contempt.default_text().as_deref(), Some("0"));
}

#[test]
#[should_panic(expected = "option kind mismatch: requested spin, option is check")]
fn reading_wrong_kind_panics() {
	let ponder = UciOption::boolean(false);
	let _ = ponder.as_int();
}

#[test]
#[should_panic(expected = "requested string, option is button")]
fn reading_string_from_button_panics() {
	let _ = UciOption::trigger().as_str();
}

#[test]
#[should_panic(expected = "default 600 outside [1, 512]")]
fn spin_default_must_be_in_bounds() {
	let _ = UciOption::integer_range(600, 1, 512);
}

#[test]
#[should_panic(expected = "default 5 outside [10, 0]")]
fn spin_bounds_must_be_ordered() {
	let _ = UciOption::integer_range(5, 10, 0);
}
