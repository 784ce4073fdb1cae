use std::io::Write;

use super::*;
use crate::error::Rejection;
use crate::value::UciOption;

fn engine_options() -> OptionsMap {
	let mut map = OptionsMap::new();
	map.register("Hash", UciOption::integer_range(16, 1, 1024));
	map.register("Ponder", UciOption::boolean(false));
	map.register("SyzygyPath", UciOption::string("<empty>"));
	map.register("Clear Hash", UciOption::trigger());
	map
}

#[test]
fn applies_typed_toml_values() {
	let preset = Preset::from_toml(
		r#"
		[options]
		hash = 256
		Ponder = true
		SyzygyPath = "/srv/syzygy"
		"Clear Hash" = ""
		"#,
	)
	.unwrap();
	let mut map = engine_options();

	let report = preset.apply(&mut map);

	assert!(report.is_clean(), "{:?}", report.errors);
	assert_eq!(report.applied, vec!["hash", "Ponder", "SyzygyPath", "Clear Hash"]);
	assert_eq!(map.get("Hash").unwrap().as_int(), 256);
	assert!(map.get("Ponder").unwrap().as_bool());
	assert_eq!(map.get("SyzygyPath").unwrap().as_str(), "/srv/syzygy");
}

#[test]
fn bad_entries_do_not_block_good_ones() {
	let preset = Preset::from_toml(
		r#"
		[options]
		Hash = 4096
		Ponder = "yes"
		Threads = 8
		SyzygyPath = 1.5
		"#,
	)
	.unwrap();
	let mut map = engine_options();
	map.register("Threads", UciOption::integer_range(1, 1, 512));

	let report = preset.apply(&mut map);

	assert_eq!(report.applied, vec!["Threads"]);
	assert_eq!(
		report.errors,
		vec![
			EntryError::Option(OptionError::Rejected {
				name: "Hash".into(),
				reason: Rejection::OutOfRange {
					value: 4096,
					min: 1,
					max: 1024,
				},
			}),
			EntryError::Option(OptionError::Rejected {
				name: "Ponder".into(),
				reason: Rejection::NotBoolean("yes".into()),
			}),
			EntryError::Unsupported {
				name: "SyzygyPath".into(),
				kind: "float",
			},
		]
	);
	assert_eq!(map.get("Hash").unwrap().as_int(), 16);
	assert_eq!(map.get("Threads").unwrap().as_int(), 8);
}

#[test]
fn unsupported_types_name_the_entry() {
	let preset = Preset::from_toml("[options]\nPonder = [true]\n").unwrap();
	let mut map = engine_options();

	let report = preset.apply(&mut map);

	assert_eq!(report.errors.len(), 1);
	assert_eq!(report.errors[0].name(), "Ponder");
	assert_eq!(
		report.errors[0].to_string(),
		"unsupported value type for option 'Ponder': array"
	);
	assert!(!map.get("Ponder").unwrap().as_bool());
}

#[test]
fn unknown_names_are_reported() {
	let preset = Preset::from_toml("[options]\nHsah = 32\n").unwrap();
	let mut map = engine_options();

	let report = preset.apply(&mut map);

	assert!(report.applied.is_empty());
	assert_eq!(
		report.errors,
		vec![EntryError::Option(OptionError::Unknown {
			name: "Hsah".into(),
			suggestion: Some("Hash".into()),
		})]
	);
}

#[test]
fn empty_document_is_an_empty_preset() {
	let preset = Preset::from_toml("").unwrap();
	assert!(preset.is_empty());
	assert!(preset.apply(&mut engine_options()).is_clean());
}

#[test]
fn rejects_unknown_sections_and_bad_syntax() {
	assert!(matches!(
		Preset::from_toml("[engine]\nHash = 1\n"),
		Err(PresetError::Parse(_))
	));
	assert!(matches!(
		Preset::from_toml("[options\nHash = 1"),
		Err(PresetError::Parse(_))
	));
}

#[test]
fn loads_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[options]\nHash = 64").unwrap();

	let preset = Preset::load(file.path()).unwrap();
	assert_eq!(preset.len(), 1);

	let mut map = engine_options();
	preset.apply(&mut map);
	assert_eq!(map.get("Hash").unwrap().as_int(), 64);
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");

	let err = Preset::load(&path).unwrap_err();

	assert!(matches!(&err, PresetError::Io { path: p, .. } if *p == path));
	assert!(err.to_string().starts_with("I/O error reading"));
}
