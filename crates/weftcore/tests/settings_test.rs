use weftcore::{Settings, SettingsEntry, SettingsError};

#[test]
fn test_scalar_entries_round_trip() {
    let mut settings = Settings::new();
    settings.set_bool("flag", true);
    settings.set_int("count", -7);
    settings.set_long("offset", 4_000_000_000);
    settings.set_double("ratio", 0.25);
    settings.set_string("label", "hello");

    assert!(settings.get_bool("flag").unwrap());
    assert_eq!(settings.get_int("count").unwrap(), -7);
    assert_eq!(settings.get_long("offset").unwrap(), 4_000_000_000);
    assert_eq!(settings.get_double("ratio").unwrap(), 0.25);
    assert_eq!(settings.get_string("label").unwrap(), "hello");
}

#[test]
fn test_array_entries_round_trip() {
    let mut settings = Settings::new();
    settings.set_bool_array("flags", vec![true, false]);
    settings.set_int_array("counts", vec![1, 2, 3]);
    settings.set_long_array("offsets", vec![-1, 0, 1]);
    settings.set_double_array("ratios", vec![0.5, 1.5]);
    settings.set_string_array("labels", vec!["a".to_string(), "b".to_string()]);

    assert_eq!(settings.get_bool_array("flags").unwrap(), &[true, false]);
    assert_eq!(settings.get_int_array("counts").unwrap(), &[1, 2, 3]);
    assert_eq!(settings.get_long_array("offsets").unwrap(), &[-1, 0, 1]);
    assert_eq!(settings.get_double_array("ratios").unwrap(), &[0.5, 1.5]);
    assert_eq!(
        settings.get_string_array("labels").unwrap(),
        &["a".to_string(), "b".to_string()]
    );
}

#[test]
fn test_nested_tree_entries() {
    let mut inner = Settings::new();
    inner.set_string("name", "db");

    let mut outer = Settings::new();
    outer.set_tree("connection", inner.clone());

    assert_eq!(outer.get_tree("connection").unwrap(), &inner);
    assert_eq!(
        outer.get_tree("connection").unwrap().get_string("name").unwrap(),
        "db"
    );
}

#[test]
fn test_missing_key_is_reported_with_the_key() {
    let settings = Settings::new();

    let err = settings.get_int("absent").unwrap_err();
    assert_eq!(err, SettingsError::MissingKey("absent".to_string()));
}

#[test]
fn test_wrong_kind_is_reported_with_both_kinds() {
    let mut settings = Settings::new();
    settings.set_string("count", "three");

    let err = settings.get_int("count").unwrap_err();
    assert_eq!(
        err,
        SettingsError::WrongKind {
            key: "count".to_string(),
            expected: "int",
            actual: "string",
        }
    );
}

#[test]
fn test_set_replaces_existing_entry() {
    let mut settings = Settings::new();
    settings.set_int("x", 1);
    settings.set_int("x", 2);

    assert_eq!(settings.len(), 1);
    assert_eq!(settings.get_int("x").unwrap(), 2);
}

#[test]
fn test_keys_keep_insertion_order() {
    let mut settings = Settings::new();
    settings.set_int("z", 1);
    settings.set_int("a", 2);
    settings.set_int("m", 3);

    let keys: Vec<&str> = settings.keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_raw_entry_access() {
    let mut settings = Settings::new();
    settings.set("flag", SettingsEntry::Bool(false));

    assert!(settings.contains_key("flag"));
    assert_eq!(settings.get("flag"), Some(&SettingsEntry::Bool(false)));
    assert_eq!(settings.get("other"), None);
}

#[test]
fn test_json_round_trip_preserves_entries_and_order() {
    let mut inner = Settings::new();
    inner.set_string("login", "alice");

    let mut settings = Settings::new();
    settings.set_string("class", "STRING");
    settings.set_double("ratio", 0.125);
    settings.set_int_array("ids", vec![4, 5]);
    settings.set_tree("sub", inner);

    let json = serde_json::to_string(&settings).unwrap();
    let restored: Settings = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, settings);
    let keys: Vec<&str> = restored.keys().collect();
    assert_eq!(keys, vec!["class", "ratio", "ids", "sub"]);
}

#[test]
fn test_empty_settings() {
    let settings = Settings::new();
    assert!(settings.is_empty());
    assert_eq!(settings.len(), 0);
    assert_eq!(settings.keys().count(), 0);
}
