use weftcore::types::{
    BooleanArrayType, BooleanType, CredentialsType, DoubleArrayType, DoubleType, FsConnectionType,
    IntArrayType, IntType, LongArrayType, LongType, StringArrayType, StringType,
};
use weftcore::{
    Credentials, FlowVariable, FsConnectionHandle, Settings, SettingsError, VariableError,
    VariableTypeRegistry, VariableValue, CFG_CLASS, CFG_VALUE,
};

fn save_and_load(value: &VariableValue) -> VariableValue {
    let mut settings = Settings::new();
    value.save(&mut settings).unwrap();
    VariableTypeRegistry::global().load_value(&settings).unwrap()
}

#[test]
fn test_every_builtin_kind_survives_save_and_load() {
    let values = vec![
        BooleanType.new_value(true),
        BooleanArrayType.new_value(vec![true, false, true]),
        IntType.new_value(-42),
        IntArrayType.new_value(vec![1, 2, 3]),
        LongType.new_value(9_000_000_000),
        LongArrayType.new_value(vec![-9_000_000_000, 9_000_000_000]),
        DoubleType.new_value(0.5),
        DoubleArrayType.new_value(vec![0.25, -1.75]),
        StringType.new_value("hello"),
        StringArrayType.new_value(vec!["a".to_string(), "".to_string()]),
        CredentialsType.new_value(Credentials::new("db", "alice", "s3cret")),
        FsConnectionType.new_value(FsConnectionHandle::new("mountpoint-1")),
    ];

    for value in values {
        let restored = save_and_load(&value);
        assert_eq!(restored, value, "round trip changed {}", value);
    }
}

#[test]
fn test_save_writes_discriminator_and_payload_keys() {
    let mut settings = Settings::new();
    IntType.new_value(7).save(&mut settings).unwrap();

    assert_eq!(settings.get_string(CFG_CLASS).unwrap(), "INTEGER");
    assert_eq!(settings.get_int(CFG_VALUE).unwrap(), 7);
}

#[test]
fn test_credentials_persist_as_a_sub_tree() {
    let mut settings = Settings::new();
    CredentialsType
        .new_value(Credentials::new("db", "alice", "s3cret"))
        .save(&mut settings)
        .unwrap();

    assert_eq!(settings.get_string(CFG_CLASS).unwrap(), "CREDENTIALS");
    let sub = settings.get_tree(CFG_VALUE).unwrap();
    assert_eq!(sub.get_string("name").unwrap(), "db");
    assert_eq!(sub.get_string("login").unwrap(), "alice");
    assert_eq!(sub.get_string("password").unwrap(), "s3cret");
}

#[test]
fn test_fs_connection_persists_only_its_key() {
    let mut settings = Settings::new();
    FsConnectionType
        .new_value(FsConnectionHandle::new("mountpoint-1"))
        .save(&mut settings)
        .unwrap();

    assert_eq!(settings.get_string(CFG_CLASS).unwrap(), "FSCONNECTION");
    assert_eq!(settings.get_string(CFG_VALUE).unwrap(), "mountpoint-1");
}

#[test]
fn test_flow_variable_round_trips_name_and_value() {
    let variable = FlowVariable::new("threshold", DoubleType.new_value(0.75));

    let mut settings = Settings::new();
    variable.save(&mut settings).unwrap();

    let restored = FlowVariable::load(VariableTypeRegistry::global(), &settings).unwrap();
    assert_eq!(restored, variable);
    assert_eq!(restored.name(), "threshold");
    assert_eq!(restored.value().get().as_double(), Some(0.75));
}

#[test]
fn test_load_without_discriminator_is_an_invalid_format() {
    let mut settings = Settings::new();
    settings.set_int(CFG_VALUE, 3);

    let err = VariableTypeRegistry::global()
        .load_value(&settings)
        .unwrap_err();
    assert_eq!(
        err,
        VariableError::InvalidFormat(SettingsError::MissingKey(CFG_CLASS.to_string()))
    );
}

#[test]
fn test_load_with_blank_discriminator_is_an_invalid_format() {
    let mut settings = Settings::new();
    settings.set_string(CFG_CLASS, "  ");
    settings.set_int(CFG_VALUE, 3);

    let err = VariableTypeRegistry::global()
        .load_value(&settings)
        .unwrap_err();
    assert!(
        matches!(err, VariableError::InvalidFormat(_)),
        "unexpected error: {:?}",
        err
    );
}

#[test]
fn test_load_with_non_string_discriminator_is_an_invalid_format() {
    let mut settings = Settings::new();
    settings.set_int(CFG_CLASS, 12);

    let err = VariableTypeRegistry::global()
        .load_value(&settings)
        .unwrap_err();
    assert!(
        matches!(err, VariableError::InvalidFormat(_)),
        "unexpected error: {:?}",
        err
    );
}

#[test]
fn test_load_with_unknown_discriminator_names_the_identifier() {
    let mut settings = Settings::new();
    settings.set_string(CFG_CLASS, "NOT_A_REAL_TYPE");
    settings.set_int(CFG_VALUE, 3);

    let err = VariableTypeRegistry::global()
        .load_value(&settings)
        .unwrap_err();
    assert_eq!(
        err,
        VariableError::UnknownType("NOT_A_REAL_TYPE".to_string())
    );
}

#[test]
fn test_load_with_corrupt_payload_reports_the_expected_kind() {
    let mut settings = Settings::new();
    settings.set_string(CFG_CLASS, "INTEGER");
    settings.set_string(CFG_VALUE, "three");

    let err = VariableTypeRegistry::global()
        .load_value(&settings)
        .unwrap_err();
    assert_eq!(
        err,
        VariableError::InvalidFormat(SettingsError::WrongKind {
            key: CFG_VALUE.to_string(),
            expected: "int",
            actual: "string",
        })
    );
}

#[test]
fn test_persisted_form_survives_json() {
    let variable = FlowVariable::new(
        "columns",
        StringArrayType.new_value(vec!["id".to_string(), "name".to_string()]),
    );

    let mut settings = Settings::new();
    variable.save(&mut settings).unwrap();

    let json = serde_json::to_string(&settings).unwrap();
    let reparsed: Settings = serde_json::from_str(&json).unwrap();

    let restored = FlowVariable::load(VariableTypeRegistry::global(), &reparsed).unwrap();
    assert_eq!(restored, variable);
}

#[test]
fn test_saving_twice_overwrites_in_place() {
    let mut settings = Settings::new();
    IntType.new_value(1).save(&mut settings).unwrap();
    StringType.new_value("later").save(&mut settings).unwrap();

    let restored = VariableTypeRegistry::global().load_value(&settings).unwrap();
    assert_eq!(restored, StringType.new_value("later"));
    assert_eq!(settings.len(), 2);
}
