use crate::vartype::{VariableType, VariableValue, CFG_VALUE};
use crate::{Credentials, Settings, Value, VariableError};

const CFG_NAME: &str = "name";
const CFG_LOGIN: &str = "login";
const CFG_PASSWORD: &str = "password";

/// Variable type for credential handles.
///
/// The payload persists as a nested sub-tree under the value key rather
/// than as a single scalar entry.
#[derive(Debug)]
pub struct CredentialsType;

impl CredentialsType {
    pub const IDENTIFIER: &'static str = "CREDENTIALS";

    pub fn new_value(&self, v: Credentials) -> VariableValue {
        VariableValue::new_unchecked(&CredentialsType, Value::Credentials(v))
    }
}

impl VariableType for CredentialsType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::Credentials(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        let sub = settings.get_tree(CFG_VALUE)?;
        let credentials = Credentials::new(
            sub.get_string(CFG_NAME)?,
            sub.get_string(CFG_LOGIN)?,
            sub.get_string(CFG_PASSWORD)?,
        );
        Ok(self.new_value(credentials))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::Credentials(c) => {
                let mut sub = Settings::new();
                sub.set_string(CFG_NAME, c.name());
                sub.set_string(CFG_LOGIN, c.login());
                sub.set_string(CFG_PASSWORD, c.password());
                settings.set_tree(CFG_VALUE, sub);
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&CredentialsType]
    }
}
