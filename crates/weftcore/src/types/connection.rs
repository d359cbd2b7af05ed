use crate::vartype::{VariableType, VariableValue, CFG_VALUE};
use crate::{FsConnectionHandle, Settings, Value, VariableError};

/// Variable type for file-system connection handles.
///
/// Only the connection key is persisted; the handle it resolves to is
/// re-established by the owner of the connection pool after a reload.
#[derive(Debug)]
pub struct FsConnectionType;

impl FsConnectionType {
    pub const IDENTIFIER: &'static str = "FSCONNECTION";

    pub fn new_value(&self, v: FsConnectionHandle) -> VariableValue {
        VariableValue::new_unchecked(&FsConnectionType, Value::FsConnection(v))
    }
}

impl VariableType for FsConnectionType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::FsConnection(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        let key = settings.get_string(CFG_VALUE)?;
        Ok(self.new_value(FsConnectionHandle::new(key)))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::FsConnection(h) => {
                settings.set_string(CFG_VALUE, h.key());
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&FsConnectionType]
    }
}
