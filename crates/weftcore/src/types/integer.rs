use crate::types::{DoubleType, StringType};
use crate::vartype::{VariableType, VariableValue, CFG_VALUE};
use crate::{Settings, Value, VariableError};

/// Variable type for a single 32-bit integer.
///
/// Integers widen losslessly to doubles. The string edge is declared but
/// not implemented yet; asking for it fails with
/// [`VariableError::UnsupportedConversion`].
#[derive(Debug)]
pub struct IntType;

impl IntType {
    pub const IDENTIFIER: &'static str = "INTEGER";

    pub fn new_value(&self, v: i32) -> VariableValue {
        VariableValue::new_unchecked(&IntType, Value::Int(v))
    }
}

impl VariableType for IntType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::Int(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_int(CFG_VALUE)?))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::Int(v) => {
                settings.set_int(CFG_VALUE, *v);
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&IntType, &DoubleType, &StringType]
    }

    fn convert(
        &self,
        value: &VariableValue,
        target: &'static dyn VariableType,
    ) -> Result<Value, VariableError> {
        let Some(n) = value.get().as_int() else {
            return Err(VariableError::incompatible(
                value.variable_type().identifier(),
                Self::IDENTIFIER,
            ));
        };
        match target.identifier() {
            Self::IDENTIFIER => Ok(Value::Int(n)),
            DoubleType::IDENTIFIER => Ok(Value::Double(f64::from(n))),
            // TODO: settle on a string rendering for integers, then
            // implement this edge instead of reporting it unsupported.
            StringType::IDENTIFIER => Err(VariableError::UnsupportedConversion {
                from: Self::IDENTIFIER.to_string(),
                to: StringType::IDENTIFIER.to_string(),
            }),
            _ => Err(VariableError::incompatible(
                Self::IDENTIFIER,
                target.identifier(),
            )),
        }
    }
}

/// Variable type for an array of 32-bit integers.
#[derive(Debug)]
pub struct IntArrayType;

impl IntArrayType {
    pub const IDENTIFIER: &'static str = "INTEGER_ARRAY";

    pub fn new_value(&self, v: Vec<i32>) -> VariableValue {
        VariableValue::new_unchecked(&IntArrayType, Value::IntArray(v))
    }
}

impl VariableType for IntArrayType {
    fn identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn describes(&self, value: &Value) -> bool {
        matches!(value, Value::IntArray(_))
    }

    fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        Ok(self.new_value(settings.get_int_array(CFG_VALUE)?.to_vec()))
    }

    fn save_value(&self, settings: &mut Settings, value: &Value) -> Result<(), VariableError> {
        match value {
            Value::IntArray(v) => {
                settings.set_int_array(CFG_VALUE, v.clone());
                Ok(())
            }
            other => Err(VariableError::payload_mismatch(
                Self::IDENTIFIER,
                other.kind(),
            )),
        }
    }

    fn convertible_types(&self) -> Vec<&'static dyn VariableType> {
        vec![&IntArrayType]
    }
}
