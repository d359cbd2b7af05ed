use indexmap::IndexMap;
use once_cell::sync::OnceCell;

use crate::types::builtin_types;
use crate::vartype::{VariableType, VariableValue, CFG_CLASS};
use crate::{Settings, SettingsError, VariableError};

static GLOBAL: OnceCell<VariableTypeRegistry> = OnceCell::new();

/// Catalog of variable types, keyed by identifier.
///
/// A registry is folded once from an ordered list of providers and is
/// read-only afterwards. The process-wide instance is reachable through
/// [`VariableTypeRegistry::global`].
pub struct VariableTypeRegistry {
    types: IndexMap<String, &'static dyn VariableType>,
}

impl VariableTypeRegistry {
    /// Fold an ordered list of types into a registry.
    ///
    /// On an identifier collision the earlier registration wins and the
    /// later one is dropped with a warning; collisions are never an error.
    pub fn from_types(provided: impl IntoIterator<Item = &'static dyn VariableType>) -> Self {
        let mut types: IndexMap<String, &'static dyn VariableType> = IndexMap::new();
        for vtype in provided {
            let identifier = vtype.identifier().to_string();
            if types.contains_key(&identifier) {
                tracing::warn!(
                    "Conflicting variable type identifier '{}': keeping the first registration, dropping {:?}",
                    identifier, vtype
                );
                continue;
            }
            tracing::debug!("Registering variable type: {}", identifier);
            types.insert(identifier, vtype);
        }
        Self { types }
    }

    /// The process-wide registry, built from the built-in types on first
    /// access.
    pub fn global() -> &'static VariableTypeRegistry {
        GLOBAL.get_or_init(|| Self::from_types(builtin_types()))
    }

    /// Build the process-wide registry from a custom type list.
    ///
    /// Exactly one build ever runs; if the registry already exists, the
    /// existing instance is returned and `provided` is ignored.
    pub fn init_global(
        provided: impl IntoIterator<Item = &'static dyn VariableType>,
    ) -> &'static VariableTypeRegistry {
        GLOBAL.get_or_init(|| Self::from_types(provided))
    }

    /// Look up a type by its identifier.
    pub fn resolve(&self, identifier: &str) -> Result<&'static dyn VariableType, VariableError> {
        self.types
            .get(identifier)
            .copied()
            .ok_or_else(|| VariableError::UnknownType(identifier.to_string()))
    }

    /// Reconstruct a persisted value: read the discriminator, resolve the
    /// owning type, then let that type load its payload.
    pub fn load_value(&self, settings: &Settings) -> Result<VariableValue, VariableError> {
        let identifier = settings.get_string(CFG_CLASS)?;
        if identifier.trim().is_empty() {
            return Err(VariableError::InvalidFormat(SettingsError::InvalidValue {
                key: CFG_CLASS.to_string(),
                reason: "type identifier must not be blank".to_string(),
            }));
        }
        let vtype = self.resolve(identifier)?;
        vtype.load_value(settings)
    }

    /// Registered types, in registration order.
    pub fn all_types(&self) -> impl Iterator<Item = &'static dyn VariableType> + '_ {
        self.types.values().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for VariableTypeRegistry {
    fn default() -> Self {
        Self::from_types(builtin_types())
    }
}
