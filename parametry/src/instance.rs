//! Parameterized instances: per-instance value storage routed through
//! descriptors.
//!
//! Storage is private and every read/write goes through [`Instance::get`] /
//! [`Instance::set`] (or the equivalent `Index` sugar), so there is no path
//! that skips the declaring descriptor's validation.

use core::fmt;
use core::ops::Index;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::trace;

use parametry_core::{ParamError, Value};

use crate::namespace::Namespace;
use crate::registry::{Class, Declarations};

/// An object whose attributes are governed by a class's descriptors rather
/// than arbitrary unconstrained fields.
///
/// Holds a snapshot of the class registry taken at construction time and an
/// exclusively-owned value map seeded from descriptor defaults.
#[derive(Debug, Clone)]
pub struct Instance {
    class: String,
    declarations: Arc<Declarations>,
    values: IndexMap<String, Value>,
}

impl Class {
    /// Constructs an instance with every parameter at its declared default.
    ///
    /// Infallible: defaults were validated when the descriptors were built.
    pub fn instantiate(&self) -> Instance {
        let declarations = Arc::clone(self.declarations());
        let values = declarations
            .iter()
            .map(|(name, param)| (name.to_owned(), param.default().clone()))
            .collect();
        trace!(class = %self.name(), "instantiated from defaults");
        Instance {
            class: self.name().to_owned(),
            declarations,
            values,
        }
    }

    /// Constructs an instance, overriding named defaults.
    ///
    /// Each override is validated by its descriptor; an unknown name fails
    /// with [`ParamError::UnknownAttribute`]. Construction is atomic: if any
    /// override fails, no instance is produced. Constant parameters may be
    /// overridden here: construction is their one permitted assignment.
    pub fn construct<I, K, V>(&self, overrides: I) -> Result<Instance, ParamError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let declarations = Arc::clone(self.declarations());

        // Validate every override before any storage exists.
        let mut accepted: Vec<(String, Value)> = Vec::new();
        for (name, value) in overrides {
            let name = name.as_ref();
            let param =
                declarations
                    .get(name)
                    .ok_or_else(|| ParamError::UnknownAttribute {
                        class: self.name().to_owned(),
                        name: name.to_owned(),
                    })?;
            let value = param.validate(value.into())?;
            accepted.push((name.to_owned(), value));
        }

        let mut values: IndexMap<String, Value> = declarations
            .iter()
            .map(|(name, param)| (name.to_owned(), param.default().clone()))
            .collect();
        let overridden = accepted.len();
        for (name, value) in accepted {
            values.insert(name, value);
        }
        trace!(class = %self.name(), overridden, "constructed instance");
        Ok(Instance {
            class: self.name().to_owned(),
            declarations,
            values,
        })
    }
}

impl Instance {
    /// The name of the class this instance was constructed from.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The registry snapshot this instance was constructed with.
    pub fn declarations(&self) -> &Arc<Declarations> {
        &self.declarations
    }

    /// The current value of a parameter.
    pub fn get(&self, name: &str) -> Result<&Value, ParamError> {
        self.values.get(name).ok_or_else(|| self.unknown(name))
    }

    /// Assigns a parameter, re-running the declaring descriptor's validation.
    ///
    /// Fails with [`ParamError::ConstantViolation`] if the descriptor is
    /// constant: constants received their one value at construction, and a
    /// write of the unchanged value is still a write. On failure the stored
    /// value is untouched.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ParamError> {
        let param = self
            .declarations
            .get(name)
            .ok_or_else(|| self.unknown(name))?;
        if param.constant() {
            return Err(ParamError::ConstantViolation {
                name: name.to_owned(),
            });
        }
        let value = param.validate(value.into())?;
        self.values.insert(name.to_owned(), value);
        Ok(())
    }

    /// The introspection namespace, bound to this instance: metadata plus
    /// current values.
    pub fn param(&self) -> Namespace<'_> {
        Namespace::for_instance(self)
    }

    pub(crate) fn value_ref(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    fn unknown(&self, name: &str) -> ParamError {
        ParamError::UnknownAttribute {
            class: self.class.clone(),
            name: name.to_owned(),
        }
    }
}

/// Attribute-style read access: `instance["side1"]`.
///
/// Panics with the [`ParamError::UnknownAttribute`] message on undeclared
/// names; [`Instance::get`] is the fallible form.
impl Index<&str> for Instance {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.class)?;
        let mut sep = "";
        for (name, value) in &self.values {
            write!(f, "{sep}{name}={value}")?;
            sep = ", ";
        }
        f.write_str(")")
    }
}
