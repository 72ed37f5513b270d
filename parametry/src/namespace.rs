//! Read-only introspection over declarations and instance values.
//!
//! A [`Namespace`] is a borrow, constructed on each `param()` call and never
//! cached, so it cannot drift from the registry or the instance storage it
//! views.

use parametry_core::{Bounds, ParamError, Parameter, Value};

use crate::instance::Instance;
use crate::registry::{Class, Declarations};

/// A read-only view surfacing descriptor metadata by parameter name, plus
/// current values when bound to an instance.
#[derive(Clone, Copy)]
pub struct Namespace<'a> {
    class: &'a str,
    declarations: &'a Declarations,
    instance: Option<&'a Instance>,
}

impl Class {
    /// The introspection namespace, bound to the class: metadata only, no
    /// values.
    pub fn param(&self) -> Namespace<'_> {
        Namespace {
            class: self.name(),
            declarations: self.declarations().as_ref(),
            instance: None,
        }
    }
}

impl<'a> Namespace<'a> {
    pub(crate) fn for_instance(instance: &'a Instance) -> Self {
        Namespace {
            class: instance.class(),
            declarations: instance.declarations().as_ref(),
            instance: Some(instance),
        }
    }

    /// Metadata (and value, when instance-bound) for one declared name.
    ///
    /// Never fails for declared names; fails with
    /// [`ParamError::UnknownAttribute`] otherwise.
    pub fn get(&self, name: &str) -> Result<ParamInfo<'a>, ParamError> {
        let parameter = self
            .declarations
            .get(name)
            .ok_or_else(|| ParamError::UnknownAttribute {
                class: self.class.to_owned(),
                name: name.to_owned(),
            })?;
        let value = self.instance.and_then(|instance| instance.value_ref(name));
        Ok(ParamInfo {
            parameter: parameter.as_ref(),
            value,
        })
    }

    /// Iterates every declared parameter in registry order.
    pub fn iter(&self) -> impl Iterator<Item = ParamInfo<'a>> + 'a {
        let instance = self.instance;
        let declarations: &'a Declarations = self.declarations;
        declarations.iter().map(move |(name, parameter)| ParamInfo {
            parameter: parameter.as_ref(),
            value: instance.and_then(|i| i.value_ref(name)),
        })
    }

    /// Iterates declared names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + 'a {
        let declarations: &'a Declarations = self.declarations;
        declarations.names()
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Metadata of one declared parameter, plus its current value when the
/// namespace is instance-bound.
#[derive(Clone, Copy, Debug)]
pub struct ParamInfo<'a> {
    parameter: &'a Parameter,
    value: Option<&'a Value>,
}

impl<'a> ParamInfo<'a> {
    /// The attachment name.
    pub fn name(&self) -> &'a str {
        self.parameter.display_name()
    }

    /// Documentation text, if declared.
    pub fn doc(&self) -> Option<&'a str> {
        self.parameter.doc()
    }

    /// Unit tag, if declared.
    pub fn units(&self) -> Option<&'a str> {
        self.parameter.units()
    }

    /// Declared bounds, for bounded kinds.
    pub fn bounds(&self) -> Option<&'a Bounds> {
        self.parameter.bounds()
    }

    /// Declared step hint, for numeric kinds.
    pub fn step(&self) -> Option<f64> {
        self.parameter.step()
    }

    /// The declared default.
    pub fn default(&self) -> &'a Value {
        self.parameter.default()
    }

    /// Whether the parameter is constant.
    pub fn constant(&self) -> bool {
        self.parameter.constant()
    }

    /// Whether `None` is an accepted value.
    pub fn allow_none(&self) -> bool {
        self.parameter.allow_none()
    }

    /// The current value; `None` when the namespace is bound to a class
    /// rather than an instance.
    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    /// The full underlying descriptor.
    pub fn declaration(&self) -> &'a Parameter {
        self.parameter
    }
}
