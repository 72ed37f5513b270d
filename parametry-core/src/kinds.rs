//! Kind builders: the declaration-time API.
//!
//! Each builder starts from a default value, takes chained metadata and
//! constraint setters, and finishes with [`build`](Number::build) (or
//! implicitly through [`Declare`] when passed to a class builder). The
//! finished [`Parameter`] is immutable; the default is validated against the
//! declared constraints here, once, so a descriptor is never in circulation
//! with a self-inconsistent declaration.

use alloc::string::String;

use crate::bounds::Bounds;
use crate::error::ParamError;
use crate::parameter::{Declare, Parameter, ParameterKind};
use crate::value::Value;

/// Validate the default against the finished descriptor. A failure here is a
/// declaration bug, not a runtime validation failure, so it is reported as
/// `InvalidDeclaration`.
fn finish(param: Parameter) -> Result<Parameter, ParamError> {
    match param.validate(param.default().clone()) {
        Ok(_) => Ok(param),
        Err(ParamError::Validation { violation, .. }) => Err(ParamError::InvalidDeclaration {
            kind: param.kind().label(),
            violation,
        }),
        Err(other) => Err(other),
    }
}

/// Declares a numeric parameter accepting `Int` or `Float` values, with
/// optional bounds and a step hint.
#[derive(Debug, Clone)]
pub struct Number {
    default: Value,
    doc: Option<String>,
    units: Option<String>,
    bounds: Option<Bounds>,
    step: Option<f64>,
    constant: bool,
    allow_none: bool,
}

impl Number {
    /// Starts a numeric declaration with the given default.
    pub fn new(default: impl Into<Value>) -> Self {
        Number {
            default: default.into(),
            doc: None,
            units: None,
            bounds: None,
            step: None,
            constant: false,
            allow_none: false,
        }
    }

    /// Documentation text.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Free-text unit tag; metadata only.
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Interval the value must lie in.
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Increment hint; metadata only.
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Permit exactly one assignment (at construction), then lock.
    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }

    /// Accept `None` as a value.
    pub fn allow_none(mut self) -> Self {
        self.allow_none = true;
        self
    }

    /// Finishes the declaration. Fails with
    /// [`ParamError::InvalidDeclaration`] if the default is not numeric or
    /// falls outside the declared bounds.
    pub fn build(self) -> Result<Parameter, ParamError> {
        finish(Parameter {
            name: None,
            kind: ParameterKind::Number {
                bounds: self.bounds,
                step: self.step,
            },
            default: self.default,
            doc: self.doc,
            units: self.units,
            constant: self.constant,
            allow_none: self.allow_none,
        })
    }
}

impl Declare for Number {
    fn declare(self) -> Result<Parameter, ParamError> {
        self.build()
    }
}

/// Declares an integer parameter, with optional bounds and a step hint.
#[derive(Debug, Clone)]
pub struct Integer {
    default: Value,
    doc: Option<String>,
    units: Option<String>,
    bounds: Option<Bounds>,
    step: Option<i64>,
    constant: bool,
    allow_none: bool,
}

impl Integer {
    /// Starts an integer declaration with the given default.
    pub fn new(default: impl Into<Value>) -> Self {
        Integer {
            default: default.into(),
            doc: None,
            units: None,
            bounds: None,
            step: None,
            constant: false,
            allow_none: false,
        }
    }

    /// Documentation text.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Free-text unit tag; metadata only.
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Interval the value must lie in.
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Increment hint; metadata only.
    pub fn step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    /// Permit exactly one assignment (at construction), then lock.
    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }

    /// Accept `None` as a value.
    pub fn allow_none(mut self) -> Self {
        self.allow_none = true;
        self
    }

    /// Finishes the declaration. Fails with
    /// [`ParamError::InvalidDeclaration`] if the default is not an `Int` or
    /// falls outside the declared bounds.
    pub fn build(self) -> Result<Parameter, ParamError> {
        finish(Parameter {
            name: None,
            kind: ParameterKind::Integer {
                bounds: self.bounds,
                step: self.step,
            },
            default: self.default,
            doc: self.doc,
            units: self.units,
            constant: self.constant,
            allow_none: self.allow_none,
        })
    }
}

impl Declare for Integer {
    fn declare(self) -> Result<Parameter, ParamError> {
        self.build()
    }
}

/// Declares a string parameter.
#[derive(Debug, Clone)]
pub struct Text {
    default: Value,
    doc: Option<String>,
    constant: bool,
    allow_none: bool,
}

impl Text {
    /// Starts a string declaration with the given default.
    pub fn new(default: impl Into<Value>) -> Self {
        Text {
            default: default.into(),
            doc: None,
            constant: false,
            allow_none: false,
        }
    }

    /// Documentation text.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Permit exactly one assignment (at construction), then lock.
    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }

    /// Accept `None` as a value.
    pub fn allow_none(mut self) -> Self {
        self.allow_none = true;
        self
    }

    /// Finishes the declaration.
    pub fn build(self) -> Result<Parameter, ParamError> {
        finish(Parameter {
            name: None,
            kind: ParameterKind::Text,
            default: self.default,
            doc: self.doc,
            units: None,
            constant: self.constant,
            allow_none: self.allow_none,
        })
    }
}

impl Declare for Text {
    fn declare(self) -> Result<Parameter, ParamError> {
        self.build()
    }
}

/// Declares a boolean parameter.
#[derive(Debug, Clone)]
pub struct Boolean {
    default: Value,
    doc: Option<String>,
    constant: bool,
    allow_none: bool,
}

impl Boolean {
    /// Starts a boolean declaration with the given default.
    pub fn new(default: bool) -> Self {
        Boolean {
            default: Value::Bool(default),
            doc: None,
            constant: false,
            allow_none: false,
        }
    }

    /// Documentation text.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Permit exactly one assignment (at construction), then lock.
    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }

    /// Accept `None` as a value.
    pub fn allow_none(mut self) -> Self {
        self.allow_none = true;
        self
    }

    /// Finishes the declaration.
    pub fn build(self) -> Result<Parameter, ParamError> {
        finish(Parameter {
            name: None,
            kind: ParameterKind::Boolean,
            default: self.default,
            doc: self.doc,
            units: None,
            constant: self.constant,
            allow_none: self.allow_none,
        })
    }
}

impl Declare for Boolean {
    fn declare(self) -> Result<Parameter, ParamError> {
        self.build()
    }
}

/// Declares an untyped parameter: accepts any value, carries metadata.
#[derive(Debug, Clone)]
pub struct Param {
    default: Value,
    doc: Option<String>,
    units: Option<String>,
    constant: bool,
}

impl Param {
    /// Starts an untyped declaration with the given default.
    pub fn new(default: impl Into<Value>) -> Self {
        Param {
            default: default.into(),
            doc: None,
            units: None,
            constant: false,
        }
    }

    /// Documentation text.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Free-text unit tag; metadata only.
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Permit exactly one assignment (at construction), then lock.
    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }

    /// Finishes the declaration. Cannot fail for the untyped kind, but keeps
    /// the uniform fallible signature.
    pub fn build(self) -> Result<Parameter, ParamError> {
        // Any kind accepts every value, None included.
        Ok(Parameter {
            name: None,
            kind: ParameterKind::Any,
            default: self.default,
            doc: self.doc,
            units: self.units,
            constant: self.constant,
            allow_none: true,
        })
    }
}

impl Declare for Param {
    fn declare(self) -> Result<Parameter, ParamError> {
        self.build()
    }
}
