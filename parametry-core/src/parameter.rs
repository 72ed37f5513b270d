//! The immutable parameter descriptor and its validation contract.

use alloc::string::String;
use core::fmt;

use crate::bounds::Bounds;
use crate::error::{ParamError, Violation};
use crate::value::Value;

/// The kind payload of a descriptor: which value types it accepts and the
/// kind-specific constraints it enforces.
///
/// `units`, `doc`, and `step` are pure metadata and never participate in
/// validation; bounds do.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterKind {
    /// Accepts any value; a pure metadata carrier.
    Any,

    /// Accepts `Int` or `Float` values, optionally bounded.
    Number {
        /// Interval the value must lie in, if any.
        bounds: Option<Bounds>,
        /// Increment hint for UIs and sweeps; metadata only.
        step: Option<f64>,
    },

    /// Accepts `Int` values only, optionally bounded.
    Integer {
        /// Interval the value must lie in, if any.
        bounds: Option<Bounds>,
        /// Increment hint; metadata only.
        step: Option<i64>,
    },

    /// Accepts `Str` values.
    Text,

    /// Accepts `Bool` values.
    Boolean,
}

impl ParameterKind {
    /// Human-readable kind label, used in error messages and `Display`.
    pub fn label(&self) -> &'static str {
        match self {
            ParameterKind::Any => "Param",
            ParameterKind::Number { .. } => "Number",
            ParameterKind::Integer { .. } => "Integer",
            ParameterKind::Text => "Text",
            ParameterKind::Boolean => "Boolean",
        }
    }

    /// The declared bounds, for the kinds that carry them.
    pub fn bounds(&self) -> Option<&Bounds> {
        match self {
            ParameterKind::Number { bounds, .. } | ParameterKind::Integer { bounds, .. } => {
                bounds.as_ref()
            }
            _ => None,
        }
    }

    /// The declared step hint, for the kinds that carry one. Integer steps
    /// are widened to `f64`.
    pub fn step(&self) -> Option<f64> {
        match self {
            ParameterKind::Number { step, .. } => *step,
            ParameterKind::Integer { step, .. } => step.map(|s| s as f64),
            _ => None,
        }
    }

    /// Type and bounds check for a non-`None` candidate.
    fn check(&self, candidate: &Value) -> Result<(), Violation> {
        match self {
            ParameterKind::Any => Ok(()),
            ParameterKind::Number { bounds, .. } => {
                let v = candidate.as_f64().ok_or(Violation::WrongType {
                    expected: "Int or Float",
                    actual: candidate.value_type(),
                })?;
                check_bounds(*bounds, v)
            }
            ParameterKind::Integer { bounds, .. } => {
                let v = candidate.as_i64().ok_or(Violation::WrongType {
                    expected: "Int",
                    actual: candidate.value_type(),
                })?;
                check_bounds(*bounds, v as f64)
            }
            ParameterKind::Text => match candidate {
                Value::Str(_) => Ok(()),
                other => Err(Violation::WrongType {
                    expected: "Str",
                    actual: other.value_type(),
                }),
            },
            ParameterKind::Boolean => match candidate {
                Value::Bool(_) => Ok(()),
                other => Err(Violation::WrongType {
                    expected: "Bool",
                    actual: other.value_type(),
                }),
            },
        }
    }
}

fn check_bounds(bounds: Option<Bounds>, v: f64) -> Result<(), Violation> {
    match bounds {
        Some(bounds) if !bounds.contains(v) => Err(Violation::OutOfBounds { bounds, value: v }),
        _ => Ok(()),
    }
}

/// An immutable specification of one named attribute: its kind, default
/// value, and metadata.
///
/// Descriptors are produced by the kind builders ([`Number`](crate::Number),
/// [`Integer`](crate::Integer), ...), optionally attached to a class by name,
/// and shared read-only by every instance of that class. Only the *value*
/// varies per instance; the descriptor never changes after `build()`.
///
/// A descriptor is also a complete standalone object: built without a class,
/// it carries and surfaces its metadata with `name() == None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub(crate) name: Option<String>,
    pub(crate) kind: ParameterKind,
    pub(crate) default: Value,
    pub(crate) doc: Option<String>,
    pub(crate) units: Option<String>,
    pub(crate) constant: bool,
    pub(crate) allow_none: bool,
}

impl Parameter {
    /// The attachment name, once declared on a class.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The kind payload.
    pub fn kind(&self) -> &ParameterKind {
        &self.kind
    }

    /// The declared default value.
    pub fn default(&self) -> &Value {
        &self.default
    }

    /// Documentation text, if declared.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Free-text unit tag, if declared. Metadata only.
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// Declared bounds, for bounded kinds.
    pub fn bounds(&self) -> Option<&Bounds> {
        self.kind.bounds()
    }

    /// Declared step hint, for numeric kinds. Metadata only.
    pub fn step(&self) -> Option<f64> {
        self.kind.step()
    }

    /// Whether the attribute permits exactly one assignment (at construction)
    /// before becoming immutable.
    pub fn constant(&self) -> bool {
        self.constant
    }

    /// Whether `None` is an accepted value.
    pub fn allow_none(&self) -> bool {
        self.allow_none
    }

    /// The name to report in messages: the attachment name, or the kind label
    /// for a standalone descriptor.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => self.kind.label(),
        }
    }

    /// Checks a candidate value against this descriptor and returns the
    /// accepted value, or [`ParamError::Validation`] naming the violated
    /// constraint (wrong type, `None` not allowed, out of bounds).
    pub fn validate(&self, candidate: Value) -> Result<Value, ParamError> {
        if candidate.is_none() {
            if self.allow_none {
                return Ok(Value::None);
            }
            return Err(self.violation(Violation::NoneNotAllowed));
        }
        match self.kind.check(&candidate) {
            Ok(()) => Ok(candidate),
            Err(violation) => Err(self.violation(violation)),
        }
    }

    /// Returns this descriptor with its attachment name set. Called by the
    /// registry when the descriptor is declared on a class.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn violation(&self, violation: Violation) -> ParamError {
        ParamError::Validation {
            name: String::from(self.display_name()),
            violation,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind.label())?;
        let mut sep = "";
        if let Some(name) = &self.name {
            write!(f, "name={name:?}")?;
            sep = ", ";
        }
        write!(f, "{sep}default={}", self.default)?;
        if let Some(bounds) = self.bounds() {
            write!(f, ", bounds={bounds}")?;
        }
        if let Some(units) = &self.units {
            write!(f, ", units={units:?}")?;
        }
        if self.constant {
            f.write_str(", constant")?;
        }
        if self.allow_none {
            f.write_str(", allow_none")?;
        }
        f.write_str(")")
    }
}

/// Anything that can finish into a [`Parameter`] declaration.
///
/// Implemented by the kind builders, so `declare("side1", Number::new(1.0))`
/// reads like the declaration it is, and by `Parameter` itself, so an
/// already-built descriptor can be attached as-is.
pub trait Declare {
    /// Finishes the declaration, validating the default against the kind's
    /// own constraints.
    fn declare(self) -> Result<Parameter, ParamError>;
}

impl Declare for Parameter {
    fn declare(self) -> Result<Parameter, ParamError> {
        Ok(self)
    }
}
