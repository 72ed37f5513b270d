//! Error taxonomy for declaration, validation, and attribute access.

use alloc::string::String;
use core::fmt;

use crate::bounds::Bounds;
use crate::value::ValueType;

/// The constraint a candidate value violated.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The value's type does not match the parameter's declared kind.
    WrongType {
        /// What the kind accepts (e.g. "Int or Float").
        expected: &'static str,
        /// The type of the rejected value.
        actual: ValueType,
    },

    /// `None` was supplied to a parameter declared without `allow_none`.
    NoneNotAllowed,

    /// A numeric value fell outside the declared bounds.
    OutOfBounds {
        /// The declared interval.
        bounds: Bounds,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::WrongType { expected, actual } => {
                write!(f, "expected {expected}, got {actual}")
            }
            Violation::NoneNotAllowed => f.write_str("None is not allowed"),
            Violation::OutOfBounds { bounds, value } => {
                write!(f, "value {value} is outside bounds {bounds}")
            }
        }
    }
}

/// Errors raised by the declaration, instantiation, and access APIs.
///
/// Every error surfaces immediately to the caller: there is no silent
/// coercion, no default substitution, and no partial mutation on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A declaration's own default or options are self-inconsistent, e.g. a
    /// default outside its declared bounds. Raised by the kind builders.
    InvalidDeclaration {
        /// The kind being declared ("Number", "Integer", ...).
        kind: &'static str,
        /// What the default violated.
        violation: Violation,
    },

    /// A candidate value failed a descriptor's type/bounds/allow-none checks.
    /// Raised at assignment and construction time; callers may retry with a
    /// corrected value.
    Validation {
        /// The parameter's name (its kind label when unattached).
        name: String,
        /// The violated constraint.
        violation: Violation,
    },

    /// Two sibling declarations in the same class body share a name. An
    /// inheritance override is not a duplicate.
    DuplicateDeclaration {
        /// The class being declared.
        class: String,
        /// The colliding name.
        name: String,
    },

    /// No descriptor matches the requested name.
    UnknownAttribute {
        /// The class whose registry was consulted.
        class: String,
        /// The undeclared name.
        name: String,
    },

    /// Write attempted on a constant attribute that already holds its one
    /// permitted value.
    ConstantViolation {
        /// The constant parameter's name.
        name: String,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::InvalidDeclaration { kind, violation } => {
                write!(f, "invalid {kind} declaration: {violation}")
            }
            ParamError::Validation { name, violation } => {
                write!(f, "validation failed for parameter '{name}': {violation}")
            }
            ParamError::DuplicateDeclaration { class, name } => {
                write!(f, "duplicate declaration of '{name}' on class '{class}'")
            }
            ParamError::UnknownAttribute { class, name } => {
                write!(f, "class '{class}' has no parameter named '{name}'")
            }
            ParamError::ConstantViolation { name } => {
                write!(f, "parameter '{name}' is constant and already initialized")
            }
        }
    }
}

impl core::error::Error for ParamError {}
