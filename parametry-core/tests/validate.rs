//! Descriptor validation: type checks, bounds, allow-none, and
//! declaration-time consistency.

use parametry_core::{
    Boolean, Bounds, Number, Integer, Param, ParamError, Text, Value, ValueType, Violation,
};

#[test]
fn number_accepts_int_and_float() {
    parametry_testhelpers::setup();
    let p = Number::new(1.0).build().unwrap();
    assert_eq!(p.validate(Value::Float(2.5)).unwrap(), Value::Float(2.5));
    assert_eq!(p.validate(Value::Int(5)).unwrap(), Value::Int(5));
}

#[test]
fn number_rejects_wrong_type() {
    parametry_testhelpers::setup();
    let p = Number::new(1.0).build().unwrap();
    let err = p.validate(Value::from("x")).unwrap_err();
    assert_eq!(
        err,
        ParamError::Validation {
            name: "Number".to_string(),
            violation: Violation::WrongType {
                expected: "Int or Float",
                actual: ValueType::Str,
            },
        }
    );
    assert!(err.to_string().contains("expected Int or Float, got Str"));
}

#[test]
fn closed_bounds_accept_endpoints_reject_outside() {
    parametry_testhelpers::setup();
    let p = Number::new(1.0).bounds(Bounds::closed(0.0, 10.0)).build().unwrap();
    for ok in [0.0, 0.001, 5.0, 9.999, 10.0] {
        assert!(p.validate(Value::Float(ok)).is_ok(), "{ok} should pass");
    }
    for bad in [-0.001, 10.001, 11.0, -1.0] {
        let err = p.validate(Value::Float(bad)).unwrap_err();
        assert!(
            matches!(
                err,
                ParamError::Validation {
                    violation: Violation::OutOfBounds { .. },
                    ..
                }
            ),
            "{bad} should be out of bounds, got {err}"
        );
    }
}

#[test]
fn exclusive_bounds_reject_endpoints() {
    parametry_testhelpers::setup();
    let p = Number::new(5.0).bounds(Bounds::open(0.0, 10.0)).build().unwrap();
    assert!(p.validate(Value::Float(0.0)).is_err());
    assert!(p.validate(Value::Float(10.0)).is_err());
    assert!(p.validate(Value::Float(0.001)).is_ok());
    assert!(p.validate(Value::Float(9.999)).is_ok());
}

#[test]
fn half_open_bounds() {
    parametry_testhelpers::setup();
    let p = Number::new(1.0).bounds(Bounds::at_least(0.0)).build().unwrap();
    assert!(p.validate(Value::Float(0.0)).is_ok());
    assert!(p.validate(Value::Float(1e12)).is_ok());
    assert!(p.validate(Value::Float(-0.001)).is_err());
}

#[test]
fn integer_rejects_float() {
    parametry_testhelpers::setup();
    let p = Integer::new(1).build().unwrap();
    assert!(p.validate(Value::Int(7)).is_ok());
    let err = p.validate(Value::Float(7.0)).unwrap_err();
    assert!(
        matches!(
            err,
            ParamError::Validation {
                violation: Violation::WrongType { expected: "Int", .. },
                ..
            }
        ),
        "got {err}"
    );
}

#[test]
fn integer_bounds_apply() {
    parametry_testhelpers::setup();
    let p = Integer::new(1).bounds(Bounds::closed(0.0, 10.0)).build().unwrap();
    assert!(p.validate(Value::Int(10)).is_ok());
    assert!(p.validate(Value::Int(11)).is_err());
}

#[test]
fn boolean_rejects_non_bool() {
    parametry_testhelpers::setup();
    let p = Boolean::new(true).build().unwrap();
    assert_eq!(p.validate(Value::Bool(false)).unwrap(), Value::Bool(false));
    let err = p.validate(Value::Int(1)).unwrap_err();
    assert!(
        matches!(
            err,
            ParamError::Validation {
                violation: Violation::WrongType { expected: "Bool", .. },
                ..
            }
        ),
        "got {err}"
    );
    assert!(p.validate(Value::from("true")).is_err());
}

#[test]
fn untyped_param_accepts_everything() {
    parametry_testhelpers::setup();
    let p = Param::new(1).build().unwrap();
    for v in [
        Value::Int(7),
        Value::Float(2.5),
        Value::Bool(true),
        Value::from("anything"),
        Value::None,
    ] {
        assert_eq!(p.validate(v.clone()).unwrap(), v);
    }
    // None is always admissible for the untyped kind.
    assert!(p.allow_none());
}

#[test]
fn untyped_param_carries_metadata() {
    parametry_testhelpers::setup();
    let p = Param::new(Value::None)
        .doc("anything goes")
        .units("furlongs")
        .constant()
        .build()
        .unwrap();
    assert_eq!(p.doc(), Some("anything goes"));
    assert_eq!(p.units(), Some("furlongs"));
    assert!(p.constant());
    assert!(p.default().is_none());
    assert_eq!(p.display_name(), "Param");
}

#[test]
fn none_rejected_unless_allowed() {
    parametry_testhelpers::setup();
    let strict = Number::new(1.0).build().unwrap();
    let err = strict.validate(Value::None).unwrap_err();
    assert!(matches!(
        err,
        ParamError::Validation {
            violation: Violation::NoneNotAllowed,
            ..
        }
    ));

    let lax = Number::new(1.0).allow_none().build().unwrap();
    assert_eq!(lax.validate(Value::None).unwrap(), Value::None);
}

#[test]
fn default_outside_bounds_is_invalid_declaration() {
    parametry_testhelpers::setup();
    let err = Number::new(11.0)
        .bounds(Bounds::closed(0.0, 10.0))
        .build()
        .unwrap_err();
    assert!(
        matches!(
            err,
            ParamError::InvalidDeclaration {
                kind: "Number",
                violation: Violation::OutOfBounds { .. },
            }
        ),
        "got {err}"
    );
}

#[test]
fn wrong_typed_default_is_invalid_declaration() {
    parametry_testhelpers::setup();
    let err = Number::new("x").build().unwrap_err();
    assert!(matches!(err, ParamError::InvalidDeclaration { kind: "Number", .. }));

    let err = Text::new(3).build().unwrap_err();
    assert!(matches!(err, ParamError::InvalidDeclaration { kind: "Text", .. }));
}

#[test]
fn none_default_requires_allow_none() {
    parametry_testhelpers::setup();
    assert!(Number::new(Value::None).build().is_err());
    let p = Number::new(Value::None).allow_none().build().unwrap();
    assert!(p.default().is_none());
}

#[test]
fn standalone_descriptor_carries_metadata() {
    parametry_testhelpers::setup();
    let p = Number::new(1.0).doc("side1").units("m").build().unwrap();
    assert_eq!(p.name(), None);
    assert_eq!(p.doc(), Some("side1"));
    assert_eq!(p.units(), Some("m"));
    assert_eq!(*p.default(), 1.0);
    assert_eq!(p.display_name(), "Number");
}

#[test]
fn metadata_does_not_affect_validation() {
    parametry_testhelpers::setup();
    let plain = Number::new(1.0).build().unwrap();
    let decorated = Number::new(1.0).doc("d").units("m").step(0.5).build().unwrap();
    for v in [Value::Float(-1e9), Value::Int(0), Value::Float(1e9)] {
        assert_eq!(
            plain.validate(v.clone()).is_ok(),
            decorated.validate(v).is_ok()
        );
    }
}

#[test]
fn display_renders_declaration() {
    parametry_testhelpers::setup();
    let p = Number::new(1.0)
        .units("m")
        .bounds(Bounds::closed(0.0, 10.0))
        .build()
        .unwrap()
        .named("side1");
    assert_eq!(
        p.to_string(),
        "Number(name=\"side1\", default=1, bounds=[0, 10], units=\"m\")"
    );
}
