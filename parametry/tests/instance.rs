//! Instance construction, attribute access, and the all-or-nothing rules.

use parametry::{Bounds, Class, Number, ParamError, Text, Value, Violation, overrides};

fn square() -> Class {
    Class::builder("Square")
        .declare("side1", Number::new(1.0).doc("side1").units("m"))
        .unwrap()
        .declare("side2", Number::new(1.0).doc("side2").units("m"))
        .unwrap()
        .build()
}

#[test]
fn defaults_are_seeded() {
    parametry_testhelpers::setup();
    let sq = square().instantiate();
    assert_eq!(*sq.get("side1").unwrap(), 1.0);
    assert_eq!(*sq.get("side2").unwrap(), 1.0);
}

#[test]
fn overrides_are_applied() {
    parametry_testhelpers::setup();
    let sq = square().construct(overrides! { side1: 5, side2: 4 }).unwrap();
    assert_eq!(*sq.get("side1").unwrap(), 5);
    assert_eq!(*sq.get("side2").unwrap(), 4);
}

#[test]
fn unspecified_names_keep_defaults() {
    parametry_testhelpers::setup();
    let sq = square().construct(overrides! { side1: 5 }).unwrap();
    assert_eq!(*sq.get("side1").unwrap(), 5);
    assert_eq!(*sq.get("side2").unwrap(), 1.0);
}

#[test]
fn wrong_typed_override_fails_construction() {
    parametry_testhelpers::setup();
    let err = square().construct(overrides! { side1: "x" }).unwrap_err();
    assert!(matches!(
        err,
        ParamError::Validation {
            violation: Violation::WrongType { .. },
            ..
        }
    ));
}

#[test]
fn unknown_override_name_fails_construction() {
    parametry_testhelpers::setup();
    let err = square()
        .construct(overrides! { side1: 5, side3: 9 })
        .unwrap_err();
    assert_eq!(
        err,
        ParamError::UnknownAttribute {
            class: "Square".to_string(),
            name: "side3".to_string(),
        }
    );
}

#[test]
fn empty_overrides_equal_instantiate() {
    parametry_testhelpers::setup();
    let class = square();
    let constructed = class.construct(overrides! {}).unwrap();
    let instantiated = class.instantiate();
    assert_eq!(*constructed.get("side1").unwrap(), *instantiated.get("side1").unwrap());
}

#[test]
fn set_revalidates_and_stores() {
    parametry_testhelpers::setup();
    let class = Class::builder("C")
        .declare("x", Number::new(1.0).bounds(Bounds::closed(0.0, 10.0)))
        .unwrap()
        .build();
    let mut inst = class.instantiate();

    inst.set("x", 10.0).unwrap();
    assert_eq!(*inst.get("x").unwrap(), 10.0);

    let err = inst.set("x", 11.0).unwrap_err();
    assert!(matches!(
        err,
        ParamError::Validation {
            violation: Violation::OutOfBounds { .. },
            ..
        }
    ));
    // Failed writes leave the stored value untouched.
    assert_eq!(*inst.get("x").unwrap(), 10.0);
}

#[test]
fn set_current_value_is_idempotent() {
    parametry_testhelpers::setup();
    let mut sq = square().construct(overrides! { side1: 5 }).unwrap();
    let current = sq.get("side1").unwrap().clone();
    sq.set("side1", current).unwrap();
    assert_eq!(*sq.get("side1").unwrap(), 5);
}

#[test]
fn constant_locks_after_construction() {
    parametry_testhelpers::setup();
    let class = Class::builder("C")
        .declare("id", Number::new(1.0).constant())
        .unwrap()
        .build();

    // Construction is the one permitted assignment.
    let mut inst = class.construct(overrides! { id: 2.0 }).unwrap();
    assert_eq!(*inst.get("id").unwrap(), 2.0);

    let err = inst.set("id", 3.0).unwrap_err();
    assert_eq!(
        err,
        ParamError::ConstantViolation {
            name: "id".to_string(),
        }
    );

    // Even a write of the unchanged value is a write.
    let err = inst.set("id", 2.0).unwrap_err();
    assert!(matches!(err, ParamError::ConstantViolation { .. }));
}

#[test]
fn constant_from_default_also_locks() {
    parametry_testhelpers::setup();
    let class = Class::builder("C")
        .declare("id", Number::new(1.0).constant())
        .unwrap()
        .build();
    let mut inst = class.instantiate();
    assert!(matches!(
        inst.set("id", 2.0),
        Err(ParamError::ConstantViolation { .. })
    ));
    assert_eq!(*inst.get("id").unwrap(), 1.0);
}

#[test]
fn unknown_name_on_get_and_set() {
    parametry_testhelpers::setup();
    let mut sq = square().instantiate();
    assert!(matches!(
        sq.get("side3"),
        Err(ParamError::UnknownAttribute { .. })
    ));
    assert!(matches!(
        sq.set("side3", 1.0),
        Err(ParamError::UnknownAttribute { .. })
    ));
}

#[test]
fn index_reads_like_an_attribute() {
    parametry_testhelpers::setup();
    let sq = square().construct(overrides! { side1: 5 }).unwrap();
    assert_eq!(sq["side1"], 5);
    assert_eq!(sq["side2"], 1.0);
}

#[test]
#[should_panic(expected = "has no parameter named 'side3'")]
fn index_panics_on_unknown_name() {
    let sq = square().instantiate();
    let _ = &sq["side3"];
}

#[test]
fn text_parameter_roundtrip() {
    parametry_testhelpers::setup();
    let class = Class::builder("C")
        .declare("label", Text::new("untitled"))
        .unwrap()
        .build();
    let mut inst = class.instantiate();
    assert_eq!(*inst.get("label").unwrap(), "untitled");
    inst.set("label", "named").unwrap();
    assert_eq!(*inst.get("label").unwrap(), "named");
    assert!(inst.set("label", 3).is_err());
}

#[test]
fn allow_none_roundtrip() {
    parametry_testhelpers::setup();
    let class = Class::builder("C")
        .declare("limit", Number::new(1.0).allow_none())
        .unwrap()
        .build();
    let mut inst = class.instantiate();
    inst.set("limit", Value::None).unwrap();
    assert!(inst.get("limit").unwrap().is_none());
    inst.set("limit", None::<f64>).unwrap();
    assert!(inst.get("limit").unwrap().is_none());
}

#[test]
fn display_lists_values() {
    parametry_testhelpers::setup();
    let sq = square().construct(overrides! { side1: 5, side2: 4 }).unwrap();
    assert_eq!(sq.to_string(), "Square(side1=5, side2=4)");
}
