//! The classic square: two numeric sides in meters, declared with docs and
//! units, overridden at construction, introspected afterwards.

use parametry::{Class, Number, overrides};

fn main() -> Result<(), parametry::ParamError> {
    let square = Class::builder("Square")
        .declare("side1", Number::new(1.0).doc("side1").units("m"))?
        .declare("side2", Number::new(1.0).doc("side2").units("m"))?
        .build();

    // A descriptor is a complete object on its own, attached to no class.
    let p1 = Number::new(1.0).doc("side1").build()?;
    println!("{p1}");
    println!("{:?}", p1.doc());

    let sq1 = square.construct(overrides! { side1: 5, side2: 4 })?;
    println!("{sq1}");

    let side1 = sq1.param().get("side1")?;
    println!("{:?}", side1.doc());
    println!("{:?}", side1.units());

    Ok(())
}
