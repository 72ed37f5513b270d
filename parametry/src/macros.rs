//! Keyword-argument sugar for instance construction.

/// Builds an override list for [`Class::construct`](crate::Class::construct)
/// with keyword-argument syntax.
///
/// ```
/// use parametry::{Class, Number, overrides};
///
/// # fn main() -> Result<(), parametry::ParamError> {
/// let square = Class::builder("Square")
///     .declare("side1", Number::new(1.0))?
///     .declare("side2", Number::new(1.0))?
///     .build();
///
/// let sq = square.construct(overrides! { side1: 5, side2: 4 })?;
/// assert_eq!(*sq.get("side1")?, 5);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! overrides {
    () => {
        ::core::iter::empty::<(&'static str, $crate::Value)>()
    };
    ($($name:ident : $value:expr),+ $(,)?) => {
        [$( (stringify!($name), $crate::Value::from($value)) ),+]
    };
}
