//! Inclusive/exclusive numeric intervals for `Number` and `Integer` parameters.

use core::fmt::{self, Display, Formatter};

/// One endpoint of a bounds interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bound {
    /// The endpoint value.
    pub at: f64,
    /// Whether the endpoint itself is part of the interval.
    pub inclusive: bool,
}

impl Bound {
    /// An endpoint that is part of the interval.
    pub const fn inclusive(at: f64) -> Self {
        Bound {
            at,
            inclusive: true,
        }
    }

    /// An endpoint excluded from the interval (strict comparison).
    pub const fn exclusive(at: f64) -> Self {
        Bound {
            at,
            inclusive: false,
        }
    }
}

/// A lower/upper bounds pair; a `None` endpoint means unbounded on that side.
///
/// A value `v` is inside when `lower <= v <= upper`, with strict comparison on
/// endpoints marked exclusive.
///
/// Endpoints are `f64` and containment is checked in `f64`, including for
/// integer parameters, so integers beyond 2^53 lose precision before the
/// comparison.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Bounds {
    /// Lower endpoint, if any.
    pub lower: Option<Bound>,
    /// Upper endpoint, if any.
    pub upper: Option<Bound>,
}

impl Bounds {
    /// Bounds from explicit endpoints.
    pub const fn new(lower: Option<Bound>, upper: Option<Bound>) -> Self {
        Bounds { lower, upper }
    }

    /// The closed interval `[lo, hi]`.
    pub const fn closed(lo: f64, hi: f64) -> Self {
        Bounds::new(Some(Bound::inclusive(lo)), Some(Bound::inclusive(hi)))
    }

    /// The open interval `(lo, hi)`.
    pub const fn open(lo: f64, hi: f64) -> Self {
        Bounds::new(Some(Bound::exclusive(lo)), Some(Bound::exclusive(hi)))
    }

    /// `[lo, inf)`: at least `lo`.
    pub const fn at_least(lo: f64) -> Self {
        Bounds::new(Some(Bound::inclusive(lo)), None)
    }

    /// `(-inf, hi]`: at most `hi`.
    pub const fn at_most(hi: f64) -> Self {
        Bounds::new(None, Some(Bound::inclusive(hi)))
    }

    /// `(lo, inf)`: strictly greater than `lo`.
    pub const fn greater_than(lo: f64) -> Self {
        Bounds::new(Some(Bound::exclusive(lo)), None)
    }

    /// `(-inf, hi)`: strictly less than `hi`.
    pub const fn less_than(hi: f64) -> Self {
        Bounds::new(None, Some(Bound::exclusive(hi)))
    }

    /// Whether `v` lies inside the interval.
    pub fn contains(&self, v: f64) -> bool {
        if let Some(lower) = self.lower {
            let ok = if lower.inclusive {
                v >= lower.at
            } else {
                v > lower.at
            };
            if !ok {
                return false;
            }
        }
        if let Some(upper) = self.upper {
            let ok = if upper.inclusive {
                v <= upper.at
            } else {
                v < upper.at
            };
            if !ok {
                return false;
            }
        }
        true
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.lower {
            Some(b) if b.inclusive => write!(f, "[{}", b.at)?,
            Some(b) => write!(f, "({}", b.at)?,
            None => f.write_str("(-inf")?,
        }
        f.write_str(", ")?;
        match self.upper {
            Some(b) if b.inclusive => write!(f, "{}]", b.at),
            Some(b) => write!(f, "{})", b.at),
            None => f.write_str("inf)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn closed_interval_includes_endpoints() {
        let b = Bounds::closed(0.0, 10.0);
        assert!(b.contains(0.0));
        assert!(b.contains(10.0));
        assert!(b.contains(5.0));
        assert!(!b.contains(-0.001));
        assert!(!b.contains(10.001));
    }

    #[test]
    fn open_interval_excludes_endpoints() {
        let b = Bounds::open(0.0, 10.0);
        assert!(!b.contains(0.0));
        assert!(!b.contains(10.0));
        assert!(b.contains(0.001));
        assert!(b.contains(9.999));
    }

    #[test]
    fn half_bounded() {
        assert!(Bounds::at_least(0.0).contains(f64::MAX));
        assert!(Bounds::at_least(0.0).contains(0.0));
        assert!(!Bounds::greater_than(0.0).contains(0.0));
        assert!(Bounds::at_most(10.0).contains(f64::MIN));
        assert!(!Bounds::less_than(10.0).contains(10.0));
    }

    #[test]
    fn unbounded_accepts_everything() {
        let b = Bounds::default();
        assert!(b.contains(f64::MIN));
        assert!(b.contains(0.0));
        assert!(b.contains(f64::MAX));
    }

    #[test]
    fn display_interval_notation() {
        assert_eq!(format!("{}", Bounds::closed(0.0, 10.0)), "[0, 10]");
        assert_eq!(format!("{}", Bounds::open(0.0, 10.0)), "(0, 10)");
        assert_eq!(format!("{}", Bounds::at_least(1.5)), "[1.5, inf)");
        assert_eq!(format!("{}", Bounds::less_than(10.0)), "(-inf, 10)");
        assert_eq!(format!("{}", Bounds::default()), "(-inf, inf)");
    }
}
