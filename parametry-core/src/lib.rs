#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod value;
pub use value::*;

mod bounds;
pub use bounds::*;

mod error;
pub use error::*;

mod parameter;
pub use parameter::*;

mod kinds;
pub use kinds::*;
