#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

pub use parametry_core::*;

mod registry;
pub use registry::{Class, ClassBuilder, Declarations};

mod instance;
pub use instance::Instance;

mod namespace;
pub use namespace::{Namespace, ParamInfo};

mod macros;
