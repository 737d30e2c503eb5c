mod capture;
mod core;
mod field;
mod parameter;
mod value;

pub use self::core::*;
pub use capture::*;
pub use field::*;
pub use parameter::*;
