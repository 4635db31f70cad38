// Don't change this value, it will be replaced by the version
pub static VERSION: &'static str = "0.1.0 - Dev";

pub mod conf;
pub mod conv;
pub mod erx;
pub mod log;
pub mod prelude;
pub mod tools;
pub mod value;

pub use prelude::*;
