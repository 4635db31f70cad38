pub mod datetime;
pub mod number;
