pub use crate::conv::I2;
pub use crate::erx::{Erx, ResultE, ResultEX};
pub use crate::tools::datetime::Format;
pub use crate::value::Value;
