/// ResultE<T> = Result<T, Erx>;
/// ResultEX = ResultE<()>;
/// fn smp<T: ToString>(error: T) -> Erx
/// fn amp<T: ToString>(thrower: &str) -> impl Fn(T) -> Erx
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// ResultE<T> = Result<T, Erx>;
pub type ResultE<T> = Result<T, Erx>;

/// ResultEX = ResultE<()>;
pub type ResultEX = ResultE<()>;

/// smp: simple convert T: ToString to Erx, without thrower
pub fn smp<T: ToString>(error: T) -> Erx {
    Erx::new("", &error.to_string())
}

/// amp: return a function that convert T: ToString to Erx thrown by `thrower`
///
/// # 示例
/// ```
/// let to_erx = typer::erx::amp("log::logging_initialize");
/// let erx = to_erx("subscriber already set");
/// assert_eq!(erx.thrower(), "log::logging_initialize");
/// ```
pub fn amp<T: ToString>(thrower: &str) -> impl Fn(T) -> Erx {
    let thrower = thrower.to_string();
    move |err: T| Erx::new(&thrower, &err.to_string())
}

/// A failed conversion.
///
/// The message is formatted once, at the failure site, and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erx {
    thrower: String,
    message: String,
}

impl Erx {
    pub fn new(thrower: &str, message: &str) -> Erx {
        Erx { thrower: thrower.to_string(), message: message.to_string() }
    }

    /// name of the operation that raised the error
    pub fn thrower(&self) -> &str {
        &self.thrower
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `thrower: message`, or only the message when there is no thrower
    pub fn description(&self) -> String {
        if self.thrower.is_empty() {
            return self.message.clone();
        }
        format!("{}: {}", self.thrower, self.message)
    }

    pub fn json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Display for Erx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Erx {}

impl From<(&str, &str)> for Erx {
    fn from((thrower, message): (&str, &str)) -> Self {
        Erx::new(thrower, message)
    }
}
