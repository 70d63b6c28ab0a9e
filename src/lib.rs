//! Namespace-gated debug printing.
//!
//! Debug statements are silent unless the `DEBUG` environment variable names their namespace
//! (`DEBUG=net,db`), enables everything (`DEBUG=*`), or enables everything but a few
//! (`DEBUG=*,!db`). Values are rendered as JSON, errors as their message, and the line is written
//! colored to stderr or a configured sink.
//!
//! ```
//! use nsdebug::{debug_println, Arg, Config, DebugFn, Style};
//!
//! let net = DebugFn::new(Config::new("net").style([Style::Cyan, Style::Bold]));
//! debug_println!(net, "connected", 443);
//!
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "reset by peer");
//! net.call(&[Arg::from("dropped"), Arg::error(&err)]);
//! ```
//!
//! The `DEBUG` variable is read when a [`DebugFn`] is created. Call [`DebugFn::refresh`] to pick
//! up a changed value.

// Crate root: declare modules and control visibility
pub mod caller;
pub mod config;
pub mod debug;
pub mod emit;
pub mod format;
pub mod namespace;
pub mod output;
pub mod style;
pub mod value;

// Re-export commonly used API for call sites and tests
pub use caller::CallerInfo;
pub use config::{Config, DEFAULT_NAMESPACE};
pub use debug::{new, new_default, DebugFn};
pub use format::format_values;
pub use namespace::{is_active, ControlSpec, CONTROL_VAR};
pub use output::{MemoryOutput, Output};
pub use style::Style;
pub use value::{Arg, HasMessage, Record};
