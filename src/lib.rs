//! Hostsedit - edit an OS hosts file in place.

pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod hosts;
pub mod line;
pub mod logging;
pub mod platform;

pub use error::{Error, Result, Violation};
pub use hosts::{Binding, HostsFile};
pub use line::{CommentBody, Line, Mapping};
