//! # lvsm core
//!
//! System interaction for `lvsm`: name and port resolution, external command
//! execution and paged terminal output. Everything here blocks the calling
//! thread until the underlying resolver call or child process is done.

pub mod director;
pub mod error;
pub mod pager;
pub mod resolver;
pub mod runner;
