//! vitro window - Browser object graph for non-browser hosts
//!
//! The BOM half of the environment: `Window`, `Location`, `History`,
//! `Navigator`, storage, timers, the fetch-family stubs, a console
//! shim and an Error stack reformatter. Everything here follows the
//! permissive-stub philosophy: store a value, log the call through
//! `tracing`, return a constant.

mod console;
mod fetch;
mod history;
mod location;
pub mod logging;
mod navigator;
pub mod stack;
mod storage;
mod timers;
mod window;

pub use console::{Console, ConsoleLevel};
pub use fetch::{Headers, Request, Response, fetch};
pub use history::{History, HistoryEntry};
pub use location::{Location, LocationError};
pub use navigator::Navigator;
pub use stack::StackFrame;
pub use storage::Storage;
pub use timers::{TimerId, Timers};
pub use window::Window;
