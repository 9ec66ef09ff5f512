//! The process engine: suspend/resume lifecycle around the pure core.
//!
//! # Key Concepts
//!
//! - **Process**: a sequential body that suspends on declared accept sets
//!   and resumes when a matching event arrives
//! - **Handle**: the exclusive owner that starts, delivers to, and tears
//!   down one process
//! - **Outcomes**: every delivery reports `Inert`, `Ignored`, `Suspended`,
//!   `Completed`, or `Faulted` — never conflated
//! - **Log**: every delivery is recorded with kind, disposition, and
//!   timestamp for observability
//!
//! Scheduling is single-threaded by construction: `deliver` drives the body
//! inline on the calling thread and the `&mut` receiver serializes access.

mod handle;
mod log;
mod process;

pub use handle::{DeliveryOutcome, ProcessHandle};
pub use log::{DeliveryLog, DeliveryRecord, Disposition, ProcessId};
pub use process::{EventKindOf, Fault, Process, Step};
