//! Session startup, reporting, and exit handling.
mod startup;

pub use startup::{banner, run_session, RuntimeExit, SessionOutcome, SessionReport, CRASH_EXIT_CODE};
