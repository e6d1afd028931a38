//! Pure session state: no timers, no channels, no I/O.

pub mod economy;
pub mod log;
pub mod session;
pub mod stats;
