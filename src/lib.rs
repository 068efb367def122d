//! Single-screen, fixed-rate invaders simulation.
//!
//! The crate splits into a pure core (`entities` for data, `compute` for
//! the state transitions) and a terminal shell (the binary's `display`
//! module and frame loop).  The core never touches I/O, so every rule is
//! exercised by the integration tests without a terminal.

pub mod compute;
pub mod entities;
