//! # Domain Calculators
//!
//! Pure functions behind the station modules. Every calculator is a
//! deterministic function of its inputs: no I/O, no UI types, no shared
//! state. The TUI mounts exactly one module at a time and never needs to
//! read these results back — each module computes and displays its own.
//!
//! Input validation happens at the form boundary (clamping, fallback to
//! defaults), so the functions here are total over the values they receive.

pub mod budget;
pub mod compound;
pub mod cover;
pub mod debt;
pub mod emergency;
pub mod esg;
pub mod inflation;
pub mod loan;
pub mod retirement;
pub mod risk;
