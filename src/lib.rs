//! Deterministic falling-block puzzle game engine.
//!
//! The engine is a pure state machine: a presentation driver feeds it
//! discrete commands plus elapsed real time and polls a snapshot after
//! every call to render. The engine owns no clock, no I/O and no
//! rendering; with a fixed RNG seed and a fixed command/tick sequence a
//! whole session replays bit-for-bit.

pub mod core;
pub mod types;
