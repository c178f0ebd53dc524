//! opwatch_probe: Diagnostic layer around a backend instruction encoder.
//!
//! [`intercept::ProbeEncoder`] is a drop-in [`opwatch_mc::backend::Encoder`]
//! that narrates every instruction passing through it: the symbolic form,
//! the backend's descriptor metadata, and the bytes the wrapped encoder
//! produced. A configured [`config::SweepSpec`] additionally re-encodes one
//! operand of one opcode across a value range to map out undocumented
//! encoding bit patterns.

pub mod config;
pub mod intercept;
pub mod render;
pub mod report;
pub mod sweep;
