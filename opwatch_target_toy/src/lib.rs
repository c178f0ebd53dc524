//! opwatch_target_toy: a small fixed-width reference target.
//!
//! Sixteen registers, one 4-byte little-endian word per instruction, and a
//! static descriptor table. Register fields are 4 bits and silently wrap,
//! which gives sweeps observable bit behavior to map out.

pub mod encode;
pub mod isa;
pub mod reg;
