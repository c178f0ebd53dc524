//! opwatch_mc: Machine-code data model shared by targets and the probe layer.

pub mod backend;
pub mod desc;
pub mod expr;
pub mod fixup;
pub mod inst;
