//! Machine instruction and operand definitions.

use crate::expr::Expr;

/// One argument slot of an instruction. Exactly one variant is active at a
/// time; every consumer matches exhaustively, so wrong-variant queries
/// cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Empty slot, e.g. an optional def the backend never filled in.
    Invalid,
    /// Register, identified by its index in the target register table.
    Reg(u32),
    /// Signed 64-bit integer immediate.
    Imm(i64),
    /// 64-bit floating immediate.
    FpImm(f64),
    /// Symbolic expression, resolved later via a fixup.
    Expr(Expr),
    /// Nested sub-instruction (instruction bundles).
    SubInst(Box<Inst>),
}

/// A machine instruction: an opcode plus an ordered operand list.
///
/// Instructions are plain values. Cloning one and mutating the clone never
/// affects the original, which the sweep engine relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct Inst {
    /// Opcode, interpreted through the target's instruction table.
    pub opcode: u32,
    pub operands: Vec<Operand>,
}

impl Inst {
    pub fn new(opcode: u32, operands: Vec<Operand>) -> Self {
        Self { opcode, operands }
    }
}
