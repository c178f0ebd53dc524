//! Canonical text tokens for operands.

use opwatch_mc::backend::TargetInfo;
use opwatch_mc::inst::Operand;

/// Sentinel for an empty operand slot.
pub const INVALID_TOKEN: &str = "<InvalidOperand>";

/// Sentinel for a nested instruction. Sub-instructions are never rendered
/// recursively; nesting depth is unbounded in principle.
pub const SUB_INST_TOKEN: &str = "<SubInst>";

/// Render one operand into its canonical display token.
pub fn operand_token(op: &Operand, info: &dyn TargetInfo, raw_reg_numbers: bool) -> String {
    match op {
        Operand::Invalid => INVALID_TOKEN.to_string(),
        Operand::Reg(reg) => reg_token(*reg, info, raw_reg_numbers),
        // Small immediates read better in decimal; anything that does not
        // survive a 16-bit signed round trip is a bit pattern and goes out
        // as full-width hex.
        Operand::Imm(value) if i64::from(*value as i16) == *value => format!("{value}"),
        Operand::Imm(value) => format!("{:#x}", *value as u64),
        Operand::FpImm(value) => format!("{value}f"),
        Operand::Expr(expr) if expr.is_target_specific() => {
            format!("<Target Specific Expr {expr}>")
        }
        Operand::Expr(expr) => expr.to_string(),
        Operand::SubInst(_) => SUB_INST_TOKEN.to_string(),
    }
}

/// Register display token. Indices outside the target register table fall
/// back to the raw form, so a sweep can walk past the end of the table
/// without killing the run.
pub fn reg_token(reg: u32, info: &dyn TargetInfo, raw_reg_numbers: bool) -> String {
    if raw_reg_numbers {
        return format!("r{reg}");
    }
    match info.reg_name(reg) {
        Some(name) => name.to_string(),
        None => format!("r{reg}"),
    }
}
