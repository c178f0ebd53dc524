//! Byte encoding for the toy target.
//!
//! Word layout (little-endian u32): opcode in bits [7:0], register fields
//! in 4-bit nibbles from bit 8, byte immediates at [23:16], halfword
//! immediates and fixup fields at [31:16].

use opwatch_mc::backend::{EncodeError, Encoder, SubtargetInfo};
use opwatch_mc::expr::Expr;
use opwatch_mc::fixup::{Fixup, FixupKind};
use opwatch_mc::inst::{Inst, Operand};

use crate::isa::{DESCS, opcodes};
use crate::reg;

/// The real toy-target encoder. Stateless; every call is an independent
/// encode of one instruction into one 4-byte word.
#[derive(Debug, Default)]
pub struct ToyEncoder;

impl Encoder for ToyEncoder {
    fn encode(
        &mut self,
        inst: &Inst,
        out: &mut Vec<u8>,
        fixups: &mut Vec<Fixup>,
        _sti: &SubtargetInfo,
    ) -> Result<(), EncodeError> {
        let desc = DESCS
            .get(inst.opcode as usize)
            .ok_or(EncodeError::UnknownOpcode(inst.opcode))?;
        if inst.operands.len() != desc.num_operands as usize {
            return Err(EncodeError::OperandCount {
                opcode: inst.opcode,
                expected: desc.num_operands,
                actual: inst.operands.len(),
            });
        }

        let word = match inst.opcode {
            opcodes::NOP | opcodes::RET | opcodes::TRAP => inst.opcode,
            opcodes::MOVI => {
                inst.opcode | reg_field(inst, 0)? << 8 | imm_field(inst, 1, 0xffff)? << 16
            }
            opcodes::MOV => inst.opcode | reg_field(inst, 0)? << 8 | reg_field(inst, 1)? << 12,
            opcodes::ADD | opcodes::SUB => {
                inst.opcode
                    | reg_field(inst, 0)? << 8
                    | reg_field(inst, 1)? << 12
                    | reg_field(inst, 2)? << 16
            }
            opcodes::LDW | opcodes::STW => {
                inst.opcode
                    | reg_field(inst, 0)? << 8
                    | reg_field(inst, 1)? << 12
                    | imm_field(inst, 2, 0xff)? << 16
            }
            opcodes::BR => {
                sym_fixup(inst, 0, FixupKind::PcRel, out.len(), fixups)?;
                inst.opcode
            }
            opcodes::BEQ => {
                sym_fixup(inst, 2, FixupKind::PcRel, out.len(), fixups)?;
                inst.opcode | reg_field(inst, 0)? << 8 | reg_field(inst, 1)? << 12
            }
            opcodes::CALL => {
                sym_fixup(inst, 0, FixupKind::Abs, out.len(), fixups)?;
                inst.opcode
            }
            opcodes::FMOVI => {
                inst.opcode | reg_field(inst, 0)? << 8 | fp_field(inst, 1)? << 16
            }
            _ => return Err(EncodeError::UnknownOpcode(inst.opcode)),
        };

        out.extend_from_slice(&word.to_le_bytes());
        Ok(())
    }

    fn reset(&mut self) {}
}

fn reg_field(inst: &Inst, idx: usize) -> Result<u32, EncodeError> {
    match &inst.operands[idx] {
        Operand::Reg(r) => Ok(reg::encoding(*r)),
        _ => Err(EncodeError::BadOperand {
            opcode: inst.opcode,
            index: idx,
        }),
    }
}

/// Integer immediate field, truncated to `mask` width. Truncation rather
/// than range checking is deliberate: observing how out-of-range values
/// fold into the field is what sweeping is for.
fn imm_field(inst: &Inst, idx: usize, mask: u32) -> Result<u32, EncodeError> {
    match &inst.operands[idx] {
        Operand::Imm(v) => Ok(*v as u32 & mask),
        _ => Err(EncodeError::BadOperand {
            opcode: inst.opcode,
            index: idx,
        }),
    }
}

/// Floating immediate field: upper half of the f32 bit pattern (bfloat16).
fn fp_field(inst: &Inst, idx: usize) -> Result<u32, EncodeError> {
    match &inst.operands[idx] {
        Operand::FpImm(v) => Ok((*v as f32).to_bits() >> 16),
        _ => Err(EncodeError::BadOperand {
            opcode: inst.opcode,
            index: idx,
        }),
    }
}

/// Record a fixup for a symbolic operand. The displacement halfword at
/// [31:16] stays zero until resolution, so the fixup offset is the word
/// start plus two.
fn sym_fixup(
    inst: &Inst,
    idx: usize,
    kind: FixupKind,
    word_start: usize,
    fixups: &mut Vec<Fixup>,
) -> Result<(), EncodeError> {
    match &inst.operands[idx] {
        Operand::Expr(expr) => {
            let symbol = match expr {
                Expr::Symbol(name) | Expr::SymbolOffset(name, _) => name.clone(),
                Expr::Target(text) => text.clone(),
            };
            fixups.push(Fixup {
                offset: word_start + 2,
                symbol,
                kind,
            });
            Ok(())
        }
        _ => Err(EncodeError::BadOperand {
            opcode: inst.opcode,
            index: idx,
        }),
    }
}
