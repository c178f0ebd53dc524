//! Encoder and target-info contracts implemented by backends.

use thiserror::Error;

use crate::desc::InstrDesc;
use crate::fixup::Fixup;
use crate::inst::Inst;

/// Subtarget selection passed through to the encoder on every call.
#[derive(Debug, Clone, Default)]
pub struct SubtargetInfo {
    pub cpu: String,
    pub features: String,
}

/// Errors surfaced by an encoder. Wrappers propagate these unchanged; no
/// layer between the backend and the driver is allowed to swallow them.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("unknown opcode #{0}")]
    UnknownOpcode(u32),
    #[error("opcode #{opcode}: operand {index} has the wrong kind")]
    BadOperand { opcode: u32, index: usize },
    #[error("opcode #{opcode}: expected {expected} operands, got {actual}")]
    OperandCount {
        opcode: u32,
        expected: u32,
        actual: usize,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The byte-encoding contract shared by real backend encoders and any
/// decorator standing in for one.
pub trait Encoder {
    /// Append the encoding of `inst` to `out`, recording a fixup for every
    /// operand field that cannot be resolved yet. Each call is an
    /// independent encode; results are never cached.
    fn encode(
        &mut self,
        inst: &Inst,
        out: &mut Vec<u8>,
        fixups: &mut Vec<Fixup>,
        sti: &SubtargetInfo,
    ) -> Result<(), EncodeError>;

    /// Drop any internal encoder state between compilation units.
    fn reset(&mut self);
}

/// Read-only target metadata consumed by the diagnostic layer.
pub trait TargetInfo {
    /// Display name for a register index, if the index is in range.
    fn reg_name(&self, reg: u32) -> Option<&str>;

    /// Static descriptor for an opcode, if the opcode is known.
    fn instr_desc(&self, opcode: u32) -> Option<&InstrDesc>;
}
