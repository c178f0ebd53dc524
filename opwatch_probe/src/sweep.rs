//! Exploratory re-encoding with one operand driven across a value range.

use std::io::Write;

use opwatch_mc::backend::{EncodeError, Encoder, SubtargetInfo, TargetInfo};
use opwatch_mc::fixup::Fixup;
use opwatch_mc::inst::{Inst, Operand};

use crate::config::{ProbeConfig, SweepSpec};
use crate::report;

/// Column at which the hex bytes start on a sweep line.
const BYTES_COLUMN: usize = 40;

/// Run one sweep over `inst`.
///
/// The caller's instruction is read-only; a single working copy is
/// mutated in place per iteration. `encoder` must be the real backend
/// encoder, not the interceptor, so a sweep iteration can never trigger
/// another sweep.
#[allow(clippy::too_many_arguments)]
pub fn run<E: Encoder, W: Write>(
    spec: &SweepSpec,
    inst: &Inst,
    encoder: &mut E,
    info: &dyn TargetInfo,
    diag: &mut W,
    cfg: &ProbeConfig,
    fixups: &mut Vec<Fixup>,
    sti: &SubtargetInfo,
) -> Result<(), EncodeError> {
    let idx = spec.operand;
    if idx >= inst.operands.len() {
        writeln!(
            diag,
            "Opcode #{} didn't have {} operands",
            inst.opcode,
            idx + 1
        )?;
        return Ok(());
    }

    let mut probe = inst.clone();

    // Floating operands get exactly two probes: the configured low and
    // high float bounds.
    if matches!(probe.operands[idx], Operand::FpImm(_)) {
        for value in [spec.fp_lo, spec.fp_hi] {
            probe.operands[idx] = Operand::FpImm(value);
            encode_one(&probe, encoder, info, diag, cfg, fixups, sti)?;
        }
        return Ok(());
    }

    for value in spec.lo..spec.hi {
        probe.operands[idx] = match probe.operands[idx] {
            Operand::Reg(_) => Operand::Reg(value as u32),
            Operand::Imm(_) => Operand::Imm(value),
            _ => {
                writeln!(
                    diag,
                    "Opcode #{} operand {}'s kind isn't supported for sweeping",
                    inst.opcode, idx
                )?;
                return Ok(());
            }
        };
        encode_one(&probe, encoder, info, diag, cfg, fixups, sti)?;
    }
    Ok(())
}

/// Encode one probe variant and print `description => bytes` as a
/// two-column line.
fn encode_one<E: Encoder, W: Write>(
    probe: &Inst,
    encoder: &mut E,
    info: &dyn TargetInfo,
    diag: &mut W,
    cfg: &ProbeConfig,
    fixups: &mut Vec<Fixup>,
    sti: &SubtargetInfo,
) -> Result<(), EncodeError> {
    let mut line = report::describe_inst(probe, info, cfg);

    let mut bytes = Vec::new();
    encoder.encode(probe, &mut bytes, fixups, sti)?;

    while line.len() < BYTES_COLUMN {
        line.push(' ');
    }
    line.push_str(" =>");
    for byte in &bytes {
        line.push_str(&format!(" {byte:02x}"));
    }
    writeln!(diag, "{line}")?;
    Ok(())
}
