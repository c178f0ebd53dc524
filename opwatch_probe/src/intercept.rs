//! Encoder decorator that narrates every instruction it encodes.

use std::io::Write;

use opwatch_mc::backend::{EncodeError, Encoder, SubtargetInfo, TargetInfo};
use opwatch_mc::fixup::Fixup;
use opwatch_mc::inst::Inst;

use crate::config::ProbeConfig;
use crate::{report, sweep};

/// Drop-in [`Encoder`] that wraps the real backend encoder. On every
/// encode call it writes the instruction description and the resulting
/// bytes to the diagnostic stream, then hands the bytes to the caller
/// exactly as the wrapped encoder produced them.
///
/// The wrapped encoder is owned for the lifetime of the run; construction
/// is the single ownership transfer.
pub struct ProbeEncoder<'a, E, W> {
    inner: E,
    info: &'a dyn TargetInfo,
    diag: W,
    cfg: ProbeConfig,
}

impl<'a, E: Encoder, W: Write> ProbeEncoder<'a, E, W> {
    pub fn new(inner: E, info: &'a dyn TargetInfo, diag: W, cfg: ProbeConfig) -> Self {
        Self {
            inner,
            info,
            diag,
            cfg,
        }
    }

    /// Unwrap, handing back the inner encoder and the diagnostic stream.
    pub fn into_inner(self) -> (E, W) {
        (self.inner, self.diag)
    }
}

impl<E: Encoder, W: Write> Encoder for ProbeEncoder<'_, E, W> {
    fn encode(
        &mut self,
        inst: &Inst,
        out: &mut Vec<u8>,
        fixups: &mut Vec<Fixup>,
        sti: &SubtargetInfo,
    ) -> Result<(), EncodeError> {
        let mut line = String::from("Encoding ");
        line.push_str(&report::describe_inst(inst, self.info, &self.cfg));
        if self.cfg.verbose {
            match self.info.instr_desc(inst.opcode) {
                Some(desc) => report::push_desc_meta(&mut line, inst, desc, self.info, &self.cfg),
                None => log::warn!("no descriptor for opcode #{}", inst.opcode),
            }
        }
        writeln!(self.diag, "{line}")?;

        // Encode into a scratch buffer so diagnostics can never interleave
        // with, or corrupt, the caller's output stream.
        let mut scratch = Vec::new();
        self.inner.encode(inst, &mut scratch, fixups, sti)?;

        write!(self.diag, "\tResult:")?;
        for byte in &scratch {
            write!(self.diag, " {byte:02x}")?;
        }
        writeln!(self.diag)?;

        if let Some(spec) = &self.cfg.sweep {
            if spec.opcode == inst.opcode {
                sweep::run(
                    spec,
                    inst,
                    &mut self.inner,
                    self.info,
                    &mut self.diag,
                    &self.cfg,
                    fixups,
                    sti,
                )?;
            }
        }

        out.extend_from_slice(&scratch);
        Ok(())
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}
