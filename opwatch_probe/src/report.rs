//! One-line instruction descriptions with optional descriptor metadata.

use opwatch_mc::backend::TargetInfo;
use opwatch_mc::desc::{FLAG_NAMES, InstrDesc, InstrFlags};
use opwatch_mc::inst::Inst;

use crate::config::ProbeConfig;
use crate::render::{operand_token, reg_token};

/// Column at which descriptor metadata starts in verbose mode.
const META_COLUMN: usize = 60;

/// Describe an instruction: `Op #<opcode> <op0>, <op1>, ...`
pub fn describe_inst(inst: &Inst, info: &dyn TargetInfo, cfg: &ProbeConfig) -> String {
    let mut line = format!("Op #{}", inst.opcode);
    for (i, op) in inst.operands.iter().enumerate() {
        line.push_str(if i == 0 { " " } else { ", " });
        line.push_str(&operand_token(op, info, cfg.raw_reg_numbers));
    }
    line
}

/// Pad `line` to the metadata column and append the descriptor summary:
/// size, def count, operand-count mismatch, scheduling class, raw target
/// flags, named flag bits, and implicit register lists.
pub fn push_desc_meta(line: &mut String, inst: &Inst, desc: &InstrDesc, info: &dyn TargetInfo, cfg: &ProbeConfig) {
    while line.len() < META_COLUMN {
        line.push(' ');
    }
    line.push_str(&format!(" ; Size: {}, Defs: {}", desc.size, desc.num_defs));
    if desc.num_operands as usize != inst.operands.len() {
        line.push_str(&format!(", NumOperands: {}", desc.num_operands));
    }
    if desc.sched_class != 0 {
        line.push_str(&format!(", SchedClass: {}", desc.sched_class));
    }
    if desc.ts_flags != 0 {
        line.push_str(&format!(", TSFlags: {:x}", desc.ts_flags));
    }
    push_flags(line, desc.flags);
    if !desc.implicit_uses.is_empty() {
        line.push_str(", ImplicitUses: ");
        push_reg_list(line, desc.implicit_uses, info, cfg);
    }
    if !desc.implicit_defs.is_empty() {
        line.push_str(", ImplicitDefs: ");
        push_reg_list(line, desc.implicit_defs, info, cfg);
    }
}

/// Append the named-flag list. The two `Extra*RegAllocReq` bits are
/// reported with inverted polarity: every instruction in the targets this
/// tool probes sets them, so their absence is the informative signal.
fn push_flags(line: &mut String, flags: InstrFlags) {
    let inverted =
        flags ^ (InstrFlags::EXTRA_SRC_REG_ALLOC_REQ | InstrFlags::EXTRA_DEF_REG_ALLOC_REQ);
    if inverted.is_empty() {
        return;
    }
    line.push_str(", Flags: ");
    let mut list = BracketList::open(line, inverted.bits().count_ones() as usize);
    for &(bit, name) in FLAG_NAMES {
        if !inverted.contains(bit) {
            continue;
        }
        if bit == InstrFlags::EXTRA_SRC_REG_ALLOC_REQ || bit == InstrFlags::EXTRA_DEF_REG_ALLOC_REQ
        {
            list.item(&format!("!{name}"));
        } else {
            list.item(name);
        }
    }
    list.finish();
}

fn push_reg_list(line: &mut String, regs: &[u32], info: &dyn TargetInfo, cfg: &ProbeConfig) {
    let mut list = BracketList::open(line, regs.len());
    for &reg in regs {
        list.item(&reg_token(reg, info, cfg.raw_reg_numbers));
    }
    list.finish();
}

/// Comma-joined list that is bracket-delimited only when it holds more
/// than one item; a single item prints bare. Manual-diffing workflows rely
/// on this exact convention.
struct BracketList<'a> {
    out: &'a mut String,
    close: bool,
    first: bool,
}

impl<'a> BracketList<'a> {
    fn open(out: &'a mut String, count: usize) -> Self {
        let close = count > 1;
        if close {
            out.push('[');
        }
        Self {
            out,
            close,
            first: true,
        }
    }

    fn item(&mut self, text: &str) {
        if !self.first {
            self.out.push_str(", ");
        }
        self.first = false;
        self.out.push_str(text);
    }

    fn finish(self) {
        if self.close {
            self.out.push(']');
        }
    }
}
