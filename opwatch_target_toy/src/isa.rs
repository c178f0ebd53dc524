//! Opcode table and static instruction descriptors for the toy target.

use opwatch_mc::backend::TargetInfo;
use opwatch_mc::desc::{InstrDesc, InstrFlags};

use crate::reg;

pub mod opcodes {
    pub const NOP: u32 = 0;
    pub const MOVI: u32 = 1;
    pub const MOV: u32 = 2;
    pub const ADD: u32 = 3;
    pub const SUB: u32 = 4;
    pub const LDW: u32 = 5;
    pub const STW: u32 = 6;
    pub const BR: u32 = 7;
    pub const BEQ: u32 = 8;
    pub const CALL: u32 = 9;
    pub const RET: u32 = 10;
    pub const FMOVI: u32 = 11;
    pub const TRAP: u32 = 12;
}

/// Every toy instruction sets both alloc-req bits, like the production
/// targets this tool was built to probe.
const ALLOC: InstrFlags =
    InstrFlags::EXTRA_SRC_REG_ALLOC_REQ.union(InstrFlags::EXTRA_DEF_REG_ALLOC_REQ);

const IMPLICIT_NONE: &[u32] = &[];
const IMPLICIT_RA: &[u32] = &[reg::RA];
const IMPLICIT_SP: &[u32] = &[reg::SP];

const fn desc(
    num_operands: u32,
    num_defs: u32,
    sched_class: u32,
    ts_flags: u64,
    flags: InstrFlags,
    implicit_uses: &'static [u32],
    implicit_defs: &'static [u32],
) -> InstrDesc {
    InstrDesc {
        size: 4,
        num_operands,
        num_defs,
        sched_class,
        ts_flags,
        flags,
        implicit_uses,
        implicit_defs,
    }
}

/// Descriptor table, indexed by opcode.
pub static DESCS: [InstrDesc; 13] = [
    // nop
    desc(0, 0, 0, 0, ALLOC, IMPLICIT_NONE, IMPLICIT_NONE),
    // movi rd, imm16
    desc(
        2,
        1,
        1,
        0x1,
        InstrFlags::MOVE_IMM
            .union(InstrFlags::REMATERIALIZABLE)
            .union(InstrFlags::CHEAP_AS_A_MOVE)
            .union(ALLOC),
        IMPLICIT_NONE,
        IMPLICIT_NONE,
    ),
    // mov rd, rs
    desc(
        2,
        1,
        1,
        0x1,
        InstrFlags::MOVE_REG
            .union(InstrFlags::CHEAP_AS_A_MOVE)
            .union(ALLOC),
        IMPLICIT_NONE,
        IMPLICIT_NONE,
    ),
    // add rd, rs, rt
    desc(
        3,
        1,
        1,
        0x1,
        InstrFlags::COMMUTABLE.union(InstrFlags::ADD).union(ALLOC),
        IMPLICIT_NONE,
        IMPLICIT_NONE,
    ),
    // sub rd, rs, rt
    desc(3, 1, 1, 0x1, ALLOC, IMPLICIT_NONE, IMPLICIT_NONE),
    // ldw rd, rs, imm8
    desc(
        3,
        1,
        2,
        0x2,
        InstrFlags::MAY_LOAD.union(ALLOC),
        IMPLICIT_NONE,
        IMPLICIT_NONE,
    ),
    // stw rs, rt, imm8
    desc(
        3,
        0,
        2,
        0x2,
        InstrFlags::MAY_STORE.union(ALLOC),
        IMPLICIT_NONE,
        IMPLICIT_NONE,
    ),
    // br target
    desc(
        1,
        0,
        3,
        0x4,
        InstrFlags::BRANCH
            .union(InstrFlags::TERMINATOR)
            .union(InstrFlags::BARRIER)
            .union(ALLOC),
        IMPLICIT_NONE,
        IMPLICIT_NONE,
    ),
    // beq rs, rt, target
    desc(
        3,
        0,
        3,
        0x4,
        InstrFlags::BRANCH
            .union(InstrFlags::TERMINATOR)
            .union(InstrFlags::COMPARE)
            .union(ALLOC),
        IMPLICIT_NONE,
        IMPLICIT_NONE,
    ),
    // call target
    desc(
        1,
        0,
        3,
        0x4,
        InstrFlags::CALL.union(ALLOC),
        IMPLICIT_SP,
        IMPLICIT_RA,
    ),
    // ret
    desc(
        0,
        0,
        3,
        0x4,
        InstrFlags::RETURN
            .union(InstrFlags::TERMINATOR)
            .union(InstrFlags::BARRIER)
            .union(ALLOC),
        IMPLICIT_RA,
        IMPLICIT_NONE,
    ),
    // fmovi rd, fimm
    desc(
        2,
        1,
        1,
        0x8,
        InstrFlags::MOVE_IMM.union(ALLOC),
        IMPLICIT_NONE,
        IMPLICIT_NONE,
    ),
    // trap
    desc(
        0,
        0,
        0,
        0,
        InstrFlags::TRAP
            .union(InstrFlags::UNMODELED_SIDE_EFFECTS)
            .union(ALLOC),
        IMPLICIT_NONE,
        IMPLICIT_NONE,
    ),
];

/// Target metadata handle for the toy ISA.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToyTarget;

impl TargetInfo for ToyTarget {
    fn reg_name(&self, reg: u32) -> Option<&str> {
        reg::name(reg)
    }

    fn instr_desc(&self, opcode: u32) -> Option<&InstrDesc> {
        DESCS.get(opcode as usize)
    }
}
