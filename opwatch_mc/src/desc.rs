//! Static per-opcode instruction descriptors.

use bitflags::bitflags;

bitflags! {
    /// Property bits carried by an instruction descriptor.
    ///
    /// Bit positions follow the backend instruction table layout; the
    /// declaration order here is also the display order used by the
    /// descriptor reporter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InstrFlags: u64 {
        const VARIADIC = 1 << 0;
        const HAS_OPTIONAL_DEF = 1 << 1;
        const PSEUDO = 1 << 2;
        const RETURN = 1 << 3;
        const CALL = 1 << 4;
        const BARRIER = 1 << 5;
        const TERMINATOR = 1 << 6;
        const BRANCH = 1 << 7;
        const INDIRECT_BRANCH = 1 << 8;
        const COMPARE = 1 << 9;
        const MOVE_IMM = 1 << 10;
        const MOVE_REG = 1 << 11;
        const BITCAST = 1 << 12;
        const SELECT = 1 << 13;
        const DELAY_SLOT = 1 << 14;
        const FOLDABLE_AS_LOAD = 1 << 15;
        const MAY_LOAD = 1 << 16;
        const MAY_STORE = 1 << 17;
        const PREDICABLE = 1 << 18;
        const NOT_DUPLICABLE = 1 << 19;
        const UNMODELED_SIDE_EFFECTS = 1 << 20;
        const COMMUTABLE = 1 << 21;
        const CONVERTIBLE_TO_3_ADDR = 1 << 22;
        const USES_CUSTOM_INSERTER = 1 << 23;
        const HAS_POST_ISEL_HOOK = 1 << 24;
        const REMATERIALIZABLE = 1 << 25;
        const CHEAP_AS_A_MOVE = 1 << 26;
        const EXTRA_SRC_REG_ALLOC_REQ = 1 << 27;
        const EXTRA_DEF_REG_ALLOC_REQ = 1 << 28;
        const REG_SEQUENCE = 1 << 29;
        const EXTRACT_SUBREG = 1 << 30;
        const INSERT_SUBREG = 1 << 31;
        const CONVERGENT = 1 << 32;
        const ADD = 1 << 33;
        const TRAP = 1 << 34;
    }
}

/// Display names for each flag bit, in display order. Used by the
/// descriptor reporter; the two `Extra*RegAllocReq` entries are reported
/// with inverted polarity there.
pub const FLAG_NAMES: &[(InstrFlags, &str)] = &[
    (InstrFlags::VARIADIC, "Variadic"),
    (InstrFlags::HAS_OPTIONAL_DEF, "HasOptionalDef"),
    (InstrFlags::PSEUDO, "Pseudo"),
    (InstrFlags::RETURN, "Return"),
    (InstrFlags::CALL, "Call"),
    (InstrFlags::BARRIER, "Barrier"),
    (InstrFlags::TERMINATOR, "Terminator"),
    (InstrFlags::BRANCH, "Branch"),
    (InstrFlags::INDIRECT_BRANCH, "IndirectBranch"),
    (InstrFlags::COMPARE, "Compare"),
    (InstrFlags::MOVE_IMM, "MoveImm"),
    (InstrFlags::MOVE_REG, "MoveReg"),
    (InstrFlags::BITCAST, "Bitcast"),
    (InstrFlags::SELECT, "Select"),
    (InstrFlags::DELAY_SLOT, "DelaySlot"),
    (InstrFlags::FOLDABLE_AS_LOAD, "FoldableAsLoad"),
    (InstrFlags::MAY_LOAD, "MayLoad"),
    (InstrFlags::MAY_STORE, "MayStore"),
    (InstrFlags::PREDICABLE, "Predicable"),
    (InstrFlags::NOT_DUPLICABLE, "NotDuplicable"),
    (InstrFlags::UNMODELED_SIDE_EFFECTS, "UnmodeledSideEffects"),
    (InstrFlags::COMMUTABLE, "Commutable"),
    (InstrFlags::CONVERTIBLE_TO_3_ADDR, "ConvertibleTo3Addr"),
    (InstrFlags::USES_CUSTOM_INSERTER, "UsesCustomInserter"),
    (InstrFlags::HAS_POST_ISEL_HOOK, "HasPostISelHook"),
    (InstrFlags::REMATERIALIZABLE, "Rematerializable"),
    (InstrFlags::CHEAP_AS_A_MOVE, "CheapAsAMove"),
    (InstrFlags::EXTRA_SRC_REG_ALLOC_REQ, "ExtraSrcRegAllocReq"),
    (InstrFlags::EXTRA_DEF_REG_ALLOC_REQ, "ExtraDefRegAllocReq"),
    (InstrFlags::REG_SEQUENCE, "RegSequence"),
    (InstrFlags::EXTRACT_SUBREG, "ExtractSubreg"),
    (InstrFlags::INSERT_SUBREG, "InsertSubreg"),
    (InstrFlags::CONVERGENT, "Convergent"),
    (InstrFlags::ADD, "Add"),
    (InstrFlags::TRAP, "Trap"),
];

/// Static metadata for one opcode, owned by the backend instruction table.
/// The probe layer only reads it.
#[derive(Debug, Clone)]
pub struct InstrDesc {
    /// Encoded size in bytes.
    pub size: u32,
    /// Declared operand count. May differ from an instruction's actual
    /// operand count (variadic or malformed instructions).
    pub num_operands: u32,
    /// Number of leading def operands.
    pub num_defs: u32,
    /// Scheduling class identifier; 0 means none.
    pub sched_class: u32,
    /// Target-specific flag word, opaque to the probe layer.
    pub ts_flags: u64,
    /// Property bits.
    pub flags: InstrFlags,
    /// Registers read implicitly, outside the operand list.
    pub implicit_uses: &'static [u32],
    /// Registers written implicitly.
    pub implicit_defs: &'static [u32],
}
