//! Register definitions for the toy target.

/// Display names, indexed by register number.
pub const REG_NAMES: [&str; 16] = [
    "zero", "ra", "sp", "gp", "a0", "a1", "a2", "a3", "s0", "s1", "s2", "s3", "t0", "t1", "t2",
    "t3",
];

/// Return address register.
pub const RA: u32 = 1;
/// Stack pointer register.
pub const SP: u32 = 2;

/// Display name for a register index, if in range.
pub fn name(reg: u32) -> Option<&'static str> {
    REG_NAMES.get(reg as usize).copied()
}

/// Hardware encoding: a 4-bit register field. Out-of-range indices wrap.
pub fn encoding(reg: u32) -> u32 {
    reg & 0xf
}
