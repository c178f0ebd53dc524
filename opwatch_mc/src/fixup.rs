//! Relocation fixups attached to encoded bytes.

/// Kind of fixup, interpreted by the object emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixupKind {
    /// PC-relative displacement field.
    PcRel,
    /// Absolute symbol address field.
    Abs,
}

/// A deferred patch record for a symbolic operand: the encoder emits a
/// placeholder field and leaves resolution to the linker/loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixup {
    /// Byte offset in the output where the patched field starts.
    pub offset: usize,
    /// Symbol the fixup resolves against.
    pub symbol: String,
    /// Kind of fixup.
    pub kind: FixupKind,
}
