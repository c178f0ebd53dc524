//! ELF object file emission using the `object` crate.

use std::collections::HashMap;

use anyhow::Context;
use object::write::{Object, Relocation as ObjRelocation, Symbol, SymbolId, SymbolSection};
use object::{
    Architecture, BinaryFormat, Endianness, RelocationEncoding, RelocationFlags, RelocationKind,
    SymbolFlags, SymbolKind, SymbolScope,
};

use opwatch_mc::fixup::{Fixup, FixupKind};

/// Emit the assembled bytes as a single-section ELF object. Fixups become
/// 16-bit relocations against undefined symbols; resolution is the
/// linker's problem, not ours.
pub fn emit_elf(code: &[u8], fixups: &[Fixup]) -> anyhow::Result<Vec<u8>> {
    let mut obj = Object::new(BinaryFormat::Elf, Architecture::Unknown, Endianness::Little);
    let text = obj.section_id(object::write::StandardSection::Text);
    obj.append_section_data(text, code, 4);

    let mut sym_map: HashMap<&str, SymbolId> = HashMap::new();
    for fixup in fixups {
        let sym_id = match sym_map.get(fixup.symbol.as_str()) {
            Some(&existing) => existing,
            None => {
                let sid = obj.add_symbol(Symbol {
                    name: fixup.symbol.as_bytes().to_vec(),
                    value: 0,
                    size: 0,
                    kind: SymbolKind::Text,
                    scope: SymbolScope::Unknown,
                    weak: false,
                    section: SymbolSection::Undefined,
                    flags: SymbolFlags::None,
                });
                sym_map.insert(&fixup.symbol, sid);
                sid
            }
        };

        let kind = match fixup.kind {
            FixupKind::PcRel => RelocationKind::Relative,
            FixupKind::Abs => RelocationKind::Absolute,
        };
        obj.add_relocation(
            text,
            ObjRelocation {
                offset: fixup.offset as u64,
                symbol: sym_id,
                addend: 0,
                flags: RelocationFlags::Generic {
                    kind,
                    encoding: RelocationEncoding::Generic,
                    size: 16,
                },
            },
        )
        .with_context(|| format!("relocation against {:?} at offset {}", fixup.symbol, fixup.offset))?;
    }

    let mut buf = Vec::new();
    obj.emit(&mut buf).context("emitting ELF object")?;
    Ok(buf)
}
