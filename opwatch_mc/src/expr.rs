//! Symbolic expression operands.

use std::fmt;

/// A symbolic operand whose value is not known at encode time. The encoder
/// records a fixup for it and emits a placeholder field.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a symbol by name.
    Symbol(String),
    /// Symbol plus a constant byte addend.
    SymbolOffset(String, i64),
    /// Target-specific expression, pre-rendered by the backend.
    Target(String),
}

impl Expr {
    /// Whether this expression is a target-specific variant. The renderer
    /// brackets these so they stand out from ordinary symbol references.
    pub fn is_target_specific(&self) -> bool {
        matches!(self, Self::Target(_))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => write!(f, "{name}"),
            Self::SymbolOffset(name, addend) if *addend >= 0 => {
                write!(f, "{name}+{addend}")
            }
            Self::SymbolOffset(name, addend) => write!(f, "{name}{addend}"),
            Self::Target(text) => write!(f, "{text}"),
        }
    }
}
