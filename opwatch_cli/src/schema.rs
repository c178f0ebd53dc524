//! JSON schema for instruction listings.

use serde::Deserialize;

use opwatch_mc::expr::Expr;
use opwatch_mc::inst::{Inst, Operand};

/// Top-level listing: optional subtarget selection plus the instruction
/// stream, in encode order.
#[derive(Debug, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub cpu: String,
    #[serde(default)]
    pub features: String,
    pub insts: Vec<InstSpec>,
}

#[derive(Debug, Deserialize)]
pub struct InstSpec {
    pub opcode: u32,
    #[serde(default)]
    pub operands: Vec<OperandSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OperandSpec {
    Reg {
        index: u32,
    },
    Imm {
        value: i64,
    },
    Fp {
        value: f64,
    },
    Symbol {
        name: String,
        #[serde(default)]
        offset: i64,
    },
    Invalid,
}

impl InstSpec {
    pub fn to_inst(&self) -> Inst {
        Inst::new(
            self.opcode,
            self.operands.iter().map(OperandSpec::to_operand).collect(),
        )
    }
}

impl OperandSpec {
    fn to_operand(&self) -> Operand {
        match self {
            OperandSpec::Reg { index } => Operand::Reg(*index),
            OperandSpec::Imm { value } => Operand::Imm(*value),
            OperandSpec::Fp { value } => Operand::FpImm(*value),
            OperandSpec::Symbol { name, offset: 0 } => Operand::Expr(Expr::Symbol(name.clone())),
            OperandSpec::Symbol { name, offset } => {
                Operand::Expr(Expr::SymbolOffset(name.clone(), *offset))
            }
            OperandSpec::Invalid => Operand::Invalid,
        }
    }
}
