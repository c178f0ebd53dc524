//! Probe configuration and sweep specification parsing.

use std::str::FromStr;

use thiserror::Error;

/// Errors produced while interpreting configuration, before any
/// instruction is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sweep spec needs four comma-separated fields, got {0}")]
    FieldCount(usize),
    #[error("bad {field} in sweep spec: {value:?}")]
    BadField { field: &'static str, value: String },
}

/// One sweep request: drive one operand of one opcode across a range.
///
/// Parsed once at startup from `opcode,operandIndex,low,high`; immutable
/// thereafter. The bounds are kept both as integers and as floats; the
/// float pair is consulted only when the targeted operand turns out to be
/// a floating immediate.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSpec {
    pub opcode: u32,
    pub operand: usize,
    pub lo: i64,
    pub hi: i64,
    pub fp_lo: f64,
    pub fp_hi: f64,
}

impl FromStr for SweepSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(ConfigError::FieldCount(fields.len()));
        }
        let opcode = fields[0].parse().map_err(|_| ConfigError::BadField {
            field: "opcode",
            value: fields[0].to_string(),
        })?;
        let operand = fields[1].parse().map_err(|_| ConfigError::BadField {
            field: "operand index",
            value: fields[1].to_string(),
        })?;
        let (lo, fp_lo) = parse_bound("low bound", fields[2])?;
        let (hi, fp_hi) = parse_bound("high bound", fields[3])?;
        Ok(Self {
            opcode,
            operand,
            lo,
            hi,
            fp_lo,
            fp_hi,
        })
    }
}

/// Parse one bound as both integer and float. A fractional bound like
/// `0.5` is valid; its integer reading is the truncated value.
fn parse_bound(field: &'static str, s: &str) -> Result<(i64, f64), ConfigError> {
    let fp: f64 = s.parse().map_err(|_| ConfigError::BadField {
        field,
        value: s.to_string(),
    })?;
    let int = s.parse::<i64>().unwrap_or(fp as i64);
    Ok((int, fp))
}

/// Settings consumed by the diagnostic layer. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct ProbeConfig {
    /// Render registers as `r<index>` instead of their symbolic names.
    /// Useful when preparing sweep input, which is index-based.
    pub raw_reg_numbers: bool,
    /// Append descriptor size/flag/scheduling metadata to every
    /// instruction description.
    pub verbose: bool,
    /// Optional sweep request, triggered on matching opcodes.
    pub sweep: Option<SweepSpec>,
}
