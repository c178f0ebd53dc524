//! CLI driver: encode a JSON instruction listing through the probe,
//! narrating every instruction to stdout.

mod emit;
mod schema;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use opwatch_mc::backend::{Encoder, SubtargetInfo};
use opwatch_probe::config::{ProbeConfig, SweepSpec};
use opwatch_probe::intercept::ProbeEncoder;
use opwatch_target_toy::encode::ToyEncoder;
use opwatch_target_toy::isa::ToyTarget;

#[derive(Debug, Parser)]
#[command(
    name = "opwatch",
    about = "Narrating encoder probe for instruction listings"
)]
struct Args {
    /// Input listing (JSON); `-` reads stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Write the assembled bytes to this path as an ELF object.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print registers as raw `r<index>` tokens instead of names.
    #[arg(long)]
    no_register_names: bool,

    /// Append descriptor metadata to every encoded instruction.
    #[arg(long)]
    print_scheduling_info: bool,

    /// Re-encode one opcode with one operand driven across a range.
    #[arg(long, value_name = "OPCODE,INDEX,LOW,HIGH")]
    sweep: Option<SweepSpec>,
}

fn read_listing(input: &str) -> anyhow::Result<schema::Listing> {
    let text = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };
    serde_json::from_str(&text).context("parsing listing JSON")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let listing = read_listing(&args.input)?;
    log::debug!(
        "listing: {} instructions, cpu {:?}",
        listing.insts.len(),
        listing.cpu
    );
    let sti = SubtargetInfo {
        cpu: listing.cpu.clone(),
        features: listing.features.clone(),
    };

    let cfg = ProbeConfig {
        raw_reg_numbers: args.no_register_names,
        verbose: args.print_scheduling_info,
        sweep: args.sweep,
    };

    let target = ToyTarget;
    let stdout = io::stdout();
    let mut probe = ProbeEncoder::new(ToyEncoder, &target, stdout.lock(), cfg);

    let mut code = Vec::new();
    let mut fixups = Vec::new();
    for (i, spec) in listing.insts.iter().enumerate() {
        let inst = spec.to_inst();
        probe
            .encode(&inst, &mut code, &mut fixups, &sti)
            .with_context(|| format!("encoding instruction {i}"))?;
    }
    let (_, mut diag) = probe.into_inner();

    match &args.output {
        Some(path) => {
            let elf = emit::emit_elf(&code, &fixups)?;
            fs::write(path, &elf).with_context(|| format!("writing {}", path.display()))?;
            writeln!(diag, "Assembled {} bytes -> {}", code.len(), path.display())?;
        }
        None => writeln!(diag, "Assembled {} bytes (use -o to save)", code.len())?,
    }
    Ok(())
}
