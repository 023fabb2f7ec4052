//! `ppc-sigscan-harness` — loads a `.text` section out of a real PowerPC
//! ELF object and reports its extent, for exercising `ppc-sigscan` against
//! real binaries during development.

use std::path::PathBuf;

use clap::Parser;
use ppc_sigscan_harness::{HarnessResult, load_section};

#[derive(Parser)]
#[command(name = "ppc-sigscan-harness", about = "Inspects a PowerPC ELF's .text section")]
struct Cli {
    /// Path to the ELF32 big-endian object file.
    #[arg(long)]
    elf: PathBuf,

    /// Section to load.
    #[arg(long, default_value = ".text")]
    section: String,

    /// Overrides the section's effective address from the ELF (for
    /// testing against a relocated or stripped image).
    #[arg(long)]
    text_base: Option<u64>,
}

fn main() -> HarnessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (bytes, sh_addr) = load_section(&cli.elf, &cli.section)?;
    let text_base = cli.text_base.unwrap_or(sh_addr);

    tracing::info!(
        section = %cli.section,
        len = bytes.len(),
        text_base,
        "loaded section"
    );
    println!("{}: {} bytes at {:#010x}", cli.section, bytes.len(), text_base);
    Ok(())
}
