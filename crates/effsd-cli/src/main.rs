//! `effsd` — pack and unpack the eight Ver4 color/type fields piggybacked
//! onto a Ver3 Mii data core.

mod error;
mod io;

use clap::{Parser, Subcommand};
use effsd_core::{Ver4Extension, pack, unpack};
use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "effsd", about = "Ver3/Ver4 Mii color-index packing codec")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pack eight Ver4 color/type values into a Ver3 Mii file.
    Pack {
        input_mii_file: String,
        output_mii_file: String,
        faceline_color: u8,
        hair_color: u8,
        eye_color: u8,
        eyebrow_color: u8,
        mouth_color: u8,
        beard_color: u8,
        glass_color: u8,
        glass_type: u8,
    },
    /// Unpack and print the eight Ver4 color/type values from a Ver3 Mii file.
    Unpack { input_mii_file: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Pack {
            input_mii_file,
            output_mii_file,
            faceline_color,
            hair_color,
            eye_color,
            eyebrow_color,
            mouth_color,
            beard_color,
            glass_color,
            glass_type,
        } => run_pack(
            &input_mii_file,
            &output_mii_file,
            faceline_color,
            hair_color,
            eye_color,
            eyebrow_color,
            mouth_color,
            beard_color,
            glass_color,
            glass_type,
        ),
        Command::Unpack { input_mii_file } => run_unpack(&input_mii_file),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_pack(
    input: &str,
    output: &str,
    faceline_color: u8,
    hair_color: u8,
    eye_color: u8,
    eyebrow_color: u8,
    mouth_color: u8,
    beard_color: u8,
    glass_color: u8,
    glass_type: u8,
) -> CliResult<()> {
    check_range("facelineColor", faceline_color, 9)?;
    check_range("hairColor", hair_color, 99)?;
    check_range("eyeColor", eye_color, 99)?;
    check_range("eyebrowColor", eyebrow_color, 99)?;
    check_range("mouthColor", mouth_color, 99)?;
    check_range("beardColor", beard_color, 99)?;
    check_range("glassColor", glass_color, 99)?;
    check_range("glassType", glass_type, 19)?;

    let bytes = io::read_mii_file(input)?;
    let mut record = effsd_core::Ver3Record::new(bytes);

    let ver4 = Ver4Extension {
        faceline_color,
        hair_color,
        eye_color,
        eyebrow_color,
        mouth_color,
        beard_color,
        glass_color,
        glass_type,
    };
    tracing::debug!(?ver4, "packing");
    pack(&ver4, &mut record);

    io::write_mii_file(output, record.as_bytes())?;
    Ok(())
}

fn run_unpack(input: &str) -> CliResult<()> {
    let bytes = io::read_mii_file(input)?;
    let record = effsd_core::Ver3Record::new(bytes);
    let ver4 = unpack(&record);
    tracing::debug!(?ver4, "unpacked");

    println!("Faceline Color: {}", ver4.faceline_color);
    println!("Hair Color:     {}", ver4.hair_color);
    println!("Eye Color:      {}", ver4.eye_color);
    println!("Eyebrow Color:  {}", ver4.eyebrow_color);
    println!("Mouth Color:    {}", ver4.mouth_color);
    println!("Beard Color:    {}", ver4.beard_color);
    println!("Glass Color:    {}", ver4.glass_color);
    println!("Glass Type:     {}", ver4.glass_type);
    Ok(())
}

fn check_range(field: &'static str, value: u8, max: u32) -> CliResult<()> {
    let value = value as u32;
    if value > max {
        return Err(CliError::Range {
            field,
            got: value,
            max,
        });
    }
    Ok(())
}
