// nbs2osu, the command-line NBS to mania beatmap converter.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use nbs_model::NbsDecoder;

#[derive(Parser, Debug)]
#[command(
    name = "nbs2osu",
    about = "Convert Note Block Studio songs to mania beatmaps"
)]
struct Args {
    /// Input .nbs file.
    input: PathBuf,

    /// Destination directory for the emitted beatmap.
    #[arg(default_value = ".")]
    destination: PathBuf,

    /// Override the offset value from the song's embedded properties.
    #[arg(long)]
    offset: Option<f64>,

    /// Print the decoded song as JSON instead of converting.
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.dump {
        let song = NbsDecoder::decode_file(&args.input)
            .with_context(|| format!("decoding {}", args.input.display()))?;
        println!("{}", serde_json::to_string_pretty(&song)?);
        return Ok(());
    }

    info!("converting {}", args.input.display());
    let out_path = nbs2osu_core::convert_file(&args.input, &args.destination, args.offset)
        .with_context(|| format!("converting {}", args.input.display()))?;
    info!("wrote {}", out_path.display());
    Ok(())
}
