//! slimg — subpixel image converter.
//!
//! Packs a PNG into its subpixel form (one third the width, three luma
//! samples per pixel) or expands a packed image back out, with optional
//! vertical rescaling to keep the perceived aspect ratio.

mod convert;
mod info;
mod output;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use subluma::{AlphaMode, LumaWeights, REC_601, REC_709};

/// Arguments for the `convert` subcommand.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input PNG file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output PNG file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Unpack a subpixel image into grayscale columns instead of packing.
    #[arg(short = 'r', long, conflicts_with = "expand")]
    pub reverse: bool,

    /// Unpack a subpixel image into tinted columns instead of packing.
    #[arg(short, long)]
    pub expand: bool,

    /// Rescale the height to compensate for the width change.
    #[arg(short, long)]
    pub aspect: bool,

    /// Luma weighting used when packing.
    #[arg(long, value_enum, default_value_t = WeightsArg::Rec709)]
    pub weights: WeightsArg,

    /// Alpha handling when unpacking to tinted columns.
    #[arg(long, value_enum, default_value_t = AlphaArg::Opaque)]
    pub alpha: AlphaArg,

    /// Allow overwriting an existing output file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `info` subcommand.
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Input files.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Luma weighting scheme.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum WeightsArg {
    /// Rec. 709 weights (0.2126, 0.7152, 0.0722).
    Rec709,
    /// Rec. 601 weights (0.299, 0.587, 0.114).
    Rec601,
}

impl WeightsArg {
    pub fn to_weights(self) -> LumaWeights {
        match self {
            WeightsArg::Rec709 => REC_709,
            WeightsArg::Rec601 => REC_601,
        }
    }
}

/// Alpha policy for the tinted expansion.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlphaArg {
    /// Emit fully opaque pixels.
    Opaque,
    /// Carry the source pixel's alpha into its three output pixels.
    Preserve,
}

impl AlphaArg {
    pub fn to_alpha_mode(self) -> AlphaMode {
        match self {
            AlphaArg::Opaque => AlphaMode::Opaque,
            AlphaArg::Preserve => AlphaMode::Preserve,
        }
    }
}

/// Dispatch CLI arguments.
///
/// Uses a two-pass strategy: first try parsing as a known subcommand, then
/// fall back to treating everything as `convert` arguments (bare flags
/// default).
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let first_arg = args.get(1).map(|s| s.as_str());
    match first_arg {
        Some("convert") => {
            let cmd = ConvertArgs::parse_from(&args[1..]);
            convert::run(cmd)
        }
        Some("info") => {
            let cmd = InfoArgs::parse_from(&args[1..]);
            info::run(cmd)
        }
        Some("help" | "--help" | "-h") | None => {
            print_help();
            Ok(())
        }
        Some("--version" | "-V") => {
            println!("slimg {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(_) => {
            // Bare flags → treat as `convert` args
            let cmd = ConvertArgs::parse_from(
                std::iter::once("convert".to_string()).chain(args[1..].iter().cloned()),
            );
            convert::run(cmd)
        }
    }
}

fn print_help() {
    eprintln!(
        "\
slimg {} — subpixel image converter

USAGE:
    slimg [COMMAND] [OPTIONS]

COMMANDS:
    convert    Pack an image into subpixel form, or unpack one (default)
    info       Probe and display image metadata

Bare flags default to `convert`, which packs unless -r or -e is given.

EXAMPLES:
    slimg -i photo.png -o packed.png              Pack to 1/3 width
    slimg -i packed.png -o gray.png -r            Unpack to grayscale columns
    slimg -i packed.png -o color.png -e -a        Unpack to tinted columns, fix aspect
    slimg convert -i in.png -o out.png --weights rec601
    slimg info packed.png

Run `slimg convert --help` or `slimg info --help` for full options.",
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_and_expand_conflict() {
        let result = ConvertArgs::try_parse_from([
            "convert", "-i", "in.png", "-o", "out.png", "-r", "-e",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn input_and_output_are_required() {
        assert!(ConvertArgs::try_parse_from(["convert"]).is_err());
        assert!(ConvertArgs::try_parse_from(["convert", "-i", "in.png"]).is_err());
    }

    #[test]
    fn defaults_pack_with_rec709() {
        let args =
            ConvertArgs::try_parse_from(["convert", "-i", "in.png", "-o", "out.png"]).unwrap();
        assert!(!args.reverse);
        assert!(!args.expand);
        assert!(!args.aspect);
        assert!(matches!(args.weights, WeightsArg::Rec709));
        assert!(matches!(args.alpha, AlphaArg::Opaque));
    }

    #[test]
    fn long_and_short_selectors_parse() {
        let args = ConvertArgs::try_parse_from([
            "convert",
            "--input",
            "in.png",
            "--output",
            "out.png",
            "--reverse",
            "--aspect",
            "--weights",
            "rec601",
        ])
        .unwrap();
        assert!(args.reverse);
        assert!(args.aspect);
        assert!(matches!(args.weights, WeightsArg::Rec601));
    }
}
