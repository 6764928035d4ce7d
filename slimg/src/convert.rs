//! The convert pipeline: decode → optional pre-scale → remap → optional
//! post-scale → encode.

use anyhow::Context;
use subluma::{encode_png, resize_bilinear, DecodeRequest, Remapper};

use crate::output;
use crate::ConvertArgs;

/// Which remapping a convert run performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Pack,
    UnpackGray,
    UnpackColor,
}

impl Direction {
    fn from_args(args: &ConvertArgs) -> Direction {
        if args.reverse {
            Direction::UnpackGray
        } else if args.expand {
            Direction::UnpackColor
        } else {
            Direction::Pack
        }
    }
}

/// Run the `convert` subcommand.
pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let data = std::fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let input_size = data.len() as u64;

    let decoded = DecodeRequest::new(&data)
        .decode()
        .with_context(|| format!("decoding {}", args.input.display()))?;

    let direction = Direction::from_args(&args);
    let remapper = Remapper::new()
        .with_weights(args.weights.to_weights())
        .with_alpha(args.alpha.to_alpha_mode());

    // Packing shrinks the width threefold; -a shrinks the height to match
    // before packing, or stretches it back after unpacking.
    let mut grid = decoded.grid;
    if args.aspect && direction == Direction::Pack {
        grid = resize_bilinear(&grid, grid.width(), grid.height() / 3);
    }

    let mut result = match direction {
        Direction::Pack => remapper.compress(&grid),
        Direction::UnpackGray => remapper.expand_to_gray(&grid),
        Direction::UnpackColor => remapper.expand_to_color(&grid),
    };

    if args.aspect && direction != Direction::Pack {
        result = resize_bilinear(&result, result.width(), result.height() * 3);
    }

    let encoded = encode_png(&result)
        .with_context(|| format!("encoding {}", args.output.display()))?;

    output::check_writable(&args.input, &args.output, args.force)?;
    output::ensure_parent(&args.output)?;
    std::fs::write(&args.output, &encoded)
        .with_context(|| format!("writing {}", args.output.display()))?;

    eprintln!(
        "{} -> {} ({})",
        output::format_size(input_size),
        output::format_size(encoded.len() as u64),
        args.output.display(),
    );

    Ok(())
}
