//! Image inspection — probe and display metadata without decoding.

use std::path::Path;

use crate::output;
use crate::InfoArgs;

/// Run the `info` subcommand.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let multi = args.files.len() > 1;
    let mut failures = 0usize;

    for (i, path) in args.files.iter().enumerate() {
        if multi {
            if i > 0 {
                println!();
            }
            println!("{}:", path.display());
        }

        if let Err(e) = inspect_file(path) {
            eprintln!("  error: {e:#}");
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} files could not be probed", args.files.len());
    }
    Ok(())
}

/// Probe a single file and print its header fields.
fn inspect_file(path: &Path) -> anyhow::Result<()> {
    let data = std::fs::read(path)?;
    let file_size = data.len() as u64;

    let info = subluma::probe(&data)?;

    println!("  Dimensions:   {}x{}", info.width, info.height);
    println!("  Bit depth:    {}", info.bit_depth);
    println!(
        "  Alpha:        {}",
        if info.has_alpha { "yes" } else { "no" }
    );
    println!("  Packed width: {}", info.width.div_ceil(3));
    println!("  File size:    {}", output::format_size(file_size));
    Ok(())
}
