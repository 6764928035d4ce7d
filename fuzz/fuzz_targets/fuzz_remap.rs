#![no_main]

// Structural laws of the three transforms over arbitrary grids: output
// dimensions, alpha policy, and the gray expansion's equal channels.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use subluma::{AlphaMode, LumaWeights, PixelGrid, Remapper, Rgba, OPAQUE};

#[derive(Clone, Debug, Arbitrary)]
struct RemapInput {
    width: u8,
    height: u8,
    weights: [u8; 3],
    pixels: Vec<(u8, u8, u8, u8)>,
}

fuzz_target!(|input: RemapInput| {
    let width = input.width as usize;
    let height = input.height as usize;

    let mut pixels: Vec<Rgba<u8>> = input
        .pixels
        .iter()
        .map(|&(r, g, b, a)| Rgba::new(r, g, b, a))
        .collect();
    pixels.resize(width * height, Rgba::new(0, 0, 0, OPAQUE));
    let grid = PixelGrid::new(pixels, width, height).unwrap();

    let weights = LumaWeights {
        r: f32::from(input.weights[0]) / 255.0,
        g: f32::from(input.weights[1]) / 255.0,
        b: f32::from(input.weights[2]) / 255.0,
    };
    let remapper = Remapper::new().with_weights(weights);

    let packed = remapper.compress(&grid);
    assert_eq!(packed.width(), width.div_ceil(3));
    assert_eq!(packed.height(), height);
    assert!(packed.pixels().iter().all(|p| p.a == OPAQUE));

    let gray = remapper.expand_to_gray(&packed);
    assert_eq!(gray.width(), packed.width() * 3);
    assert_eq!(gray.height(), height);
    assert!(gray.pixels().iter().all(|p| p.r == p.g && p.g == p.b && p.a == OPAQUE));

    let preserved = Remapper::new()
        .with_alpha(AlphaMode::Preserve)
        .expand_to_color(&grid);
    assert_eq!(preserved.width(), width * 3);
    assert_eq!(preserved.height(), height);
    for (source, triplet) in grid.pixels().iter().zip(preserved.pixels().chunks_exact(3)) {
        assert!(triplet.iter().all(|p| p.a == source.a));
    }
});
