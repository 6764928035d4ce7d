#![no_main]

// Arbitrary bytes must never panic the decoder. Anything that does decode
// is packed and re-encoded, and the PNG round trip must be lossless.

use libfuzzer_sys::fuzz_target;
use subluma::{encode_png, DecodeRequest, Limits, Remapper};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };

    let Ok(output) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };

    let packed = Remapper::new().compress(&output.grid);
    assert_eq!(packed.width(), output.grid.width().div_ceil(3));
    assert_eq!(packed.height(), output.grid.height());

    let encoded = encode_png(&packed).unwrap();
    let reread = DecodeRequest::new(&encoded).decode().unwrap();
    assert_eq!(reread.grid, packed);
});
