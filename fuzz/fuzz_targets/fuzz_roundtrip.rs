#![no_main]
use libfuzzer_sys::fuzz_target;
use zenhdr::*;

fuzz_target!(|data: &[u8]| {
    let Ok(first) = decode(data, enough::Unstoppable) else {
        return;
    };

    match first.format {
        ImageFormat::Pfm => {
            // Lossless: one re-encode must reproduce every sample bit for
            // bit, NaN payloads included.
            let bytes = encode_pfm(first.pixels(), first.width, first.height, enough::Unstoppable)
                .expect("decoded PFM failed to re-encode");
            let second = decode(&bytes, enough::Unstoppable).expect("re-encoded PFM failed to decode");
            assert_eq!(first.pixels().len(), second.pixels().len());
            for (a, b) in first.pixels().iter().zip(second.pixels()) {
                assert_eq!(a.to_bits(), b.to_bits(), "PFM roundtrip not bit-exact");
            }
        }
        ImageFormat::Radiance => {
            // Arbitrary input may hold non-canonical RGBE quads, so the
            // first re-encode may renormalize; after that the data must be
            // a fixed point, except that values hugging the black threshold
            // may decay to exact zero once.
            let reencode = |px: &[f32]| {
                encode_radiance(px, first.width, first.height, enough::Unstoppable)
                    .expect("decoded RGBE failed to re-encode")
            };
            let second =
                decode(&reencode(first.pixels()), enough::Unstoppable).expect("re-encode broke decode");
            let third =
                decode(&reencode(second.pixels()), enough::Unstoppable).expect("re-encode broke decode");
            assert_eq!(second.pixels().len(), third.pixels().len());
            for (a, b) in second.pixels().iter().zip(third.pixels()) {
                assert!(
                    a.to_bits() == b.to_bits() || (*a < 2e-32 && *b < 2e-32),
                    "RGBE roundtrip not stable: {a} vs {b}"
                );
            }
        }
        _ => {}
    }
});
