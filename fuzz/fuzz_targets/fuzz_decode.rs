#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try auto-detect decode (Radiance, PFM) — must never panic
    let _ = zenhdr::decode(data, enough::Unstoppable);

    // Try each format explicitly — must never panic
    let _ = zenhdr::decode_radiance(data, enough::Unstoppable);
    let _ = zenhdr::decode_pfm(data, enough::Unstoppable);

    // Header probe — must never panic
    let _ = zenhdr::ImageInfo::from_bytes(data);
});
