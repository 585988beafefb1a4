#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Radiance 8x1, one run token per plane
    let mut hdr = b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n-Y 1 +X 8\n".to_vec();
    hdr.extend_from_slice(&[2, 2, 0, 8]);
    hdr.extend_from_slice(&[136, 200, 136, 128, 136, 40, 136, 129]);
    fs::write(format!("{dir}/hdr_8x1.hdr"), hdr).unwrap();

    // Radiance 8x1 with metadata lines and literal tokens
    let mut hdr_meta =
        b"#?RGBE\nGAMMA=2.2\nEXPOSURE=1.0\nPRIMARIES=0.64 0.33 0.30 0.60 0.15 0.06 0.3127 0.3290\nFORMAT=32-bit_rle_rgbe\n\n-Y 1 +X 8\n"
            .to_vec();
    hdr_meta.extend_from_slice(&[2, 2, 0, 8]);
    hdr_meta.extend_from_slice(&[8, 1, 2, 3, 4, 5, 6, 7, 8]); // R literal
    hdr_meta.extend_from_slice(&[136, 128]); // G run
    hdr_meta.extend_from_slice(&[4, 9, 9, 9, 9, 132, 9]); // B literal + run
    hdr_meta.extend_from_slice(&[136, 130]); // E run
    fs::write(format!("{dir}/hdr_meta_8x1.hdr"), hdr_meta).unwrap();

    // PFM RGB 2x2
    let mut pfm = b"PF\n2 2\n-1.0\n".to_vec();
    for i in 0..12 {
        pfm.extend_from_slice(&(i as f32 * 0.25).to_le_bytes());
    }
    fs::write(format!("{dir}/pfm_rgb_2x2.pfm"), pfm).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_sig.bin"), b"#?RADIANCE\n").unwrap();
    fs::write(format!("{dir}/just_pf.bin"), b"PF").unwrap();
    fs::write(format!("{dir}/hdr_no_scanline.bin"), b"#?RADIANCE\n\n-Y 2 +X 10\n").unwrap();
    fs::write(format!("{dir}/pfm_gray.bin"), b"Pf\n1 1\n-1.0\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
