use enough::Unstoppable;
use zenhdr::*;

/// Checkerboard of two HDR colors spanning a few orders of magnitude.
fn checkerboard(w: usize, h: usize) -> Vec<f32> {
    let mut pixels = vec![0f32; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            if (x + y) % 2 == 0 {
                pixels[off] = 120.5;
                pixels[off + 1] = 0.25;
                pixels[off + 2] = 3.0;
            } else {
                pixels[off] = 0.004;
                pixels[off + 1] = 900.0;
                pixels[off + 2] = 0.72;
            }
        }
    }
    pixels
}

/// Per-pixel check against the shared-exponent bound: each channel must land
/// within 2^-8 of the original relative to the pixel's dominant channel.
fn assert_rgbe_close(original: &[f32], decoded: &[f32]) {
    assert_eq!(original.len(), decoded.len());
    for (i, (a, b)) in original.chunks_exact(3).zip(decoded.chunks_exact(3)).enumerate() {
        let m = a[0].max(a[1]).max(a[2]);
        if m < 1e-32 {
            assert_eq!(b, [0.0; 3], "pixel {i} should decode to exact black");
            continue;
        }
        let tolerance = m / 256.0;
        for c in 0..3 {
            assert!(
                (a[c] - b[c]).abs() <= tolerance,
                "pixel {i} channel {c}: {} vs {} (tolerance {tolerance})",
                a[c],
                b[c]
            );
        }
    }
}

#[test]
fn radiance_roundtrip_within_bound() {
    let (w, h) = (16u32, 9u32);
    let pixels = checkerboard(w as usize, h as usize);

    let encoded = EncodeRequest::radiance()
        .encode(&pixels, w, h, Unstoppable)
        .unwrap();
    assert!(encoded.starts_with(b"#?RADIANCE\n"));

    let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
    assert_eq!(decoded.width, w);
    assert_eq!(decoded.height, h);
    assert_eq!(decoded.format, ImageFormat::Radiance);
    assert_rgbe_close(&pixels, decoded.pixels());
}

#[test]
fn radiance_preserves_exact_black() {
    let (w, h) = (8u32, 2u32);
    let mut pixels = vec![0f32; (w * h * 3) as usize];
    // one non-black pixel so the row still exercises both token kinds
    pixels[3] = 1.0;
    pixels[4] = 0.5;

    let encoded = encode_radiance(&pixels, w, h, Unstoppable).unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    for (i, px) in decoded.pixels().chunks_exact(3).enumerate() {
        if i == 1 {
            continue;
        }
        assert_eq!(px, [0.0; 3], "pixel {i}");
    }
}

#[test]
fn radiance_metadata_survives_roundtrip() {
    let (w, h) = (12u32, 4u32);
    let pixels = checkerboard(w as usize, h as usize);

    let encoded = EncodeRequest::radiance()
        .with_gamma(2.2)
        .with_exposure(1.5)
        .encode(&pixels, w, h, Unstoppable)
        .unwrap();

    let decoded = decode_radiance(&encoded, Unstoppable).unwrap();
    let header = decoded.radiance_header().unwrap();
    assert_eq!(header.width, w);
    assert_eq!(header.height, h);
    assert_eq!(header.gamma, Some(2.2));
    assert_eq!(header.exposure, Some(1.5));
    assert_eq!(
        header.primaries.as_deref(),
        Some(RadianceHeader::REC2020_PRIMARIES)
    );
    assert!(header.run_length_encoded);
}

#[test]
fn radiance_header_lines_come_in_fixed_order() {
    let pixels = checkerboard(8, 2);
    let encoded = EncodeRequest::radiance()
        .with_gamma(2.2)
        .with_exposure(1.5)
        .encode(&pixels, 8, 2, Unstoppable)
        .unwrap();

    let expected = format!(
        "#?RADIANCE\nGAMMA=2.2\nEXPOSURE=1.5\nPRIMARIES={}\nFORMAT=32-bit_rle_rgbe\n\n-Y 2 +X 8\n",
        RadianceHeader::REC2020_PRIMARIES
    );
    assert!(encoded.starts_with(expected.as_bytes()));

    // without primaries, the line is omitted entirely
    let bare = EncodeRequest::radiance()
        .with_primaries(None)
        .encode(&pixels, 8, 2, Unstoppable)
        .unwrap();
    assert!(bare.starts_with(b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n-Y 2 +X 8\n"));
    let decoded = decode(&bare, Unstoppable).unwrap();
    assert_eq!(decoded.radiance_header().unwrap().primaries, None);
}

#[test]
fn radiance_reencode_from_header_is_byte_identical() {
    let (w, h) = (20u32, 7u32);
    let pixels = checkerboard(w as usize, h as usize);

    let first = EncodeRequest::radiance()
        .with_exposure(0.75)
        .encode(&pixels, w, h, Unstoppable)
        .unwrap();
    let decoded = decode(&first, Unstoppable).unwrap();

    // decoded values are already quantized, so re-encoding with the parsed
    // header must reproduce the file exactly
    let second = EncodeRequest::radiance_from(decoded.radiance_header().unwrap())
        .encode(decoded.pixels(), decoded.width, decoded.height, Unstoppable)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn default_header_encodes_like_builder() {
    let pixels = checkerboard(8, 2);
    let from_header = EncodeRequest::radiance_from(&RadianceHeader::new(8, 2))
        .encode(&pixels, 8, 2, Unstoppable)
        .unwrap();
    let from_builder = encode_radiance(&pixels, 8, 2, Unstoppable).unwrap();
    assert_eq!(from_header, from_builder);
}

#[test]
fn pfm_roundtrip_is_bit_exact() {
    let (w, h) = (5u32, 4u32);
    let mut pixels = vec![0f32; (w * h * 3) as usize];
    for (i, px) in pixels.iter_mut().enumerate() {
        *px = (i as f32 - 20.0) * 1.73e-4;
    }

    let encoded = EncodeRequest::pfm()
        .encode(&pixels, w, h, Unstoppable)
        .unwrap();
    assert!(encoded.starts_with(b"PF\n5 4\n-1.0\n"));

    let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
    assert_eq!(decoded.width, w);
    assert_eq!(decoded.height, h);
    assert_eq!(decoded.format, ImageFormat::Pfm);
    assert!(decoded.radiance_header().is_none());
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn parses_reference_radiance_header() {
    // 10-wide scanline: each plane one run token; max mantissa 128, e=129
    // decodes to about 1.004
    let mut data = b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n-Y 2 +X 10\n".to_vec();
    for _ in 0..2 {
        data.extend_from_slice(&[2, 2, 0, 10]);
        data.extend_from_slice(&[138, 128, 138, 128, 138, 128, 138, 129]);
    }

    let info = ImageInfo::from_bytes(&data).unwrap();
    assert_eq!(info.width, 10);
    assert_eq!(info.height, 2);
    assert_eq!(info.format, ImageFormat::Radiance);

    let decoded = decode(&data, Unstoppable).unwrap();
    let header = decoded.radiance_header().unwrap();
    assert!(header.run_length_encoded);
    assert_eq!(decoded.pixels().len(), 60);
    let expected = (128.0f32 + 0.5) / 128.0;
    for &sample in decoded.pixels() {
        assert_eq!(sample, expected);
    }
}

#[test]
fn parses_reference_pfm_and_reencodes_identically() {
    let mut data = b"PF\n4 3\n-1.0\n".to_vec();
    for i in 0..36 {
        data.extend_from_slice(&(0.5f32 - i as f32 * 0.033).to_le_bytes());
    }

    let info = ImageInfo::from_bytes(&data).unwrap();
    assert_eq!(info.width, 4);
    assert_eq!(info.height, 3);
    assert_eq!(info.format, ImageFormat::Pfm);

    let decoded = decode_pfm(&data, Unstoppable).unwrap();
    let reencoded = encode_pfm(decoded.pixels(), 4, 3, Unstoppable).unwrap();
    assert_eq!(reencoded, data);
}

#[test]
fn alternate_rgbe_signature_accepted() {
    let mut data = b"#?RGBE\nFORMAT=32-bit_rle_rgbe\n\n-Y 1 +X 8\n".to_vec();
    data.extend_from_slice(&[2, 2, 0, 8]);
    data.extend_from_slice(&[136, 200, 136, 10, 136, 0, 136, 140]);

    let decoded = decode(&data, Unstoppable).unwrap();
    assert_eq!(decoded.width, 8);
    assert_eq!(decoded.height, 1);
}

#[test]
fn accepts_primaries_passthrough() {
    let mut data = b"#?RADIANCE\nPRIMARIES=0.64 0.33 0.30 0.60 0.15 0.06 0.3127 0.3290\nFORMAT=32-bit_rle_rgbe\n\n-Y 1 +X 8\n".to_vec();
    data.extend_from_slice(&[2, 2, 0, 8]);
    data.extend_from_slice(&[136, 128, 136, 128, 136, 128, 136, 129]);

    let decoded = decode(&data, Unstoppable).unwrap();
    let header = decoded.radiance_header().unwrap();
    assert_eq!(
        header.primaries.as_deref(),
        Some("0.64 0.33 0.30 0.60 0.15 0.06 0.3127 0.3290")
    );
}

#[test]
fn limits_reject_large() {
    let pixels = checkerboard(8, 2);
    let encoded = encode_radiance(&pixels, 8, 2, Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(4),
        ..Default::default()
    };
    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        HdrError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn image_info_probe_radiance() {
    let pixels = checkerboard(11, 6);
    let encoded = encode_radiance(&pixels, 11, 6, Unstoppable).unwrap();

    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 11);
    assert_eq!(info.height, 6);
    assert_eq!(info.format, ImageFormat::Radiance);
}
