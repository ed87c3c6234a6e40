//! Interop Tests
//!
//! Raw grid layout for host graphics APIs, interleaved `f32` and `u8`
//! buffers, and serde round-trips of the public value types.

use anyhow::{Context, Result, ensure};
use colormatrix_core::{Channel, ColorMatrix, Error, MatrixOrder, Pixel, simd};
use colormatrix_tests::{TestPattern, generate_pattern};
use serde::{Deserialize, Serialize};

#[test]
fn test_grid_layout_is_row_major() -> Result<()> {
    let mut qm = ColorMatrix::new();
    qm.scale(0.5, 0.6, 0.7, 0.8, MatrixOrder::Append)
        .translate(0.1, 0.2, 0.3, 0.0, MatrixOrder::Append);

    // Same positions a GDI+ style ColorMatrix expects
    let grid = qm.as_array();
    ensure!(grid[0][0] == 0.5 && grid[3][3] == 0.8, "diagonal out of place");
    ensure!(grid[4][..3] == [0.1f32, 0.2, 0.3], "translation row {:?}", grid[4]);
    ensure!(grid[4][4] == 1.0, "homogeneous corner {}", grid[4][4]);

    let flat = qm.as_flat();
    ensure!(flat[20] == 0.1 && flat[24] == 1.0, "flat layout {:?}", flat);

    let rebuilt = ColorMatrix::from_slice(flat).context("rebuild from 25 values")?;
    ensure!(rebuilt == qm, "round trip changed the matrix");
    Ok(())
}

#[test]
fn test_from_slice_rejects_bad_lengths() {
    for len in [0usize, 16, 24, 26] {
        let values = vec![0.0f32; len];
        match ColorMatrix::from_slice(&values) {
            Err(Error::BufferSize { expected, actual }) => {
                assert_eq!(expected, 25);
                assert_eq!(actual, len);
            }
            other => panic!("len {}: unexpected {:?}", len, other),
        }
    }
}

#[test]
fn test_flat_mut_edits_grid() {
    let mut qm = ColorMatrix::new();
    qm.as_flat_mut()[21] = 0.25;
    assert_eq!(qm[4][1], 0.25);
    assert!((qm.transformed(Pixel::BLACK).g - 63.75).abs() < 1e-4);
}

#[test]
fn test_interleaved_f32_buffer() -> Result<()> {
    let mut qm = ColorMatrix::new();
    qm.set_saturation2(0.0);

    let mut data = vec![200.0f32, 100.0, 50.0, 255.0, 10.0, 20.0, 30.0, 128.0];
    simd::transform_rgba_f32(&qm, &mut data)?;

    ensure!((data[0] - 126.76).abs() < 1e-3, "first pixel {:?}", &data[..4]);
    ensure!(data[0] == data[1] && data[1] == data[2], "not grey {:?}", &data[..4]);
    ensure!(data[3] == 255.0 && data[7] == 128.0, "alpha changed");
    Ok(())
}

#[test]
fn test_interleaved_f32_rejects_partial_pixel() {
    let mut data = vec![0.0f32; 10];
    let err = simd::transform_rgba_f32(&ColorMatrix::new(), &mut data).unwrap_err();
    assert_eq!(err, Error::BufferSize { expected: 8, actual: 10 });
    assert_eq!(err.to_string(), "Buffer size mismatch: expected 8, got 10");

    // Less than one pixel leaves nothing to transform
    let mut short = vec![1.0f32; 3];
    let err = simd::transform_rgba_f32(&ColorMatrix::new(), &mut short).unwrap_err();
    assert_eq!(err, Error::BufferSize { expected: 0, actual: 3 });
    assert_eq!(short, [1.0; 3]);
}

#[test]
fn test_rgba8_pipeline() {
    let bytes: Vec<[u8; 4]> = vec![[255, 0, 0, 255], [12, 34, 56, 78], [128, 128, 128, 0]];

    let mut qm = ColorMatrix::new();
    qm.set_brightness(0.1);

    let out: Vec<[u8; 4]> = bytes
        .iter()
        .map(|b| qm.transformed(Pixel::from_rgba8(*b)).to_rgba8())
        .collect();

    // 25.5 rounds up
    assert_eq!(out[0], [255, 26, 26, 255]);
    assert_eq!(out[1], [38, 60, 82, 78]);
    assert_eq!(out[2], [154, 154, 154, 0]);
}

#[test]
fn test_argb_order() {
    let p = Pixel::from_argb(10.0, 20.0, 30.0, 40.0);
    assert_eq!(p.to_array(), [20.0, 30.0, 40.0, 10.0]);
    assert_eq!(p[Channel::Alpha], 10.0);
    assert_eq!(usize::from(Channel::Blue), 2);
    assert!(Channel::try_from(4usize).is_err());
}

#[test]
fn test_matrix_json_roundtrip() -> Result<()> {
    let mut qm = ColorMatrix::new();
    qm.set_hue(33.0).set_contrast(1.1);

    let json = serde_json::to_string(&qm)?;
    let back: ColorMatrix = serde_json::from_str(&json)?;
    ensure!(back == qm, "matrix changed through JSON: {}", json);
    Ok(())
}

#[test]
fn test_matrix_json_shape() -> Result<()> {
    let json = serde_json::to_value(ColorMatrix::identity())?;
    let rows = json["m"].as_array().context("m is an array")?;
    ensure!(rows.len() == 5, "expected 5 rows, got {}", rows.len());
    ensure!(json["m"][4][4] == 1.0, "corner {}", json["m"][4][4]);
    Ok(())
}

/// A saved grading preset, as a host application might store it
#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Preset {
    name: String,
    order: MatrixOrder,
    matrix: ColorMatrix,
    swatch: Vec<Pixel>,
}

#[test]
fn test_preset_roundtrip() -> Result<()> {
    let mut matrix = ColorMatrix::new();
    matrix.rotate_hue(-20.0).set_saturation2(1.2);

    let mut swatch = generate_pattern(TestPattern::SkinTones, 6);
    matrix.transform_colors(&mut swatch);

    let preset = Preset {
        name: "warm".to_string(),
        order: MatrixOrder::Append,
        matrix,
        swatch,
    };

    let json = serde_json::to_string_pretty(&preset)?;
    let back: Preset = serde_json::from_str(&json).context("parse preset")?;
    ensure!(back == preset, "preset changed through JSON");
    Ok(())
}
