//! Property-style tests for the geometry pipeline.
//!
//! Each test sweeps a fixed grid of real-world tablet sizes, screen aspect
//! ratios and alignments, so failures are reproducible without a random seed.

use tablet_area_core::{
    align, compute_active_area, quantize, resolve_size, validate, ActiveAreaRequest, Alignment,
    AspectRatio, DeviceAreaCommand, GeometryError, LengthUnit, RequestError, SizeOptions,
    TabletArea,
};

const TABLETS: [(u32, u32); 6] = [
    (15200, 9500),  // Intuos S
    (21600, 13500), // Intuos M
    (44704, 27940), // Intuos Pro M
    (10000, 6000),
    (4096, 4096), // square
    (9000, 16000), // portrait
];

const ASPECTS: [(u32, u32); 6] = [(16, 9), (16, 10), (4, 3), (21, 9), (1, 1), (9, 16)];

fn grid() -> impl Iterator<Item = (TabletArea, AspectRatio)> {
    TABLETS.iter().flat_map(|&(w, h)| {
        ASPECTS
            .iter()
            .map(move |&(ah, av)| (TabletArea::new(w, h), AspectRatio::new(ah, av).unwrap()))
    })
}

// ── Size resolution ───────────────────────────────────────────────────────────

#[test]
fn test_full_area_preserves_aspect_ratio() {
    for (tablet, aspect) in grid() {
        let size = resolve_size(ActiveAreaRequest::Full, tablet, aspect).unwrap();
        let expected = f64::from(aspect.horizontal()) / f64::from(aspect.vertical());
        let actual = size.width / size.height;
        assert!(
            (actual - expected).abs() < 1e-9,
            "{tablet} @ {aspect}: ratio {actual} != {expected}"
        );
    }
}

#[test]
fn test_full_area_matches_at_least_one_tablet_dimension() {
    for (tablet, aspect) in grid() {
        let size = resolve_size(ActiveAreaRequest::Full, tablet, aspect).unwrap();
        let width_matches = size.width == f64::from(tablet.width);
        let height_matches = size.height == f64::from(tablet.height);
        assert!(
            width_matches || height_matches,
            "{tablet} @ {aspect}: {size:?} touches neither edge"
        );
    }
}

#[test]
fn test_full_area_never_exceeds_tablet() {
    for (tablet, aspect) in grid() {
        let size = resolve_size(ActiveAreaRequest::Full, tablet, aspect).unwrap();
        assert!(size.width <= f64::from(tablet.width) + 1e-9);
        assert!(size.height <= f64::from(tablet.height) + 1e-9);
    }
}

// ── Alignment ─────────────────────────────────────────────────────────────────

#[test]
fn test_every_alignment_of_a_fitting_area_stays_in_bounds() {
    for (tablet, aspect) in grid() {
        let size = resolve_size(ActiveAreaRequest::Full, tablet, aspect).unwrap();
        for alignment in Alignment::all() {
            let offset = align(tablet, size, alignment);
            assert!(offset.x >= 0.0 && offset.y >= 0.0);
            assert!(offset.x + size.width <= f64::from(tablet.width) + 1e-9);
            assert!(offset.y + size.height <= f64::from(tablet.height) + 1e-9);
        }
    }
}

#[test]
fn test_full_area_passes_validation_for_every_alignment() {
    for (tablet, aspect) in grid() {
        for alignment in Alignment::all() {
            let plan = compute_active_area(tablet, aspect, ActiveAreaRequest::Full, alignment)
                .unwrap_or_else(|e| panic!("{tablet} @ {aspect} / {alignment}: {e}"));
            assert_eq!(validate(&plan.command, tablet), Ok(()));
        }
    }
}

// ── Quantization ──────────────────────────────────────────────────────────────

#[test]
fn test_quantize_is_idempotent() {
    for x in [-10.0, 0.0, 0.4, 0.5, 1593.75, 2812.5, 44704.0] {
        let once = quantize(x);
        assert_eq!(quantize(once as f64), once);
    }
}

#[test]
fn test_quantize_half_tie_goes_up() {
    for x in -5i64..=5 {
        assert_eq!(quantize(x as f64 + 0.5), quantize(x as f64) + 1);
    }
}

// ── Worked examples ───────────────────────────────────────────────────────────

#[test]
fn test_full_16_9_on_10000_by_6000_is_10000_by_5625() {
    let size = resolve_size(
        ActiveAreaRequest::Full,
        TabletArea::new(10000, 6000),
        AspectRatio::new(16, 9).unwrap(),
    )
    .unwrap();
    assert_eq!(size.width, 10000.0);
    assert!((size.height - 5625.0).abs() < 1e-9);
}

#[test]
fn test_5000_lines_wide_centred_gives_expected_command() {
    let request = SizeOptions {
        full: false,
        width: Some(5000.0),
        height: None,
        unit: LengthUnit::Lines,
        resolution: 2540,
    }
    .into_request()
    .unwrap();

    let plan = compute_active_area(
        TabletArea::new(10000, 6000),
        AspectRatio::new(16, 9).unwrap(),
        request,
        Alignment::Center,
    )
    .unwrap();

    assert_eq!(plan.command, DeviceAreaCommand::new(2500, 1594, 7500, 4406));
}

#[test]
fn test_width_wider_than_tablet_is_a_geometry_error() {
    let result = compute_active_area(
        TabletArea::new(10000, 6000),
        AspectRatio::new(16, 9).unwrap(),
        ActiveAreaRequest::Width(10001.0),
        Alignment::Center,
    );
    assert!(matches!(result, Err(GeometryError::OutOfBounds { .. })));
}

#[test]
fn test_width_beyond_i64_range_is_a_geometry_error_for_end_alignments() {
    for alignment in [Alignment::TopRight, Alignment::Right, Alignment::BottomRight] {
        let result = compute_active_area(
            TabletArea::new(8192, 6000),
            AspectRatio::new(16, 9).unwrap(),
            ActiveAreaRequest::Width(1e19),
            alignment,
        );
        assert!(
            matches!(result, Err(GeometryError::OutOfBounds { .. })),
            "{alignment}: {result:?}"
        );
    }
}

#[test]
fn test_both_width_and_height_is_a_configuration_error() {
    let result = SizeOptions {
        full: false,
        width: Some(100.0),
        height: Some(50.0),
        unit: LengthUnit::Mm,
        resolution: 2540,
    }
    .into_request();
    assert!(matches!(result, Err(RequestError::Conflicting(_))));
}

#[test]
fn test_neither_width_nor_height_is_a_configuration_error() {
    let result = SizeOptions {
        full: false,
        width: None,
        height: None,
        unit: LengthUnit::Mm,
        resolution: 2540,
    }
    .into_request();
    assert_eq!(result, Err(RequestError::Missing));
}

#[test]
fn test_physical_width_on_intuos_s() {
    // 120 mm at 2540 lpi = 12000 lines, 16:9 → 6750 lines tall
    let request = SizeOptions {
        full: false,
        width: Some(120.0),
        height: None,
        unit: LengthUnit::Mm,
        resolution: 2540,
    }
    .into_request()
    .unwrap();

    let plan = compute_active_area(
        TabletArea::new(15200, 9500),
        AspectRatio::new(16, 9).unwrap(),
        request,
        Alignment::TopLeft,
    )
    .unwrap();

    assert_eq!(plan.command, DeviceAreaCommand::new(0, 0, 12000, 6750));
}
