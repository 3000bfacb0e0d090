//! Wheel Geometry
//!
//! Pure segment layout and angle resolution for the roulette wheel.
//! Drawing lives in `components::wheel_canvas`; everything here is
//! side-effect free so it can be unit tested.

/// Fixed fill palette, cycled per rebuild.
pub const PALETTE: &[&str] = &[
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
];

/// Label shown on the single disabled segment of an empty wheel.
pub const PLACEHOLDER_LABEL: &str = "Add an option first";

/// One wedge of the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub fill: &'static str,
}

/// The wheel's view-state, rebuilt from scratch on every list change.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    pub segments: Vec<Segment>,
    /// True when the wheel holds only the placeholder segment; the spin
    /// control is disabled in that state.
    pub placeholder: bool,
}

impl Wheel {
    /// Build a wheel from the current option list. An empty list yields
    /// a single placeholder segment so there is always something to draw.
    pub fn build(options: &[String]) -> Self {
        if options.is_empty() {
            return Wheel {
                segments: vec![Segment { label: PLACEHOLDER_LABEL.to_string(), fill: "#9e9e9e" }],
                placeholder: true,
            };
        }
        let segments = options
            .iter()
            .enumerate()
            .map(|(i, name)| Segment {
                label: name.clone(),
                fill: PALETTE[i % PALETTE.len()],
            })
            .collect();
        Wheel { segments, placeholder: false }
    }

    /// Angular width of one segment, in degrees.
    pub fn segment_angle(&self) -> f64 {
        360.0 / self.segments.len() as f64
    }
}

/// Resolve which segment index sits under a fixed pointer once the wheel
/// has stopped at `rotation_angle` (degrees, cumulative clockwise,
/// unbounded).
///
/// The wheel rotates clockwise while the segment layout stays put, so
/// the indicated segment is found by inverting the rotation: normalize
/// `rotation + pointer_offset` into [0, 360), mirror it back into the
/// static layout's convention, then divide by the segment width. Exact
/// boundaries and floating-point drift clamp into range instead of
/// failing.
pub fn resolve_segment(rotation_angle: f64, num_segments: usize, pointer_offset: f64) -> usize {
    if num_segments == 0 {
        return 0;
    }
    let target = (rotation_angle + pointer_offset).rem_euclid(360.0);
    let adjusted = (360.0 - target).rem_euclid(360.0);
    let segment_angle = 360.0 / num_segments as f64;
    let index = (adjusted / segment_angle).floor() as usize;
    index.min(num_segments - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_in_range_for_sampled_angles() {
        for n in 1..=12 {
            let mut angle = -1000.0;
            while angle < 1000.0 {
                let idx = resolve_segment(angle, n, 270.0);
                assert!(idx < n, "angle {} with {} segments gave {}", angle, n, idx);
                angle += 7.3;
            }
        }
    }

    #[test]
    fn test_resolve_periodic_in_full_turns() {
        for k in [-3i32, -1, 1, 2, 10] {
            let base = resolve_segment(123.4, 5, 270.0);
            let shifted = resolve_segment(123.4 + 360.0 * k as f64, 5, 270.0);
            assert_eq!(base, shifted, "k={}", k);
        }
    }

    #[test]
    fn test_resolve_regression_fixture() {
        // Four segments, pointer at 270 degrees, wheel at rest:
        // target 270, adjusted 90, segment width 90 -> index 1.
        assert_eq!(resolve_segment(0.0, 4, 270.0), 1);
    }

    #[test]
    fn test_resolve_exact_boundary_clamps() {
        // adjusted lands exactly on 360/n multiples; floor must not
        // walk past the last index.
        assert_eq!(resolve_segment(0.0, 4, 0.0), 0);
        assert!(resolve_segment(359.9999999, 4, 0.0) < 4);
    }

    #[test]
    fn test_resolve_zero_segments_clamps() {
        assert_eq!(resolve_segment(42.0, 0, 270.0), 0);
    }

    #[test]
    fn test_build_empty_list_is_placeholder() {
        let wheel = Wheel::build(&[]);
        assert!(wheel.placeholder);
        assert_eq!(wheel.segments.len(), 1);
        assert_eq!(wheel.segments[0].label, PLACEHOLDER_LABEL);
    }

    #[test]
    fn test_build_assigns_cycled_palette() {
        let names: Vec<String> = (0..10).map(|i| format!("Option {}", i)).collect();
        let wheel = Wheel::build(&names);
        assert!(!wheel.placeholder);
        assert_eq!(wheel.segments.len(), 10);
        assert_eq!(wheel.segments[0].fill, PALETTE[0]);
        assert_eq!(wheel.segments[8].fill, PALETTE[0]);
        assert_eq!(wheel.segments[9].fill, PALETTE[1]);
    }

    #[test]
    fn test_segment_angle() {
        let wheel = Wheel::build(&opts(&["a", "b", "c", "d"]));
        assert_eq!(wheel.segment_angle(), 90.0);
    }
}
