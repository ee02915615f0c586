//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Mapping stability: value -> pixel -> value -> pixel returns the same pixel
//! 2. Clamping: no drag sequence moves the value outside the range
//! 3. Width cap: an explicit width never exceeds the viewport-derived width
//! 4. Hex parsing never panics and always yields normalized channels

use proptest::prelude::*;
use value_slider::color;
use value_slider::slider::mapper::{self, Mapper};
use value_slider::slider::{DragController, SliderState};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_range() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0..1000.0_f64, 0.01..2000.0_f64).prop_map(|(lo, span)| (lo, lo + span))
}

fn arb_track_width() -> impl Strategy<Value = f64> {
    1.0..2000.0_f64
}

// ── 1. Mapping stability ─────────────────────────────────────────────

proptest! {
    #[test]
    fn pixel_round_trip_is_stable(
        (lo, hi) in arb_range(),
        width in arb_track_width(),
        t in 0.0..=1.0_f64,
    ) {
        let mapper = Mapper::new(&(lo..=hi), width).unwrap();
        let value = lo + (hi - lo) * t;

        let pixel = mapper.value_to_pixel(value);
        let again = mapper.value_to_pixel(mapper.pixel_to_value(pixel));
        prop_assert!((pixel - again).abs() < 1e-6 * width.max(1.0), "{} != {}", pixel, again);
    }

    #[test]
    fn pixels_stay_on_track(
        (lo, hi) in arb_range(),
        width in arb_track_width(),
        value in -1e6..1e6_f64,
    ) {
        let mapper = Mapper::new(&(lo..=hi), width).unwrap();
        let pixel = mapper.value_to_pixel(value);
        prop_assert!(pixel >= 0.0 && pixel <= width + 1e-9);
    }
}

// ── 2. Clamping ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn drags_never_leave_the_range(
        (lo, hi) in arb_range(),
        width in arb_track_width(),
        start in 0.0..=1.0_f64,
        translations in prop::collection::vec(-1e5..1e5_f64, 1..20),
    ) {
        let mapper = Mapper::new(&(lo..=hi), width).unwrap();
        let mut state = SliderState::new(lo + (hi - lo) * start, lo..=hi);
        let mut drag = DragController::new();

        drag.drag(&mut state, &mapper, 0.0);
        for translation in translations {
            let step = drag.drag(&mut state, &mapper, translation).unwrap();
            prop_assert!(state.value >= lo && state.value <= hi);
            prop_assert!(step.pixel >= 0.0 && step.pixel <= width + 1e-9);
        }
    }

    #[test]
    fn disabled_state_never_changes(
        start in 0.0..=10.0_f64,
        translation in -1e4..1e4_f64,
    ) {
        let mapper = Mapper::new(&(0.0..=10.0), 380.0).unwrap();
        let mut state = SliderState::new(start, 0.0..=10.0);
        state.is_disabled = true;
        let mut drag = DragController::new();

        prop_assert!(drag.drag(&mut state, &mapper, 0.0).is_none());
        prop_assert!(drag.drag(&mut state, &mapper, translation).is_none());
        prop_assert_eq!(state.value, start);
    }
}

// ── 3. Width cap ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn explicit_width_is_capped(
        viewport in 0.0..4000.0_f32,
        thumb in 0.0..100.0_f32,
        requested in 0.0..10_000.0_f32,
    ) {
        let width = mapper::effective_track_width(viewport, thumb, Some(requested));
        prop_assert!(width <= (viewport - thumb).max(0.0));
        prop_assert!(width <= requested);
        prop_assert!(width >= 0.0);
    }
}

// ── 4. Hex parsing ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn hex_parsing_is_total(input in ".{0,12}", opacity in prop::option::of(0.0..=1.0_f32)) {
        let parsed = color::from_hex(&input, opacity);
        for channel in [parsed.r, parsed.g, parsed.b, parsed.a] {
            prop_assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn six_digit_hex_matches_bytes(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let parsed = color::from_hex(&format!("#{r:02x}{g:02x}{b:02x}"), None);
        prop_assert_eq!(parsed.into_rgba8(), [r, g, b, 255]);
    }
}

// ── Scenario checks ──────────────────────────────────────────────────

#[test]
fn large_drag_from_middle_reaches_exact_end() {
    let width = mapper::effective_track_width(400.0, 20.0, Some(1000.0));
    assert_eq!(width, 380.0);

    let mapper = Mapper::new(&(0.0..=10.0), f64::from(width)).unwrap();
    let mut state = SliderState::new(5.0, 0.0..=10.0);
    let mut drag = DragController::new();
    drag.drag(&mut state, &mapper, 0.0);
    drag.drag(&mut state, &mapper, 10_000.0);
    assert_eq!(state.value, 10.0);
    assert!(drag.release());
}
