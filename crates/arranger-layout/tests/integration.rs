#![allow(clippy::unwrap_used)]
//! Integration tests for arranger-layout.
//!
//! These tests drive the engine the way a host does: measure, place, toggle.

use arranger_core::{Anchor, CaseIterable, Point, ProposedSize, Rect, Size};
use arranger_layout::{
    LayoutConfig, LayoutEngine, LayoutKind, SpacedRowLayout, ToggleMessage, ToggleState,
};
use proptest::prelude::*;

const EPS: f32 = 1e-2;

fn container(side: f32) -> (Rect, ProposedSize) {
    let size = Size::square(side);
    (Rect::from_size(size), ProposedSize::exact(size))
}

fn any_kind() -> impl Strategy<Value = LayoutKind> {
    proptest::sample::select(LayoutKind::ALL)
}

// =============================================================================
// Concrete scenario: seven children in a 350x350 container
// =============================================================================

#[test]
fn test_scenario_spaced_row_seven() {
    let engine = LayoutEngine::new();
    let bounds = Rect::new(25.0, 0.0, 350.0, 350.0);
    let proposal = ProposedSize::exact(Size::square(350.0));
    let placed = engine.place(LayoutKind::SpacedRow, bounds, proposal, 7);

    let side = placed[0].proposal.width;
    assert!((side - 43.14).abs() < EPS);
    assert!((placed[0].position.x - (25.0 + 21.57)).abs() < EPS);
    assert!((placed[1].position.x - placed[0].position.x - 51.14).abs() < EPS);
}

#[test]
fn test_scenario_circle_seven() {
    let engine = LayoutEngine::new();
    let (bounds, proposal) = container(350.0);
    let placed = engine.place(LayoutKind::Circle, bounds, proposal, 7);
    let center = bounds.center();

    assert!(placed.iter().all(|p| p.proposal == Size::square(50.0)));
    assert!(placed.iter().all(|p| p.anchor == Anchor::Leading));
    for p in &placed {
        assert!((p.center().distance(&center) - (175.0 - 25.0)).abs() < EPS);
    }
}

// =============================================================================
// Degenerate counts
// =============================================================================

#[test]
fn test_single_child_is_finite_for_every_kind() {
    let engine = LayoutEngine::new();
    let (bounds, proposal) = container(200.0);
    for &kind in LayoutKind::ALL {
        let placed = engine.place(kind, bounds, proposal, 1);
        assert_eq!(placed.len(), 1, "{kind}");
        assert!(placed[0].position.is_finite(), "{kind}");
        assert!(placed[0].proposal.width.is_finite(), "{kind}");
    }
}

#[test]
fn test_unspecified_proposal_uses_ideal_size() {
    let engine = LayoutEngine::new();
    let size = engine.measure(LayoutKind::SpacedRow, ProposedSize::UNSPECIFIED, 3);
    assert_eq!(size, Size::new(10.0, 10.0));
}

// =============================================================================
// Host toggling
// =============================================================================

#[test]
fn test_host_loop_relayouts_on_tap() {
    let engine = LayoutEngine::new();
    let (bounds, proposal) = container(300.0);
    let mut state = ToggleState::default();

    let before = engine.place(state.kind, bounds, proposal, state.count);
    assert!(state.update(ToggleMessage::Tap));
    let after = engine.place(state.kind, bounds, proposal, state.count);

    assert_eq!(before.len(), after.len());
    assert_ne!(before, after);
    assert_eq!(state.title(), "Diagonal");
}

#[test]
fn test_config_drives_engine_and_state() {
    let config = LayoutConfig::from_yaml("spacing: 0\ninitial_kind: spaced_row\ninitial_count: 4")
        .unwrap();
    let engine = LayoutEngine::with_config(config.clone());
    let state = ToggleState::from_config(&config);
    let (bounds, proposal) = container(100.0);

    let placed = engine.place(state.kind, bounds, proposal, state.count);
    assert_eq!(placed.len(), 4);
    assert_eq!(placed[0].proposal, Size::square(25.0));
    assert_eq!(placed[3].position, Point::new(87.5, 50.0));
}

#[test]
fn test_advance_is_seven_cycle_without_fixed_points() {
    let engine = LayoutEngine::new();
    for &start in LayoutKind::ALL {
        let mut kind = start;
        for _ in 0..7 {
            let next = engine.advance(kind);
            assert_ne!(next, kind);
            kind = next;
        }
        assert_eq!(kind, start);
    }
}

#[test]
fn test_advance_is_bijection() {
    let engine = LayoutEngine::new();
    let mut images: Vec<LayoutKind> = LayoutKind::ALL.iter().map(|&k| engine.advance(k)).collect();
    images.sort_by_key(|k| LayoutKind::ALL.iter().position(|c| c == k));
    assert_eq!(images, LayoutKind::ALL);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_measure_is_idempotent(
        kind in any_kind(),
        w in proptest::option::of(0.0f32..2000.0),
        h in proptest::option::of(0.0f32..2000.0),
        count in 0usize..40,
    ) {
        let engine = LayoutEngine::new();
        let proposal = ProposedSize::new(w, h);
        let a = engine.measure(kind, proposal, count);
        let b = engine.measure(kind, proposal, count);
        prop_assert_eq!(a.width.to_bits(), b.width.to_bits());
        prop_assert_eq!(a.height.to_bits(), b.height.to_bits());
    }

    #[test]
    fn prop_placement_count_matches_children(
        kind in any_kind(),
        side in 50.0f32..1000.0,
        count in 0usize..40,
    ) {
        let engine = LayoutEngine::new();
        let (bounds, proposal) = container(side);
        prop_assert_eq!(engine.place(kind, bounds, proposal, count).len(), count);
    }

    #[test]
    fn prop_circle_centers_evenly_spaced(
        w in 100.0f32..1000.0,
        h in 100.0f32..1000.0,
        count in 1usize..24,
    ) {
        let engine = LayoutEngine::new();
        let bounds = Rect::new(0.0, 0.0, w, h);
        let proposal = ProposedSize::exact(Size::new(w, h));
        let placed = engine.place(LayoutKind::Circle, bounds, proposal, count);

        let side = w / count as f32;
        let reach = w.min(h) / 2.0 - side / 2.0;
        let step = 360.0 / count as f32;
        let center = bounds.center();
        let tol = 1e-3 * w.max(h);

        for (i, p) in placed.iter().enumerate() {
            let c = p.center();
            prop_assert!((c.distance(&center) - reach.abs()).abs() < tol);

            let angle = (step * i as f32 - 90.0).to_radians();
            let expected = Point::new(center.x + reach * angle.cos(), center.y + reach * angle.sin());
            prop_assert!(c.distance(&expected) < tol);
        }
    }

    #[test]
    fn prop_spaced_row_fills_width(
        w in 100.0f32..2000.0,
        count in 1usize..12,
    ) {
        let engine = LayoutEngine::new();
        let bounds = Rect::new(0.0, 0.0, w, 100.0);
        let proposal = ProposedSize::exact(bounds.size());
        let placed = engine.place(LayoutKind::SpacedRow, bounds, proposal, count);
        let side = SpacedRowLayout::default().side(w, count);
        let tol = 1e-4 * w;

        let total: f32 = placed.iter().map(|p| p.proposal.width).sum::<f32>()
            + 8.0 * (count - 1) as f32;
        prop_assert!((total - w).abs() < tol);
        for pair in placed.windows(2) {
            prop_assert!((pair[1].position.x - pair[0].position.x - (side + 8.0)).abs() < tol);
        }
    }

    #[test]
    fn prop_diagonal_steps_constant(
        top in any::<bool>(),
        w in 100.0f32..1000.0,
        h in 100.0f32..1000.0,
        count in 2usize..20,
    ) {
        let kind = if top { LayoutKind::TopDiagonal } else { LayoutKind::BottomDiagonal };
        let engine = LayoutEngine::new();
        let bounds = Rect::new(0.0, 0.0, w, h);
        let placed = engine.place(kind, bounds, ProposedSize::exact(bounds.size()), count);

        let side = h / count as f32;
        let step_x = placed[1].position.x - placed[0].position.x;
        let tol = 1e-3 * w.max(h);
        for pair in placed.windows(2) {
            prop_assert!(((pair[1].position.y - pair[0].position.y).abs() - side).abs() < tol);
            prop_assert!((pair[1].position.x - pair[0].position.x - step_x).abs() < tol);
        }
    }

    #[test]
    fn prop_staircases_stay_inside_bounds(
        top in any::<bool>(),
        w in 100.0f32..1000.0,
        h in 10.0f32..1000.0,
        count in 1usize..20,
    ) {
        prop_assume!(w >= h / count as f32);
        let kind = if top { LayoutKind::TopDiagonal } else { LayoutKind::BottomDiagonal };
        let engine = LayoutEngine::new();
        let bounds = Rect::new(0.0, 0.0, w, h);
        let placed = engine.place(kind, bounds, ProposedSize::exact(bounds.size()), count);
        let tol = 1e-3 * w.max(h);
        for p in &placed {
            prop_assert!(bounds.contains_rect(&p.frame(), tol));
        }
    }
}
