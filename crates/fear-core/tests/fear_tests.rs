// Host-side tests for the fear-state controller: input mapping, jolts,
// palette swaps and the particle population.

use fear_core::*;
use glam::Vec2;

const VIEW: Viewport = Viewport::new(800.0, 600.0);

fn make_state() -> FearState {
    FearState::new(&SimParams::default(), VIEW).unwrap()
}

fn inputs(x: f32, y: f32, slider: Option<f32>) -> FrameInputs {
    FrameInputs {
        pointer: Vec2::new(x, y),
        slider,
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn pointer_at_bottom_with_slider_zero_is_calm() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    let p = state.tick(&inputs(400.0, 600.0, Some(0.0)), &mut list);
    assert!(approx(state.fear_intensity(), 0.5));
    assert_eq!(state.dread_level(), 0.0);
    assert!(approx(state.combined_fear(), 0.5));
    assert!(approx(p.combined_fear, 0.5));
}

#[test]
fn pointer_at_top_with_full_slider_is_maximal() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    state.tick(&inputs(400.0, 0.0, Some(200.0)), &mut list);
    assert!(approx(state.fear_intensity(), 3.5));
    assert_eq!(state.dread_level(), 1.0);
    assert!(approx(state.combined_fear(), 7.5));
}

#[test]
fn dread_is_clamped_for_any_slider_value() {
    for raw in [-1000.0, -1.0, 0.0, 50.0, 100.0, 199.9, 200.0, 201.0, 1e6] {
        let d = dread_from_slider(raw);
        assert!((0.0..=1.0).contains(&d), "slider {raw} -> {d}");
    }
    assert!(approx(dread_from_slider(100.0), 0.5));

    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    state.tick(&inputs(0.0, 0.0, Some(-40.0)), &mut list);
    assert_eq!(state.dread_level(), 0.0);
    state.tick(&inputs(0.0, 0.0, Some(900.0)), &mut list);
    assert_eq!(state.dread_level(), 1.0);
}

#[test]
fn missing_slider_keeps_default_dread() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    for _ in 0..5 {
        state.tick(&inputs(100.0, 100.0, None), &mut list);
    }
    assert!(approx(state.dread_level(), DEFAULT_DREAD_LEVEL));
}

#[test]
fn fear_intensity_stays_in_range_outside_jolt() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    for y in [-500.0, -1.0, 0.0, 150.0, 300.0, 599.0, 600.0, 601.0, 5000.0] {
        state.tick(&inputs(400.0, y, Some(100.0)), &mut list);
        let f = state.fear_intensity();
        assert!((0.5..=3.5).contains(&f), "y={y} fear={f}");
    }
    assert!(approx(fear_from_pointer_y(300.0, 600.0), 2.0));
}

#[test]
fn horizontal_mapping_drives_noise_and_pull() {
    let mut state = make_state();
    let p = {
        state.tick(&inputs(400.0, 600.0, Some(0.0)), &mut CommandList::new(VIEW));
        // Center: no pull, minimum chaos.
        state.derive(Vec2::new(400.0, 600.0))
    };
    assert!(approx(p.mouse_force_x, 0.0));
    assert!(approx(p.noise_influence, 0.5));

    // Right edge at calm fear: full chaos, weakest pull to the right.
    let p = state.derive(Vec2::new(800.0, 600.0));
    assert!(approx(p.noise_influence, 1.5));
    assert!(approx(p.mouse_force_x, 0.05));

    // Left edge, top: combined fear 3.5 -> pull 0.2 to the left.
    let p = state.derive(Vec2::new(0.0, 0.0));
    assert!(approx(p.mouse_force_x, -0.2));
}

#[test]
fn press_starts_jolt_and_swaps_palette_immediately() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    assert_eq!(state.palette_kind(), PaletteKind::Violet);

    state.press(&mut list);
    assert_eq!(state.panic_jolt_counter(), 30);
    assert_eq!(state.jolt_flash_alpha(), 300.0);
    assert_eq!(state.palette_kind(), PaletteKind::Steel);

    // The background is repainted opaquely with the new palette.
    let (rect, color) = list.rects().last().unwrap();
    assert_eq!(rect, Rect::covering(VIEW));
    assert_eq!(color, state.palette().background.with_alpha(1.0));
}

#[test]
fn jolt_overrides_for_exactly_thirty_ticks() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    state.press(&mut list);

    for frame in 0..30 {
        assert!(state.is_jolt_active(), "frame {frame}");
        let p = state.tick(&inputs(800.0, 600.0, Some(50.0)), &mut list);
        assert_eq!(state.fear_intensity(), 4.0);
        assert!(approx(p.combined_fear, 5.25));
        assert!(approx(p.noise_influence, 2.75));
        assert!(approx(p.mouse_force_x, 0.4));
        assert_eq!(p.jolt_counter, 29 - frame);
    }
    assert!(!state.is_jolt_active());

    state.tick(&inputs(800.0, 600.0, Some(50.0)), &mut list);
    assert!(approx(state.fear_intensity(), 0.5));
    assert!(approx(state.combined_fear(), 1.5));
}

#[test]
fn flash_decays_by_twenty_per_tick_to_zero() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    state.press(&mut list);
    for i in 1..=15 {
        state.tick(&inputs(0.0, 0.0, None), &mut list);
        assert_eq!(state.jolt_flash_alpha(), 300.0 - 20.0 * i as f32);
    }
    assert_eq!(state.jolt_flash_alpha(), 0.0);
    state.tick(&inputs(0.0, 0.0, None), &mut list);
    assert_eq!(state.jolt_flash_alpha(), 0.0);
}

#[test]
fn flash_overlay_is_white_and_drawn_after_fade() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    state.press(&mut list);
    list.drain();
    state.tick(&inputs(0.0, 0.0, None), &mut list);
    let rects: Vec<_> = list.rects().collect();
    assert_eq!(rects.len(), 2);
    assert_eq!(rects[1].1, Hsba::WHITE.with_alpha(300.0 / 255.0));
}

#[test]
fn palette_toggling_is_a_two_cycle() {
    for n in 0..9 {
        let mut state = make_state();
        let mut list = CommandList::new(VIEW);
        for _ in 0..n {
            state.press(&mut list);
        }
        let expected = if n % 2 == 0 {
            PaletteKind::Violet
        } else {
            PaletteKind::Steel
        };
        assert_eq!(state.palette_kind(), expected, "after {n} presses");
    }
}

#[test]
fn trail_fade_uses_previous_intensity_and_dread() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    // Initial fear 1.0 and dread 0.2: 7.5 + 2.0 = 9.5 out of 255.
    state.tick(&inputs(400.0, 0.0, None), &mut list);
    let (_, fade) = list.rects().next().unwrap();
    assert!(approx(fade.a, 9.5 / 255.0));
    assert_eq!(fade.h, state.background().h);

    // That tick drove fear to 3.5, so the next fade is 20 + 2.
    list.drain();
    state.tick(&inputs(400.0, 0.0, None), &mut list);
    let (_, fade) = list.rects().next().unwrap();
    assert!(approx(fade.a, 22.0 / 255.0));
}

#[test]
fn time_offset_advances_with_combined_fear() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    state.tick(&inputs(400.0, 0.0, Some(200.0)), &mut list);
    assert!(approx(state.time_offset(), 0.005 * 7.5));
    state.tick(&inputs(400.0, 600.0, Some(0.0)), &mut list);
    assert!(approx(state.time_offset(), 0.005 * 7.5 + 0.005 * 0.5));
}

#[test]
fn every_tick_draws_one_disc_per_particle_around_center() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    state.tick(&inputs(200.0, 200.0, Some(20.0)), &mut list);
    let discs: Vec<_> = list.discs().collect();
    assert_eq!(discs.len(), NUM_PARTICLES);
    // Discs are recorded in canvas coordinates, offset by the center.
    let mean = discs.iter().fold(Vec2::ZERO, |acc, d| acc + d.0) / discs.len() as f32;
    assert!((mean - VIEW.center()).length() < 150.0, "mean {mean:?}");
}

#[test]
fn particle_count_is_invariant_across_ticks_and_resizes() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    let sizes = [
        Viewport::new(320.0, 240.0),
        Viewport::new(1920.0, 1080.0),
        Viewport::new(0.0, 0.0),
        Viewport::new(800.0, 600.0),
    ];
    for (i, size) in sizes.iter().enumerate() {
        for f in 0..40 {
            let y = (f * 37 % 600) as f32;
            state.tick(&inputs(f as f32 * 20.0, y, Some(i as f32 * 60.0)), &mut list);
            if f == 20 {
                state.press(&mut list);
            }
            assert_eq!(state.particles().len(), NUM_PARTICLES);
        }
        state.resize(*size, &mut list);
        assert_eq!(state.particles().len(), NUM_PARTICLES);
        list.drain();
    }
}

#[test]
fn resize_rebuilds_particles_for_new_width() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    let big = Viewport::new(3000.0, 1000.0);
    state.resize(big, &mut list);
    assert_eq!(state.viewport(), big);
    for p in state.particles() {
        let r = p.position.length();
        assert!(r >= 600.0 - 1e-2 && r <= 1000.0 + 1e-2, "radius {r}");
    }
    let (rect, color) = list.rects().last().unwrap();
    assert_eq!(rect, Rect::covering(big));
    assert_eq!(color.a, 1.0);
}

#[test]
fn resize_to_empty_is_ignored() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    state.resize(Viewport::new(0.0, 480.0), &mut list);
    assert_eq!(state.viewport(), VIEW);
    assert!(list.commands.is_empty());
}

#[test]
fn offscreen_particle_is_reseeded_on_ring_in_same_tick() {
    let mut state = make_state();
    let mut list = CommandList::new(VIEW);
    state.particles_mut()[0].position = Vec2::new(10_000.0, 0.0);
    state.particles_mut()[1].life = 0.0;
    state.particles_mut()[1].position = Vec2::ZERO;

    state.tick(&inputs(400.0, 300.0, Some(0.0)), &mut list);

    for p in &state.particles()[..2] {
        let r = p.position.length();
        assert!(r >= 160.0 - 1e-3 && r <= 800.0 / 3.0 + 1e-3, "radius {r}");
        assert!(p.life >= 150.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }
}

#[test]
fn zero_sized_canvas_never_produces_nan() {
    let mut state = FearState::new(&SimParams::default(), Viewport::new(0.0, 0.0)).unwrap();
    let mut list = CommandList::new(Viewport::new(0.0, 0.0));
    let p = state.tick(&inputs(10.0, 10.0, Some(100.0)), &mut list);
    assert!(p.combined_fear.is_finite());
    assert!(p.mouse_force_x.is_finite());
    assert!(state.particles().iter().all(|p| p.position.is_finite()));
}

#[test]
fn zero_particles_is_a_configuration_error() {
    let params = SimParams {
        num_particles: 0,
        ..SimParams::default()
    };
    assert!(matches!(
        FearState::new(&params, VIEW),
        Err(FearError::NoParticles)
    ));
}

#[test]
fn same_seed_gives_same_simulation() {
    let mut a = make_state();
    let mut b = make_state();
    let mut la = CommandList::new(VIEW);
    let mut lb = CommandList::new(VIEW);
    for f in 0..25 {
        let i = inputs(f as f32 * 30.0, 250.0, Some(80.0));
        a.tick(&i, &mut la);
        b.tick(&i, &mut lb);
    }
    assert_eq!(la.commands, lb.commands);
}
