// Host-side tests for a single particle's lifecycle, motion and appearance.

use fear_core::*;
use glam::Vec2;
use rand::prelude::*;

/// Noise that returns the same value everywhere, for predictable steering.
struct ConstNoise(f32);

impl NoiseSource for ConstNoise {
    fn sample(&self, _x: f32, _y: f32, _t: f32) -> f32 {
        self.0
    }
}

const VIEW: Viewport = Viewport::new(800.0, 600.0);

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn params(combined_fear: f32) -> FrameParams {
    FrameParams {
        combined_fear,
        fear_intensity: 1.0,
        noise_influence: 1.0,
        ..FrameParams::default()
    }
}

fn palette() -> Palette {
    Palette::parse(&VIOLET_HEX).unwrap()
}

#[test]
fn reset_places_particle_on_spawn_ring() {
    let mut rng = rng();
    let mut p = Particle::new(VIEW, &mut rng);
    let r_min = VIEW.width / 5.0;
    let r_max = VIEW.width / 3.0;
    for _ in 0..500 {
        p.reset(VIEW, &mut rng);
        let r = p.position.length();
        assert!(r >= r_min - 1e-3 && r <= r_max + 1e-3, "radius {r}");
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.acceleration, Vec2::ZERO);
        assert!(p.life >= 150.0 && p.life < 255.0, "life {}", p.life);
        assert!(p.color_seed >= 0.0 && p.color_seed < 1.0);
    }
}

#[test]
fn flow_force_follows_noise_angle() {
    let mut rng = rng();
    let mut p = Particle::new(VIEW, &mut rng);

    // noise 0 -> angle 0 -> push along +x with magnitude 0.1 * fear
    p.update(&params(1.0), &ConstNoise(0.0), &mut rng);
    assert!((p.velocity - Vec2::new(0.1, 0.0)).length() < 1e-5, "{:?}", p.velocity);
    assert_eq!(p.acceleration, Vec2::ZERO);

    // noise 0.25 -> 0.25 * 1080 = 270 degrees -> straight up (negative y)
    p.velocity = Vec2::ZERO;
    p.update(&params(1.0), &ConstNoise(0.25), &mut rng);
    assert!((p.velocity - Vec2::new(0.0, -0.1)).length() < 1e-5, "{:?}", p.velocity);
}

#[test]
fn horizontal_pull_adds_to_acceleration() {
    let mut rng = rng();
    let mut p = Particle::new(VIEW, &mut rng);
    let mut fp = params(1.0);
    fp.mouse_force_x = 0.05;
    p.update(&fp, &ConstNoise(0.0), &mut rng);
    assert!((p.velocity.x - 0.15).abs() < 1e-5);
}

#[test]
fn velocity_is_capped_by_fear_scaled_max_speed() {
    let mut rng = rng();
    let mut p = Particle::new(VIEW, &mut rng);
    let mut fp = params(0.5);
    fp.mouse_force_x = 10.0;
    for _ in 0..20 {
        p.update(&fp, &ConstNoise(0.3), &mut rng);
        assert!(p.velocity.length() <= PARTICLE_MAX_SPEED * 0.5 + 1e-4);
    }
}

#[test]
fn life_stays_within_bounds_for_any_update_sequence() {
    let mut rng = rng();
    let noise = NoiseField::new(3);
    let mut p = Particle::new(VIEW, &mut rng);
    for step in 0..1000 {
        let fear = (step % 17) as f32 * 0.7;
        p.update(&params(fear), &noise, &mut rng);
        assert!(p.life >= 0.0 && p.life <= 255.0, "life {}", p.life);
    }
    assert_eq!(p.life, 0.0);
}

#[test]
fn life_decays_faster_with_more_fear() {
    let mut rng = rng();
    let mut calm = Particle::new(VIEW, &mut rng);
    calm.life = 200.0;
    let mut scared = calm.clone();
    calm.update(&params(0.5), &ConstNoise(0.0), &mut rng);
    scared.update(&params(5.0), &ConstNoise(0.0), &mut rng);
    assert!((calm.life - (200.0 - 1.1)).abs() < 1e-4);
    assert!((scared.life - (200.0 - 2.0)).abs() < 1e-4);
}

#[test]
fn offscreen_uses_half_extent_plus_margin() {
    let mut rng = rng();
    let mut p = Particle::new(VIEW, &mut rng);
    p.life = 200.0;

    p.position = Vec2::new(400.0 + 49.0, 0.0);
    assert!(!p.is_offscreen(VIEW));
    p.position = Vec2::new(-(400.0 + 51.0), 0.0);
    assert!(p.is_offscreen(VIEW));
    p.position = Vec2::new(0.0, 300.0 + 51.0);
    assert!(p.is_offscreen(VIEW));
    p.position = Vec2::new(0.0, -(300.0 + 49.0));
    assert!(!p.is_offscreen(VIEW));

    p.position = Vec2::ZERO;
    p.life = 0.0;
    assert!(p.is_offscreen(VIEW));
}

#[test]
fn healthy_particle_uses_its_seed_dying_one_uses_noise() {
    let mut rng = rng();
    let mut p = Particle::new(VIEW, &mut rng);
    p.color_seed = 0.2;
    p.life = 180.0;
    assert_eq!(p.blend_ratio(0.0, &ConstNoise(0.75)), 0.2);
    p.life = 99.0;
    assert_eq!(p.blend_ratio(0.0, &ConstNoise(0.75)), 0.75);
}

#[test]
fn render_draws_primary_disc_without_dread_or_jolt() {
    let mut rng = rng();
    let mut p = Particle::new(VIEW, &mut rng);
    p.color_seed = 0.0;
    p.life = 255.0;
    p.position = Vec2::new(12.0, -8.0);

    let pal = palette();
    let mut list = CommandList::new(VIEW);
    p.render(&params(1.0), &pal, &ConstNoise(0.0), &mut list);

    let discs: Vec<_> = list.discs().collect();
    assert_eq!(discs.len(), 1);
    let (center, diameter, color) = discs[0];
    assert_eq!(center, Vec2::new(12.0, -8.0));
    assert_eq!(diameter, 1.0);
    assert!((color.h - pal.primary.h).abs() < 1e-4);
    assert!((color.s - pal.primary.s).abs() < 1e-4);
    assert!((color.b - pal.primary.b).abs() < 1e-4);
    assert!((color.a - 0.8).abs() < 1e-6);
}

#[test]
fn dread_desaturates_and_darkens_with_floors() {
    let mut rng = rng();
    let p = Particle::new(VIEW, &mut rng);
    let pal = palette();
    let mut fp = params(1.0);
    fp.dread_level = 1.0;
    let c = p.color(&fp, &pal, 0.0);
    let expected_s = (pal.primary.s * 0.5).max(20.0);
    let expected_b = (pal.primary.b * 0.7).max(10.0);
    assert!((c.s - expected_s).abs() < 1e-4);
    assert!((c.b - expected_b).abs() < 1e-4);

    let grey = Palette {
        primary: Hsba::new(0.0, 10.0, 5.0, 1.0),
        ..pal
    };
    let floored = p.color(&fp, &grey, 0.0);
    assert_eq!(floored.s, 20.0);
    assert_eq!(floored.b, 10.0);
}

#[test]
fn jolt_pulls_color_toward_accent1() {
    let mut rng = rng();
    let p = Particle::new(VIEW, &mut rng);
    let pal = palette();
    let mut fp = params(1.0);
    let idle = p.color(&fp, &pal, 0.0);

    fp.jolt_counter = 30;
    let full = p.color(&fp, &pal, 0.0);
    let expected = idle.lerp(&pal.accent1, 0.8);
    assert!((full.h - expected.h).abs() < 1e-3);
    assert!((full.s - expected.s).abs() < 1e-3);

    fp.jolt_counter = 15;
    let half = p.color(&fp, &pal, 0.0);
    let expected = idle.lerp(&pal.accent1, 0.4);
    assert!((half.h - expected.h).abs() < 1e-3);
}

#[test]
fn point_size_scales_with_fear_and_is_clamped() {
    let mut rng = rng();
    let p = Particle::new(VIEW, &mut rng);
    let mut fp = params(1.0);
    fp.fear_intensity = 1.0;
    fp.dread_level = 0.0;
    assert_eq!(p.point_size(&fp, 0.0), 1.0);
    assert!((p.point_size(&fp, 1.0) - 3.0).abs() < 1e-5);

    fp.fear_intensity = 4.0;
    fp.dread_level = 1.0;
    assert_eq!(p.point_size(&fp, 1.0), 8.0);

    // A collapsed size range still never drops below one pixel.
    fp.fear_intensity = 0.0;
    fp.dread_level = 0.0;
    assert_eq!(p.point_size(&fp, 0.9), 1.0);
}

#[test]
fn alpha_tracks_remaining_life() {
    let mut rng = rng();
    let mut p = Particle::new(VIEW, &mut rng);
    p.life = 0.0;
    assert_eq!(p.alpha(), 0.0);
    p.life = 127.5;
    assert!((p.alpha() - 0.4).abs() < 1e-6);
}
