use crate::color::Hsba;
use crate::constants::*;
use crate::mapping::{map_range, map_range_clamped};
use crate::noise_field::NoiseSource;
use crate::palette::Palette;
use crate::surface::{Surface, Viewport};
use glam::Vec2;
use rand::Rng;

/// Scalars derived once per frame by the controller and shared by every
/// particle's update and render.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameParams {
    pub time_offset: f32,
    pub fear_intensity: f32,
    pub dread_level: f32,
    pub combined_fear: f32,
    pub noise_influence: f32,
    pub mouse_force_x: f32,
    /// Remaining jolt frames after this frame's decrement; zero when idle.
    pub jolt_counter: u32,
}

/// One point drifting through the flow field. Position is relative to the
/// canvas center.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_speed: f32,
    pub life: f32,
    pub color_seed: f32,
}

impl Particle {
    pub fn new(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut p = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            max_speed: PARTICLE_MAX_SPEED,
            life: LIFE_MAX,
            color_seed: 0.0,
        };
        p.reset(viewport, rng);
        p
    }

    /// Re-seed on the spawn ring between `width / 5` and `width / 3` from
    /// the center, with fresh life and color seed.
    pub fn reset(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let r_min = viewport.width * SPAWN_RADIUS_MIN_FRAC;
        let r_max = viewport.width * SPAWN_RADIUS_MAX_FRAC;
        let radius = if r_max > r_min {
            rng.gen_range(r_min..r_max)
        } else {
            r_min
        };
        self.position = Vec2::from_angle(angle) * radius;
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.max_speed = PARTICLE_MAX_SPEED;
        self.life = rng.gen_range(LIFE_SPAWN_MIN..LIFE_MAX);
        self.color_seed = rng.gen::<f32>();
    }

    pub fn update(&mut self, params: &FrameParams, noise: &impl NoiseSource, rng: &mut impl Rng) {
        let fear = params.combined_fear;

        self.position.x += rng.gen_range(-1.0f32..=1.0) * fear * JITTER_SCALE;
        self.position.y += rng.gen_range(-1.0f32..=1.0) * fear * JITTER_SCALE;

        // Angle deliberately grows past a full turn at high fear.
        let scale = FLOW_NOISE_SCALE * params.noise_influence;
        let n = noise.sample(
            self.position.x * scale,
            self.position.y * scale,
            params.time_offset,
        );
        let angle_deg = n * 360.0 * FLOW_ANGLE_TURNS * fear;
        let flow = Vec2::from_angle(angle_deg.to_radians()) * (FLOW_FORCE_SCALE * fear);
        self.acceleration += flow;
        self.acceleration += Vec2::new(params.mouse_force_x, 0.0);

        self.velocity += self.acceleration;
        self.velocity = self.velocity.clamp_length_max((self.max_speed * fear).max(0.0));
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;

        self.life -= LIFE_DECAY_BASE + fear * LIFE_DECAY_FEAR;
        self.life = self.life.clamp(0.0, LIFE_MAX);
    }

    pub fn is_offscreen(&self, viewport: Viewport) -> bool {
        let half = viewport.half_extent();
        self.position.x.abs() > half.x + OFFSCREEN_MARGIN
            || self.position.y.abs() > half.y + OFFSCREEN_MARGIN
            || self.life <= 0.0
    }

    #[inline]
    pub fn is_dying(&self) -> bool {
        self.life < LOW_LIFE_THRESHOLD
    }

    /// Blend ratio between primary and accent2. Dying particles follow the
    /// noise field instead of their own seed.
    pub fn blend_ratio(&self, time_offset: f32, noise: &impl NoiseSource) -> f32 {
        if self.is_dying() {
            noise.sample(
                self.position.x * DECAY_NOISE_SCALE,
                self.position.y * DECAY_NOISE_SCALE,
                time_offset * DECAY_NOISE_TIME_SCALE,
            )
        } else {
            self.color_seed
        }
    }

    /// Final opaque color before the life-based alpha is applied.
    pub fn color(&self, params: &FrameParams, palette: &Palette, ratio: f32) -> Hsba {
        let dread = params.dread_level;
        let base = palette.primary.lerp(&palette.accent2, ratio);
        let s = (base.saturation() * (1.0 - dread * DREAD_DESATURATION))
            .clamp(SATURATION_FLOOR, 100.0);
        let b = (base.brightness() * (1.0 - dread * DREAD_DARKENING))
            .clamp(BRIGHTNESS_FLOOR, 100.0);
        let color = Hsba::new(base.hue(), s, b, 1.0);
        if params.jolt_counter > 0 {
            let t = map_range(
                params.jolt_counter as f32,
                0.0,
                JOLT_FRAMES as f32,
                0.0,
                JOLT_ACCENT_MAX_BLEND,
            );
            color.lerp(&palette.accent1, t)
        } else {
            color
        }
    }

    pub fn point_size(&self, params: &FrameParams, ratio: f32) -> f32 {
        let max = POINT_SIZE_FEAR_SCALE * (params.fear_intensity + params.dread_level);
        map_range(ratio, 0.0, 1.0, POINT_SIZE_MIN, max).clamp(POINT_SIZE_MIN, POINT_SIZE_MAX)
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        map_range_clamped(self.life, 0.0, LIFE_MAX, 0.0, PARTICLE_ALPHA_MAX)
    }

    pub fn render(
        &self,
        params: &FrameParams,
        palette: &Palette,
        noise: &impl NoiseSource,
        surface: &mut impl Surface,
    ) {
        let ratio = self.blend_ratio(params.time_offset, noise);
        let color = self.color(params, palette, ratio).with_alpha(self.alpha());
        let size = self.point_size(params, ratio);
        surface.fill_disc(self.position, size, color);
    }
}
