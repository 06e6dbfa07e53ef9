use crate::color::Hsba;
use crate::constants::*;
use crate::error::FearError;
use crate::mapping::{map_range, map_range_clamped};
use crate::noise_field::{NoiseField, NoiseSource};
use crate::palette::{Palette, PaletteHex, PaletteKind, PaletteSet, STEEL_HEX, VIOLET_HEX};
use crate::particle::{FrameParams, Particle};
use crate::surface::{Rect, Surface, Viewport};
use glam::Vec2;
use rand::prelude::*;

/// Runtime-selectable simulation settings.
#[derive(Clone, Debug)]
pub struct SimParams {
    pub num_particles: usize,
    /// Seeds both the particle RNG and the noise field.
    pub seed: u64,
    pub noise_octaves: u32,
    pub noise_falloff: f64,
    pub initial_fear_intensity: f32,
    /// Dread used until (and whenever) no slider value is available.
    pub initial_dread_level: f32,
    pub violet: PaletteHex,
    pub steel: PaletteHex,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            num_particles: NUM_PARTICLES,
            seed: 42,
            noise_octaves: NoiseField::DEFAULT_OCTAVES,
            noise_falloff: NoiseField::DEFAULT_FALLOFF,
            initial_fear_intensity: DEFAULT_FEAR_INTENSITY,
            initial_dread_level: DEFAULT_DREAD_LEVEL,
            violet: VIOLET_HEX,
            steel: STEEL_HEX,
        }
    }
}

/// Raw host inputs sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    /// Pointer position in canvas pixels (top-left origin).
    pub pointer: Vec2,
    /// Raw slider value in `[0, 200]`, or `None` when there is no slider.
    pub slider: Option<f32>,
}

/// Map a raw slider value to a dread level in `[0, 1]`.
#[inline]
pub fn dread_from_slider(value: f32) -> f32 {
    map_range_clamped(value, 0.0, SLIDER_MAX, 0.0, 1.0)
}

/// Map pointer height to momentary fear: the top edge is most intense.
#[inline]
pub fn fear_from_pointer_y(y: f32, canvas_height: f32) -> f32 {
    map_range_clamped(y, canvas_height, 0.0, FEAR_MIN, FEAR_MAX)
}

/// The simulation controller: owns the particles and turns inputs into the
/// scalars that drive them.
pub struct FearState<N: NoiseSource = NoiseField> {
    particles: Vec<Particle>,
    num_particles: usize,
    palettes: PaletteSet,
    active: PaletteKind,
    viewport: Viewport,
    noise: N,
    rng: StdRng,

    time_offset: f32,
    fear_intensity: f32,
    dread_level: f32,
    combined_fear: f32,
    flow_noise_influence: f32,
    mouse_force_x: f32,
    panic_jolt_counter: u32,
    jolt_flash_alpha: f32,
}

impl FearState<NoiseField> {
    pub fn new(params: &SimParams, viewport: Viewport) -> Result<Self, FearError> {
        let noise =
            NoiseField::with_detail(params.seed as u32, params.noise_octaves, params.noise_falloff);
        Self::with_noise(params, viewport, noise)
    }
}

impl<N: NoiseSource> FearState<N> {
    pub fn with_noise(params: &SimParams, viewport: Viewport, noise: N) -> Result<Self, FearError> {
        if params.num_particles == 0 {
            return Err(FearError::NoParticles);
        }
        let palettes = PaletteSet::new(&params.violet, &params.steel)?;
        let mut state = Self {
            particles: Vec::with_capacity(params.num_particles),
            num_particles: params.num_particles,
            palettes,
            active: PaletteKind::default(),
            viewport,
            noise,
            rng: StdRng::seed_from_u64(params.seed),
            time_offset: 0.0,
            fear_intensity: params.initial_fear_intensity,
            dread_level: params.initial_dread_level.clamp(0.0, 1.0),
            combined_fear: 0.0,
            flow_noise_influence: 1.0,
            mouse_force_x: 0.0,
            panic_jolt_counter: 0,
            jolt_flash_alpha: 0.0,
        };
        state.spawn_particles();
        log::info!(
            "[fear] {} particles on {}x{} canvas",
            state.particles.len(),
            viewport.width,
            viewport.height
        );
        Ok(state)
    }

    fn spawn_particles(&mut self) {
        let viewport = self.viewport;
        let rng = &mut self.rng;
        self.particles.clear();
        self.particles
            .extend((0..self.num_particles).map(|_| Particle::new(viewport, rng)));
    }

    /// Advance one frame: fade the previous frame, flash if jolted, derive
    /// this frame's scalars, then move, draw and recycle every particle.
    pub fn tick(&mut self, inputs: &FrameInputs, surface: &mut impl Surface) -> FrameParams {
        if let Some(value) = inputs.slider {
            self.dread_level = dread_from_slider(value);
        }

        surface.reset_transform();
        // Trail fade uses the previous frame's intensity.
        let full = Rect::covering(self.viewport);
        surface.fill_rect(full, self.background().with_alpha(self.fade_alpha() / 255.0));
        if self.jolt_flash_alpha > 0.0 {
            surface.fill_rect(full, Hsba::WHITE.with_alpha(self.jolt_flash_alpha / 255.0));
            self.jolt_flash_alpha = (self.jolt_flash_alpha - JOLT_FLASH_DECAY).max(0.0);
        }

        surface.translate(self.viewport.center());
        let params = self.derive(inputs.pointer);

        let viewport = self.viewport;
        let palette = *self.palettes.get(self.active);
        let mut recycled = 0usize;
        for particle in self.particles.iter_mut() {
            particle.update(&params, &self.noise, &mut self.rng);
            particle.render(&params, &palette, &self.noise, surface);
            if particle.is_offscreen(viewport) {
                particle.reset(viewport, &mut self.rng);
                recycled += 1;
            }
        }
        if recycled > 0 {
            log::trace!("[fear] recycled {} particles", recycled);
        }

        self.time_offset += TIME_STEP_PER_FEAR * params.combined_fear;
        surface.reset_transform();
        params
    }

    /// Turn the pointer position into this frame's scalars, applying the jolt
    /// override (and consuming one jolt frame) when active.
    pub fn derive(&mut self, pointer: Vec2) -> FrameParams {
        let dread = self.dread_level;
        let Viewport { width, height } = self.viewport;

        let mut fear = fear_from_pointer_y(pointer.y, height);
        let mut combined = fear + dread * DREAD_WEIGHT;
        let x_norm = map_range(pointer.x, 0.0, width, -1.0, 1.0);
        let mut noise_influence = map_range_clamped(
            x_norm.abs(),
            0.0,
            1.0,
            NOISE_INFLUENCE_MIN,
            NOISE_INFLUENCE_MAX,
        ) + dread * NOISE_INFLUENCE_DREAD;
        let pull = map_range(
            combined,
            PULL_FEAR_RANGE.0,
            PULL_FEAR_RANGE.1,
            PULL_STRENGTH_RANGE.0,
            PULL_STRENGTH_RANGE.1,
        );
        let mut force_x = x_norm * pull;

        if self.panic_jolt_counter > 0 {
            fear = JOLT_FEAR_INTENSITY;
            noise_influence = JOLT_NOISE_INFLUENCE + dread;
            force_x = x_norm * JOLT_PULL_STRENGTH;
            combined = JOLT_COMBINED_FEAR + dread;
            self.panic_jolt_counter -= 1;
            if self.panic_jolt_counter == 0 {
                log::debug!("[jolt] ended");
            }
        }

        self.fear_intensity = fear;
        self.combined_fear = combined;
        self.flow_noise_influence = noise_influence;
        self.mouse_force_x = force_x;

        FrameParams {
            time_offset: self.time_offset,
            fear_intensity: fear,
            dread_level: dread,
            combined_fear: combined,
            noise_influence,
            mouse_force_x: force_x,
            jolt_counter: self.panic_jolt_counter,
        }
    }

    /// Alpha (out of 255) of the background rectangle laid over the previous
    /// frame.
    pub fn fade_alpha(&self) -> f32 {
        let base = map_range(
            self.fear_intensity,
            FEAR_MIN,
            FEAR_MAX,
            FADE_ALPHA_RANGE.0,
            FADE_ALPHA_RANGE.1,
        );
        base + map_range(self.dread_level, 0.0, 1.0, 0.0, FADE_DREAD_BONUS_MAX)
    }

    /// Swap palettes, repaint, and start a panic jolt.
    pub fn press(&mut self, surface: &mut impl Surface) {
        self.active = self.active.toggled();
        self.paint_background(surface);
        self.panic_jolt_counter = JOLT_FRAMES;
        self.jolt_flash_alpha = JOLT_FLASH_ALPHA;
        log::info!("[jolt] palette -> {:?}", self.active);
    }

    /// Rebuild every particle for a new canvas size. Empty sizes are ignored.
    pub fn resize(&mut self, viewport: Viewport, surface: &mut impl Surface) {
        if viewport.is_empty() {
            log::debug!("[fear] ignoring resize to {}x{}", viewport.width, viewport.height);
            return;
        }
        self.viewport = viewport;
        self.spawn_particles();
        self.paint_background(surface);
        log::info!("[fear] resized to {}x{}", viewport.width, viewport.height);
    }

    /// Opaque background over the whole canvas.
    pub fn paint_background(&self, surface: &mut impl Surface) {
        surface.reset_transform();
        surface.fill_rect(
            Rect::covering(self.viewport),
            self.background().with_alpha(1.0),
        );
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
    #[inline]
    pub fn palette_kind(&self) -> PaletteKind {
        self.active
    }
    #[inline]
    pub fn palette(&self) -> &Palette {
        self.palettes.get(self.active)
    }
    #[inline]
    pub fn background(&self) -> Hsba {
        self.palette().background
    }
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    #[inline]
    pub fn time_offset(&self) -> f32 {
        self.time_offset
    }
    #[inline]
    pub fn fear_intensity(&self) -> f32 {
        self.fear_intensity
    }
    #[inline]
    pub fn dread_level(&self) -> f32 {
        self.dread_level
    }
    #[inline]
    pub fn combined_fear(&self) -> f32 {
        self.combined_fear
    }
    #[inline]
    pub fn flow_noise_influence(&self) -> f32 {
        self.flow_noise_influence
    }
    #[inline]
    pub fn mouse_force_x(&self) -> f32 {
        self.mouse_force_x
    }
    #[inline]
    pub fn panic_jolt_counter(&self) -> u32 {
        self.panic_jolt_counter
    }
    #[inline]
    pub fn jolt_flash_alpha(&self) -> f32 {
        self.jolt_flash_alpha
    }
    #[inline]
    pub fn is_jolt_active(&self) -> bool {
        self.panic_jolt_counter > 0
    }
}
