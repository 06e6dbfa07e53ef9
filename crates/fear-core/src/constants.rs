// Shared simulation tuning constants used by both web and native frontends.

// Population
pub const NUM_PARTICLES: usize = 120;

// Particle spawn ring, as fractions of canvas width
pub const SPAWN_RADIUS_MIN_FRAC: f32 = 1.0 / 5.0;
pub const SPAWN_RADIUS_MAX_FRAC: f32 = 1.0 / 3.0;
pub const OFFSCREEN_MARGIN: f32 = 50.0; // px beyond the half-extent before a reset

// Particle motion
pub const PARTICLE_MAX_SPEED: f32 = 2.0; // scaled by combined fear each frame
pub const JITTER_SCALE: f32 = 0.2;
pub const FLOW_NOISE_SCALE: f32 = 0.005; // position -> noise coordinate
pub const FLOW_ANGLE_TURNS: f32 = 3.0; // full turns per unit noise, before fear scaling
pub const FLOW_FORCE_SCALE: f32 = 0.1;

// Particle life
pub const LIFE_MAX: f32 = 255.0;
pub const LIFE_SPAWN_MIN: f32 = 150.0;
pub const LIFE_DECAY_BASE: f32 = 1.0;
pub const LIFE_DECAY_FEAR: f32 = 0.2;
pub const LOW_LIFE_THRESHOLD: f32 = 100.0; // below this, color follows the noise field
pub const DECAY_NOISE_SCALE: f32 = 0.01;
pub const DECAY_NOISE_TIME_SCALE: f32 = 0.5;

// Particle appearance
pub const DREAD_DESATURATION: f32 = 0.5;
pub const DREAD_DARKENING: f32 = 0.3;
pub const SATURATION_FLOOR: f32 = 20.0;
pub const BRIGHTNESS_FLOOR: f32 = 10.0;
pub const JOLT_ACCENT_MAX_BLEND: f32 = 0.8;
pub const POINT_SIZE_MIN: f32 = 1.0;
pub const POINT_SIZE_MAX: f32 = 8.0;
pub const POINT_SIZE_FEAR_SCALE: f32 = 3.0;
pub const PARTICLE_ALPHA_MAX: f32 = 0.8;

// Input mapping
pub const SLIDER_MAX: f32 = 200.0;
pub const FEAR_MIN: f32 = 0.5;
pub const FEAR_MAX: f32 = 3.5;
pub const DREAD_WEIGHT: f32 = 4.0; // dread contribution to combined fear
pub const NOISE_INFLUENCE_MIN: f32 = 0.5;
pub const NOISE_INFLUENCE_MAX: f32 = 1.5;
pub const NOISE_INFLUENCE_DREAD: f32 = 0.8;
pub const PULL_FEAR_RANGE: (f32, f32) = (0.5, 5.5);
pub const PULL_STRENGTH_RANGE: (f32, f32) = (0.05, 0.3);
pub const TIME_STEP_PER_FEAR: f32 = 0.005;

// Defaults before the first input arrives
pub const DEFAULT_FEAR_INTENSITY: f32 = 1.0;
pub const DEFAULT_DREAD_LEVEL: f32 = 0.2;

// Panic jolt
pub const JOLT_FRAMES: u32 = 30;
pub const JOLT_FEAR_INTENSITY: f32 = 4.0;
pub const JOLT_NOISE_INFLUENCE: f32 = 2.5; // plus dread
pub const JOLT_PULL_STRENGTH: f32 = 0.4;
pub const JOLT_COMBINED_FEAR: f32 = 5.0; // plus dread
pub const JOLT_FLASH_ALPHA: f32 = 300.0; // out of 255, saturates on the first frames
pub const JOLT_FLASH_DECAY: f32 = 20.0;

// Background trail fade (alpha out of 255)
pub const FADE_ALPHA_RANGE: (f32, f32) = (5.0, 20.0);
pub const FADE_DREAD_BONUS_MAX: f32 = 10.0;

// Webcam inset, anchored bottom-left
pub const WEBCAM_INSET_WIDTH: f32 = 230.0;
pub const WEBCAM_INSET_MARGIN: f32 = 20.0;
pub const WEBCAM_CAPTURE_SIZE: (u32, u32) = (320, 240);

// Placeholder shown until the simulation exists
pub const PLACEHOLDER_TEXT: &str = "Loading Fear...";
pub const PLACEHOLDER_TEXT_SIZE: f32 = 24.0;
