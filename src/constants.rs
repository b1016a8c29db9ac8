/// Tuning constants for the immersive section effect.
///
/// Everything here is a fixed design value, not a configuration surface;
/// keeping the magic numbers in one place makes the intended behavior
/// readable from the names alone.
// Host DOM contract: the effect wires itself to these four elements and
// silently skips any feature whose element is missing.
pub const SECTION_ID: &str = "immersive-graphics";
pub const RENDER_CANVAS_ID: &str = "webgl-canvas";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const RIPPLE_CANVAS_ID: &str = "ripple-canvas";

// Frame driver
pub const TIME_STEP: f32 = 0.01; // elapsed-time accumulator increment per tick
pub const POINTER_SMOOTHING: f32 = 0.05; // exponential smoothing factor per tick

// Particle field
pub const PARTICLE_CAP: usize = 400;
pub const PARTICLE_PER_WIDTH_DIVISOR: f32 = 3.0; // count = min(cap, width / divisor)
pub const PARTICLE_DRIFT_MAX: f32 = 0.25; // own velocity in [-max, max) px/frame
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 3.0; // radius in [min, min + span)
pub const PARTICLE_WHITE_RATIO: f64 = 0.7; // remainder is pink
pub const PARTICLE_PARALLAX_MIN: f32 = 0.02;
pub const PARTICLE_PARALLAX_SPAN: f32 = 0.05; // coefficient in [min, min + span)
pub const PARALLAX_DAMP: f32 = 0.01; // scales the pointer offset into px/frame
pub const PARTICLE_GLOW_BLUR: f64 = 10.0;
pub const PARTICLE_WHITE: &str = "rgba(240, 240, 240, 0.8)";
pub const PARTICLE_PINK: &str = "rgba(255, 0, 110, 0.8)";

// Ripples
pub const RIPPLE_MAX_RADIUS: f32 = 200.0;
pub const RIPPLE_GROWTH_PER_FRAME: f32 = 3.0;
pub const RIPPLE_FADE_PER_FRAME: f32 = 0.015;
pub const RIPPLE_LINE_WIDTH: f64 = 2.0;
pub const RIPPLE_GLOW_BLUR: f64 = 15.0;
pub const RIPPLE_STROKE_ALPHA: f32 = 0.6; // stroke alpha = ring opacity * this
pub const SETTLE_DELAY_MS: i32 = 100; // quiet period before a settled move may ripple
pub const SETTLE_RIPPLE_CHANCE: f64 = 0.05; // roughly 1 in 20 settled moves
pub const CLICK_RIPPLE_COUNT: i32 = 3;
pub const CLICK_RIPPLE_SPACING_MS: i32 = 100;

// Centerpiece spiral
pub const SPIRAL_SPIN_PER_FRAME: f32 = 0.003; // Y rotation rate
pub const SPIRAL_BASE_TILT: f32 = std::f32::consts::FRAC_PI_6;
pub const SPIRAL_WOBBLE_AMPLITUDE: f32 = 0.1;
pub const SPIRAL_WOBBLE_RATE: f32 = 0.5; // of the elapsed-time accumulator
pub const SCROLL_DISTORTION_RATE: f32 = 0.001;
pub const SCROLL_DISTORTION_AMPLITUDE: f32 = 0.3;

// Torus-knot geometry
pub const KNOT_RADIUS: f32 = 3.0;
pub const KNOT_TUBE: f32 = 1.0;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 200;
pub const KNOT_RADIAL_SEGMENTS: u32 = 32;
pub const KNOT_P: u32 = 2; // windings around the axis of symmetry
pub const KNOT_Q: u32 = 3; // windings around the torus interior

// Infinite space grid
pub const GRID_SIZE: i32 = 8; // squares per axis
pub const GRID_SPACING: f32 = 6.0;
pub const GRID_DEPTH_LAYERS: i32 = 15;
pub const GRID_BASE_DEPTH: f32 = -20.0; // z of the nearest layer at build time
pub const SQUARE_COUNT: usize = (GRID_SIZE * GRID_SIZE * GRID_DEPTH_LAYERS) as usize;
pub const SQUARE_EXTENT: f32 = 2.0; // edge length of one square face
pub const SQUARE_THICKNESS: f32 = 0.1;
pub const SQUARE_SPEED_MIN: f32 = 0.1;
pub const SQUARE_SPEED_SPAN: f32 = 0.05; // speed in [min, min + span) per frame
pub const SQUARE_RECYCLE_Z: f32 = 15.0; // past this z a square snaps back to its initial z
pub const SQUARE_BASE_OPACITY: f32 = 0.3;
pub const SQUARE_OPACITY_MIN: f32 = 0.1;
pub const SQUARE_OPACITY_MAX: f32 = 0.4;
pub const SQUARE_FADE_DIVISOR: f32 = 40.0; // opacity = clamp(1 - |z| / divisor)
pub const SQUARE_DRIFT_PER_FRAME: f32 = 0.001; // rotational drift on two axes

// Camera
pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_TILT_RANGE: f32 = 0.1; // full swing; +-0.05 rad from center
pub const CAMERA_EASE: f32 = 0.02; // exponential easing factor per tick

// Renderer
pub const DEVICE_PIXEL_RATIO_CAP: f64 = 2.0;
