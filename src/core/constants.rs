use glam::Vec3;

// Shared tunnel tuning constants. Distances are world units, times are seconds.

// Tunnel layout
pub const TUNNEL_LENGTH: f32 = 80.0; // depth covered by particles, rings and camera travel
pub const BAND_COUNT: usize = 3; // one color band per content stage
pub const BAND_EDGES: [f32; BAND_COUNT - 1] = [-27.0, -54.0]; // z must be strictly greater to stay in the nearer band

// Camera rig
pub const CAMERA_BASE_Z: f32 = 5.0;
pub const CAMERA_TRAVEL: f32 = -TUNNEL_LENGTH; // z offset at progress 1
pub const CAMERA_SMOOTHING: f32 = 0.08; // per-frame fraction of the remaining distance
pub const PARALLAX_X: f32 = 0.3;
pub const PARALLAX_Y: f32 = 0.15;
pub const LOOK_AT_PARALLAX: f32 = 0.5; // look-at follows half of the parallax offset
pub const LOOK_AHEAD: f32 = 10.0;
pub const CAMERA_FOVY_DEG: f32 = 70.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Particles
pub const PARTICLE_COUNT_DESKTOP: usize = 1200;
pub const PARTICLE_COUNT_MOBILE: usize = 600;
pub const PARTICLE_RADIUS_MIN: f32 = 2.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 4.0;
pub const PARTICLE_SPIN_PER_SEC: f32 = 0.03;
pub const PARTICLE_SIZE: f32 = 0.04;
pub const PARTICLE_OPACITY: f32 = 0.6;

// Band palette, near to far. Linear RGB; the surface applies the sRGB encode.
pub const BAND_COLORS: [[f32; 3]; BAND_COUNT] = [
    [0.1248, 0.1329, 0.8796], // indigo #6366f1
    [0.3916, 0.0908, 0.9301], // violet #a855f7
    [0.0437, 0.2232, 0.9216], // blue #3b82f6
];

// Rings
pub const RING_COUNT_DESKTOP: usize = 50;
pub const RING_COUNT_MOBILE: usize = 25;
pub const RING_RADIUS: f32 = 3.5;
pub const RING_THICKNESS: f32 = 0.01;
pub const RING_FADE_DISTANCE: f32 = 15.0; // fully transparent beyond this camera distance
pub const RING_MAX_OPACITY: f32 = 0.12;
pub const RING_SPIN_PER_SEC: f32 = 0.3;
pub const RING_SPIN_PHASE: f32 = 0.5; // per-index angular offset
pub const RING_COLOR: [f32; 3] = BAND_COLORS[0];

// Skill tag cloud
pub const CLOUD_RADIUS: f32 = 3.5;
pub const CLOUD_RADIUS_FILL: f32 = 0.8;
pub const CLOUD_FLATTEN: Vec3 = Vec3::new(1.0, 0.7, 0.4);
pub const CLOUD_DIST_FAR: f32 = 14.0; // in front of the camera when the zoom starts
pub const CLOUD_DIST_BEHIND: f32 = -6.0; // behind the camera when the zoom ends
pub const CLOUD_ZOOM_START: f32 = 0.58;
pub const CLOUD_ZOOM_SPAN: f32 = 0.22;
pub const TAG_STAGGER_START: f32 = 0.60;
pub const TAG_STAGGER_SPAN: f32 = 0.13;
pub const TAG_FADE_IN: f32 = 0.03;
pub const TAG_FADE_OUT_START: f32 = 0.73;
pub const TAG_FADE_OUT: f32 = 0.07;
pub const TAG_VISIBLE_MIN: f32 = 0.01;
pub const TAG_ORBIT_PER_SEC: f32 = 0.1;
pub const TAG_BOB_FREQ: f32 = 0.4;
pub const TAG_BOB_PHASE: f32 = 1.3;
pub const TAG_BOB_AMP: f32 = 0.12;
pub const TAG_DISTANCE_FACTOR: f32 = 6.0; // label height in world units at CSS scale 1

// Overlay layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const POINTER_EVENTS_MIN_OPACITY: f32 = 0.1;
pub const CARD_WIDTH_FRACTION: f32 = 0.8;
pub const CARD_GAP_PX: f32 = 12.0;
pub const DOT_ACTIVE_OPACITY: f32 = 1.0;
pub const DOT_IDLE_OPACITY: f32 = 0.3;
pub const DOT_ACTIVE_SCALE: f32 = 1.4;

// Project card tilt (desktop layout)
pub const TILT_MAX_DEG: f32 = 8.0; // at the card edge
pub const TILT_STIFFNESS: f32 = 150.0;
pub const TILT_DAMPING: f32 = 20.0; // unit mass
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const TILT_MAX_DT_SEC: f32 = 0.1;
pub const TILT_REST_EPSILON: f32 = 1e-3;

// Contact form
pub const FORM_STATUS_RESET_SEC: f64 = 5.0;

// Post-processing and fog
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 65.0;
pub const BACKGROUND_RGB: [f32; 3] = [0.0015, 0.0015, 0.0015]; // #050505, linear
pub const BLOOM_THRESHOLD: f32 = 0.2;
pub const BLOOM_STRENGTH_DESKTOP: f32 = 0.5;
pub const BLOOM_STRENGTH_MOBILE: f32 = 0.3;
pub const VIGNETTE_DARKNESS: f32 = 0.5;
pub const VIGNETTE_OFFSET: f32 = 0.3;
pub const DPR_MAX_DESKTOP: f64 = 1.5;
pub const DPR_MAX_MOBILE: f64 = 1.0;

// Cursor follower (pointer devices only)
pub const CURSOR_DOT_SEC: f32 = 0.1;
pub const CURSOR_RING_SEC: f32 = 0.35;
pub const CURSOR_TRAIL_BASE_SEC: f32 = 0.4;
pub const CURSOR_TRAIL_STEP_SEC: f32 = 0.12;
pub const CURSOR_TRAIL_OPACITY: [f32; 3] = [0.15, 0.1, 0.06];
pub const CURSOR_TRAIL_SIZE_PX: f32 = 30.0;
pub const CURSOR_TRAIL_SIZE_STEP_PX: f32 = 10.0;
pub const CURSOR_MAX_DT_SEC: f32 = 0.05; // clamp after tab switches
