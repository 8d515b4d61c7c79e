/// Animation and timing tuning constants shared by the core and the web layer.
///
/// This file has no imports so host tests can `include!` it directly.

// Smooth scrolling (wheel input is eased toward its target over this window)
pub const SMOOTH_SCROLL_DURATION_SEC: f32 = 1.2;
pub const SMOOTH_SCROLL_WHEEL_MULTIPLIER: f64 = 1.0;
// Below this distance (px) an animation snaps to its target
pub const SMOOTH_SCROLL_SNAP_PX: f64 = 0.5;
// Frame deltas above this are treated as a stall (tab switch) and clamped
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Viewport
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;

// Navigation highlight: a section is active once scrollY + offset reaches its top
pub const NAV_ACTIVE_OFFSET_PX: f64 = 120.0;

// Logo intro overlay
pub const INTRO_DELAY_SEC: f32 = 0.0;
pub const INTRO_FADE_SEC: f32 = 0.5;
pub const INTRO_BLUR_START_PX: f32 = 12.0;
pub const INTRO_BLUR_END_PX: f32 = 0.0;

// Non-scrubbed tracks play their 0..1 range over this many seconds
pub const TOGGLE_PLAY_SEC: f32 = 0.6;

// Logo keyframe poses, in stage order. Stage N runs from pose N to pose N+1.
pub const LOGO_ROTATION_DEG: [f32; 5] = [0.0, 90.0, 180.0, 270.0, 360.0];
pub const LOGO_SCALE: [f32; 5] = [1.0, 0.45, 0.45, 0.45, 0.3];
pub const LOGO_OFFSET_VW: [f32; 5] = [0.0, -34.0, 34.0, -34.0, 0.0];
pub const LOGO_OFFSET_VH: [f32; 5] = [0.0, -30.0, -30.0, -30.0, 0.0];
pub const LOGO_OPACITY: [f32; 5] = [1.0, 0.35, 0.35, 0.35, 0.0];

// vCard PHOTO folding (RFC 2425 line limit, in octets, excluding CRLF)
pub const VCARD_LINE_MAX: usize = 75;
// Square edge length of the exported portrait
pub const PORTRAIT_SIZE_PX: u32 = 400;
pub const PORTRAIT_JPEG_QUALITY: f64 = 0.85;
