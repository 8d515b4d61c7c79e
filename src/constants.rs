// DOM wiring constants used by the web frontend.

// Mount points
pub const APP_ROOT_ID: &str = "app"; // everything route-specific renders in here
pub const PAGE_ROOT_ID: &str = "page";
pub const NAV_ID: &str = "site-nav";

// Intro overlay
pub const INTRO_OVERLAY_ID: &str = "logo-intro";
pub const INTRO_BLUR_ID: &str = "logo-intro-blur";

// Static assets
pub const LOGO_SRC: &str = "/assets/logo.png";
pub const PORTRAIT_SRC: &str = "/assets/portrait.jpg";

// Navigation
pub const NAV_ACTIVE_CLASS: &str = "nav-active";

// Frame loop
// Re-measure element boxes at least this often even without a resize event (seconds)
pub const LAYOUT_REFRESH_SEC: f32 = 0.5;
