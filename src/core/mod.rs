//! Platform-independent logic. Nothing in here touches the DOM, so it builds
//! and tests on the host as well as on wasm32.

pub mod constants;
pub mod intro;
pub mod logo;
pub mod nav;
pub mod progress;
pub mod route;
pub mod sections;
pub mod sequencer;
pub mod smooth;
pub mod tween;
pub mod vcard;
pub mod viewport;

pub use logo::{LogoMachine, LogoPhase, LogoStage, LogoTransform, LOGO_STAGES};
pub use progress::{progress, Boundary, ScrollRange};
pub use route::Route;
pub use sections::{mount_home, unmount_home, HomeTracks, Section, LOGO_ID};
pub use sequencer::{Binding, Frame, RuleSample, Scrub, Sequencer, Track, TrackId};
pub use smooth::{SmoothScroll, SmoothScrollConfig};
pub use tween::{Property, StylePatch, TweenRule};
pub use viewport::{ElementBox, ElementId, LayoutQuery, PageLayout, Viewport};
