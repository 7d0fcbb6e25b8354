//! Host-independent engine for the rotary item selector: ring motion, gesture
//! classification, tick sync, crossfade transitions, audio lifecycle and
//! onboarding. Hosts drive a [`Session`] and carry out its [`Effect`]s.

pub mod angle;
pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod items;
pub mod motion;
pub mod onboarding;
pub mod platform;
pub mod playback;
pub mod rotation;
pub mod scheduler;
pub mod selection;
pub mod session;
pub mod tick;
pub mod transition;
pub mod visibility;

pub use audio::{AudioAsset, AudioBackend, AudioEngine, EngineStatus};
pub use config::EngineConfig;
pub use error::{AudioError, CatalogError, ConfigError};
pub use gesture::GestureOutcome;
pub use items::{Catalog, ItemSet};
pub use motion::{MotionPermission, Orientation};
pub use onboarding::{OnboardingStage, OnboardingView, StageFade};
pub use platform::Platform;
pub use session::{Effect, Effects, Session, ViewState};
pub use transition::TransitionPhase;
pub use visibility::RingVisibility;
