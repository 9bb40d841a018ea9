pub mod api;
pub mod bridge;
pub mod config;
pub mod core;
pub mod input;
pub mod model;
pub mod view;

// Re-export key types at crate root for convenience
pub use api::session::{Session, SessionConfig, ORBIT_SAMPLES};
pub use api::types::{BodyId, SessionEvent};
pub use bridge::snapshot::{BodySnapshot, FrameSnapshot, MoonSnapshot, SpriteSnapshot};
pub use bridge::wire::{WireBuffer, WireLayout};
pub use config::settings::Settings;
pub use config::store::{load_or_default, MemoryStore, PreferenceStore, StoreError};
pub use core::clock::SimulationClock;
pub use core::timer::{Phase, Pomodoro, TimerState};
pub use input::queue::{InputEvent, InputQueue};
pub use model::bodies::{body_info, BodyInfo, BODIES, PLANET_COUNT};
pub use model::sky::Star;
pub use view::viewport::{ViewBox, Viewport};
