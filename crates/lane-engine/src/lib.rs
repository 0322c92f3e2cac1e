pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod drive;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, SimulationState, RenderContext};
pub use api::types::{Color, EntityId};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::motion::{BoundsPolicy, Corridor, Motion, VerticalBand};
pub use components::sprite::{SpriteComponent, SpriteHandle};
pub use core::scene::Scene;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::{Camera2D, ViewRect, compute_view};
pub use renderer::traits::{FrameSnapshot, Renderer, present};
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{Axis, AxisState, Direction, InputState};
pub use assets::manifest::AssetManifest;
pub use assets::registry::SpriteRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use systems::drive::{DriveSpeeds, apply_drive};
pub use systems::motion::{integrate, clamp_to_corridor, apply_bounds};
pub use systems::render::{build_frame, build_render_buffer};
pub use systems::text::TextCommand;
pub use drive::config::{ConfigError, DriveConfig, TrackLayout, ViewMode};
pub use drive::game::DriveGame;
