pub mod color;
pub mod config;
pub mod draw;
pub mod entity;
pub mod fixed;
pub mod iso;
pub mod sprite;
pub mod surface;
pub mod transfer;

pub use anyhow::{Error, Result};
pub use color::Rgb565;
pub use config::DisplayConfig;
pub use draw::DrawError;
pub use entity::{Direction, Entity};
pub use fixed::Fixed;
pub use iso::{Camera, ScreenPoint, WorldPoint};
pub use sprite::{AlphaSprite, ChromaSprite, SpritePixel};
pub use surface::Surface;
pub use transfer::{DisplayBus, RecordingBus, Window};
