//! # framecast: an embeddable frame for low-latency stream players
//!
//! `framecast` sits between a host UI and an external player (for example a WebRTC client).
//! It does not move any media itself; it provides:
//! - **Layout**: [`layout::fit`] places the video inside its container for a [`layout::Sizing`] and [`layout::Rotate`] mode.
//! - **Lifecycle**: [`Frame`] creates the player on mount, re-runs the layout on resizes and state changes,
//!   and forwards play/stop, optionally fetching a playback token first via [`Authorize`].
//!
//! Includes optional logging and configuration.

mod auth;
mod config;
mod error;
mod frame;
mod log;
mod overlay;
mod player;
mod resize;

pub mod layout;

pub use auth::*;
pub use config::*;
pub use error::*;
pub use frame::*;
pub use log::*;
pub use overlay::*;
pub use player::*;
pub use resize::*;
