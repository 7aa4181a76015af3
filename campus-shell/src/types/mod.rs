//! Type definitions for the dashboard shell

mod fetch;
mod menu;
mod message;

pub use fetch::FetchState;
pub use menu::{EffectiveMenu, MenuEntry, MenuSubItem};
pub use message::{Effect, Message};
