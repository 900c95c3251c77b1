// src/lib.rs

pub mod auth;
pub mod game;

pub use crate::auth::{Authenticator, Role, StaticAuthenticator};
pub use crate::game::{Game, GameError};

pub use combat;
pub use items;
pub use progression;
