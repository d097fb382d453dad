//! # API crate — the remote store shim for CarConnect
//!
//! Everything the app knows about the hosted backend lives here: the HTTP
//! client, the session it owns, the record types, and the error taxonomy.
//! The UI crates never touch `reqwest` or raw responses directly.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Authenticated REST + auth requests, session ownership |
//! | [`config`] | Base URL and anon key from the environment |
//! | [`models`] | `Profile` / `NewProfile` rows, auth user and session, state table |
//! | [`alias`] | Alias validation and collision-free generation |
//! | [`error`] | [`ApiError`] and message-based failure classification |

pub mod alias;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use alias::{generate_alias, is_valid_alias, unique_alias};
pub use client::{client, Client, PROFILES_TABLE};
pub use config::Config;
pub use error::ApiError;
pub use models::{
    plate_profile_id, state_abbreviation, AuthUser, NewProfile, Profile, Session, US_STATES,
};
