pub mod api;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod error;
pub mod march;
pub mod optimizer;
pub mod pairing;
pub mod roster;
pub mod talents;
// cmd and reports belong to the binary (main.rs).

pub use crate::error::{MarchError, MsResult};
