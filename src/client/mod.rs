//! World server client layer.
//!
//! - Wire types for world snapshots and move directions
//! - Error taxonomy for failed requests
//! - The HTTP client itself

pub mod types;
pub mod error;
pub mod world_client;

pub use error::ClientError;
pub use types::{Direction, DirectionEncoding, WorldSnapshot};
pub use world_client::WorldClient;
