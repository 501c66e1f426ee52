/// HTTP client configuration constants.
///
/// This module defines where the world server lives and how long a request may take.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4567";

/// Upper bound (in milliseconds) for a single world, move or restart request.
pub const REQUEST_TIMEOUT_MS: u64 = 2000;

/// Volume of the collect sound, between 0.0 and 1.0.
pub const COLLECT_VOLUME: f32 = 0.2;
