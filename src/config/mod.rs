/// Main configuration module.
///
/// Re-exports the gameplay configuration.
pub mod game;
