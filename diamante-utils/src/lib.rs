/// Generic embed helpers shared across commands.
pub mod embed;
/// Shared time helpers.
pub mod time;
