/// Kind-list decode command.
pub mod decode;
/// Kind description command.
pub mod describe;
/// Single-value encode command.
pub mod encode;
/// CLI error type.
pub mod error;
/// Hex and file input loading.
pub mod input;
/// Tracing subscriber setup.
pub mod logging;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod util;

pub use error::{CliError, Result};
