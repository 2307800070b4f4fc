//! `berth version`.

use anyhow::Result;

/// Print the CLI version.
///
/// # Errors
///
/// Never fails; signature matches the other command handlers.
pub fn run() -> Result<()> {
    println!("berth {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
