//! Heuristics command implementation.

use crate::config::Config;
use crate::error::Result;

/// Print the active heuristics tables as TOML.
///
/// With no heuristics file configured this is the built-in table set, a
/// starting point for operators who want to retune lists or quotas.
pub async fn execute_heuristics(config: &Config) -> Result<()> {
    let heuristics = config.heuristics()?;
    print!("{}", heuristics.to_toml()?);
    Ok(())
}
