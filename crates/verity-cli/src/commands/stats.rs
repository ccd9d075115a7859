//! Stats command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use verity_domain::traits::ReviewStore;

/// Execute the stats command.
pub async fn execute_stats(config: &Config, formatter: &Formatter) -> Result<()> {
    let store = config.open_store()?;
    let stats = store.statistics()?;

    println!("{}", formatter.format_statistics(&stats)?);
    Ok(())
}
