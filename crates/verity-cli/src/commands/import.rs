//! Import command implementation.

use crate::cli::ImportArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::report::read_articles;
use verity_domain::traits::ReviewStore;
use verity_domain::ImportSummary;

/// Execute the import command.
pub async fn execute_import(args: ImportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut store = config.open_store()?;
    let summary = import(&args, &mut store)?;

    match formatter.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Quiet => println!("{}", summary.new_count),
        OutputFormat::Table => {
            println!(
                "{}",
                formatter.success(&format!("Imported {} new article(s)", summary.new_count))
            );
            if !summary.duplicates.is_empty() {
                println!(
                    "{}",
                    formatter.warning(&format!("Skipped {} duplicate(s):", summary.duplicates.len()))
                );
                for title in &summary.duplicates {
                    println!("  - {}", title);
                }
            }
        }
    }

    Ok(())
}

fn import<S>(args: &ImportArgs, store: &mut S) -> Result<ImportSummary>
where
    S: ReviewStore,
    crate::error::CliError: From<S::Error>,
{
    let articles = read_articles(&args.file)?;
    if articles.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No articles found in {}",
            args.file.display()
        )));
    }
    Ok(store.add_articles(&articles)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use verity_store::SqliteStore;

    #[test]
    fn test_import_twice_reports_duplicates() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("sheet.json");
        std::fs::write(
            &file,
            r#"[{"URL": "https://a.example", "Title": "A"}, {"URL": "https://b.example", "Title": "B"}]"#,
        )
        .unwrap();

        let mut store = SqliteStore::new(":memory:").unwrap();
        let args = ImportArgs { file };

        let first = import(&args, &mut store).unwrap();
        assert_eq!(first.new_count, 2);

        let second = import(&args, &mut store).unwrap();
        assert_eq!(second.new_count, 0);
        assert_eq!(second.duplicates, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_import_empty_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("empty.json");
        std::fs::write(&file, "[]").unwrap();

        let mut store = SqliteStore::new(":memory:").unwrap();
        let result = import(&ImportArgs { file }, &mut store);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
