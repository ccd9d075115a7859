//! Verity Storage Layer
//!
//! Implements the `ReviewStore` trait on SQLite: shortlisted articles plus the
//! peer reviews human checkers record against them.
//!
//! # Examples
//!
//! ```no_run
//! use verity_domain::ReviewScores;
//! use verity_domain::traits::ReviewStore;
//! use verity_store::SqliteStore;
//!
//! let mut store = SqliteStore::new("verity.db").unwrap();
//! let scores = ReviewScores { accuracy: 3, credibility: 2, citation: 1, reasoning: 4, confidence: 8 };
//! store.add_review("https://example.com/story", scores, "no sources").unwrap();
//! ```

#![warn(missing_docs)]

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use verity_domain::traits::ReviewStore;
use verity_domain::{ArticleRecord, ImportSummary, Review, ReviewId, ReviewScores, StoreStatistics};

/// Characters of the URL used as title for articles created by a review
const AUTO_TITLE_CHARS: usize = 100;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Article not found
    #[error("Article not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `ReviewStore`
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `SqliteStore` instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }

    fn review_id_to_bytes(id: ReviewId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    fn bytes_to_review_id(bytes: &[u8]) -> Result<ReviewId, StoreError> {
        let arr: [u8; 16] = bytes.try_into().map_err(|_| {
            StoreError::InvalidData(format!("Expected 16 bytes for ReviewId, got {}", bytes.len()))
        })?;
        Ok(ReviewId::from_value(u128::from_be_bytes(arr)))
    }

    fn article_id(&self, url: &str) -> Result<Option<i64>, StoreError> {
        let id = self
            .conn
            .query_row("SELECT id FROM articles WHERE url = ?1", params![url], |row| row.get(0))
            .optional()?;
        Ok(id)
    }

    fn row_to_review(row: &rusqlite::Row<'_>) -> rusqlite::Result<Review> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_review_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        Ok(Review {
            id,
            url: row.get(1)?,
            scores: ReviewScores {
                accuracy: row.get(2)?,
                credibility: row.get(3)?,
                citation: row.get(4)?,
                reasoning: row.get(5)?,
                confidence: row.get(6)?,
            },
            notes: row.get(7)?,
            created_at: row.get::<_, i64>(8)? as u64,
        })
    }

    fn query_reviews(&self, filter: Option<&str>) -> Result<Vec<Review>, StoreError> {
        let mut sql = String::from(
            "SELECT r.id, a.url, r.accuracy, r.credibility, r.citation, r.reasoning, r.confidence, r.notes, r.created_at
             FROM reviews r JOIN articles a ON a.id = r.article_id",
        );
        if filter.is_some() {
            sql.push_str(" WHERE a.url = ?1");
        }
        sql.push_str(" ORDER BY r.created_at, r.rowid");

        let mut stmt = self.conn.prepare(&sql)?;
        let reviews = match filter {
            Some(url) => stmt.query_map(params![url], Self::row_to_review)?,
            None => stmt.query_map([], Self::row_to_review)?,
        }
        .collect::<Result<Vec<_>, _>>()?;

        Ok(reviews)
    }
}

impl ReviewStore for SqliteStore {
    type Error = StoreError;

    fn add_articles(&mut self, articles: &[ArticleRecord]) -> Result<ImportSummary, Self::Error> {
        let tx = self.conn.transaction()?;
        let mut summary = ImportSummary::default();
        let now = Self::now();

        for article in articles {
            let existing: Option<String> = tx
                .query_row(
                    "SELECT title FROM articles WHERE url = ?1",
                    params![&article.url],
                    |row| row.get(0),
                )
                .optional()?;

            match existing {
                Some(title) => {
                    if title.to_lowercase() == article.title.to_lowercase() {
                        summary.duplicates.push(article.title.clone());
                    }
                }
                None => {
                    tx.execute(
                        "INSERT INTO articles (url, title, created_at) VALUES (?1, ?2, ?3)",
                        params![&article.url, &article.title, now],
                    )?;
                    summary.new_count += 1;
                }
            }
        }

        tx.commit()?;
        tracing::debug!(
            new = summary.new_count,
            duplicates = summary.duplicates.len(),
            "imported articles"
        );
        Ok(summary)
    }

    fn list_articles(&self) -> Result<Vec<ArticleRecord>, Self::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT url, title FROM articles ORDER BY created_at DESC, id DESC")?;
        let articles = stmt
            .query_map([], |row| {
                Ok(ArticleRecord {
                    url: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    fn get_article(&self, url: &str) -> Result<Option<ArticleRecord>, Self::Error> {
        let article = self
            .conn
            .query_row(
                "SELECT url, title FROM articles WHERE url = ?1",
                params![url],
                |row| {
                    Ok(ArticleRecord {
                        url: row.get(0)?,
                        title: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(article)
    }

    fn add_review(
        &mut self,
        url: &str,
        scores: ReviewScores,
        notes: &str,
    ) -> Result<ReviewId, Self::Error> {
        scores.validate().map_err(StoreError::InvalidData)?;
        if url.trim().is_empty() {
            return Err(StoreError::InvalidData("URL must not be empty".to_string()));
        }

        let now = Self::now();
        let article_id = match self.article_id(url)? {
            Some(id) => id,
            None => {
                let title: String = url.chars().take(AUTO_TITLE_CHARS).collect();
                self.conn.execute(
                    "INSERT INTO articles (url, title, created_at) VALUES (?1, ?2, ?3)",
                    params![url, title, now],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        let id = ReviewId::new();
        self.conn.execute(
            "INSERT INTO reviews (id, article_id, accuracy, credibility, citation, reasoning, confidence, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                Self::review_id_to_bytes(id),
                article_id,
                scores.accuracy,
                scores.credibility,
                scores.citation,
                scores.reasoning,
                scores.confidence,
                notes,
                now,
            ],
        )?;

        tracing::debug!(url, %id, "recorded review");
        Ok(id)
    }

    fn reviews_for(&self, url: &str) -> Result<Vec<Review>, Self::Error> {
        self.query_reviews(Some(url))
    }

    fn all_reviews(&self) -> Result<Vec<Review>, Self::Error> {
        self.query_reviews(None)
    }

    fn statistics(&self) -> Result<StoreStatistics, Self::Error> {
        let count = |sql: &str| -> Result<usize, StoreError> {
            let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
            Ok(n as usize)
        };

        let total_articles = count("SELECT COUNT(*) FROM articles")?;
        let total_reviews = count("SELECT COUNT(*) FROM reviews")?;
        let articles_with_reviews = count("SELECT COUNT(DISTINCT article_id) FROM reviews")?;

        Ok(StoreStatistics {
            total_articles,
            total_reviews,
            articles_with_reviews,
            articles_without_reviews: total_articles - articles_with_reviews,
        })
    }
}
