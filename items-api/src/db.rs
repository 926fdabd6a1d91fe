use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;

/// A single item row with metadata
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

/// Result of a list query with pagination info
#[derive(Debug, Clone)]
pub struct ListResult {
    pub items: Vec<ItemRow>,
    pub total_count: i64,
}

/// Sort order options for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    IdAsc,
    IdDesc,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    /// Convert to SQL ORDER BY clause
    fn to_sql(self) -> &'static str {
        match self {
            SortOrder::IdAsc => "id ASC",
            SortOrder::IdDesc => "id DESC",
            SortOrder::NameAsc => "name ASC",
            SortOrder::NameDesc => "name DESC",
            SortOrder::PriceAsc => "price ASC",
            SortOrder::PriceDesc => "price DESC",
        }
    }
}

const SELECT_COLUMNS: &str = "id, name, price, created_at, updated_at";

/// Shareable SQLite-backed item store for use across async handlers
#[derive(Clone)]
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    /// Open (or create) the database at the given URL and run migrations
    ///
    /// Accepts any sqlx SQLite URL, e.g. `sqlite://items.db` or
    /// `sqlite::memory:`. In-memory databases exist per connection, so the
    /// pool is capped at a single connection for them; every checkout then
    /// sees the same tables.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let in_memory = database_url.contains(":memory:");

        let mut options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);
        if !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { 5 })
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database: {}", database_url))?;

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("SQLite connection established: {}", database_url);

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Insert a new item and return the stored row
    pub async fn insert(&self, name: &str, price: f64) -> Result<ItemRow> {
        let now = Utc::now().to_rfc3339();

        let row: ItemRow = sqlx::query_as(&format!(
            "INSERT INTO items (name, price, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(name)
        .bind(price)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert item")?;

        Ok(row)
    }

    /// Fetch a single item by id
    pub async fn get(&self, id: i64) -> Result<Option<ItemRow>> {
        let row: Option<ItemRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM items WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to fetch item")?;

        Ok(row)
    }

    /// List items with optional name-prefix filter, sort order, and paging
    ///
    /// `total_count` reflects the filter but not the paging window.
    pub async fn list(
        &self,
        prefix: Option<&str>,
        sort: SortOrder,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<ListResult> {
        let pattern = prefix.map(|p| format!("{}%", p));

        let total_count: i64 = match &pattern {
            Some(pattern) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE name LIKE ?")
                    .bind(pattern)
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM items")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .context("Failed to count items")?;

        // LIMIT -1 means "no limit" in SQLite
        let limit = limit.unwrap_or(-1);
        let order_by = sort.to_sql();

        let items: Vec<ItemRow> = match &pattern {
            Some(pattern) => {
                sqlx::query_as(&format!(
                    "SELECT {SELECT_COLUMNS} FROM items WHERE name LIKE ? \
                     ORDER BY {order_by} LIMIT ? OFFSET ?"
                ))
                .bind(pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    "SELECT {SELECT_COLUMNS} FROM items ORDER BY {order_by} LIMIT ? OFFSET ?"
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .context("Failed to list items")?;

        Ok(ListResult { items, total_count })
    }

    /// Replace an item's name and price, refreshing `updated_at`
    ///
    /// Returns `None` when no row has the given id.
    pub async fn update(&self, id: i64, name: &str, price: f64) -> Result<Option<ItemRow>> {
        let now = Utc::now().to_rfc3339();

        let row: Option<ItemRow> = sqlx::query_as(&format!(
            "UPDATE items SET name = ?, price = ?, updated_at = ? \
             WHERE id = ? RETURNING {SELECT_COLUMNS}"
        ))
        .bind(name)
        .bind(price)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update item")?;

        Ok(row)
    }

    /// Delete an item, returning the removed row
    ///
    /// Returns `None` when no row has the given id.
    pub async fn delete(&self, id: i64) -> Result<Option<ItemRow>> {
        let row: Option<ItemRow> = sqlx::query_as(&format!(
            "DELETE FROM items WHERE id = ? RETURNING {SELECT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to delete item")?;

        Ok(row)
    }

    /// Lightweight connectivity probe used by the health endpoint
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Health check query failed")?;

        Ok(())
    }
}

#[cfg(test)]
impl ItemStore {
    /// Tear down the pool so connectivity failures can be simulated
    pub(crate) async fn close(&self) {
        self.pool.close().await;
    }
}
