//! Item store backed by a file-based SQLite database.
//!
//! Every operation is its own unit of work. Reads borrow a pooled connection
//! for the duration of one query; writes run inside a transaction that is
//! committed on success and rolled back when dropped on any early return.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{AppError, AppResult};
use crate::models::{CreateItem, Item, UpdateItem};

const ITEM_COLUMNS: &str = "id, name, quantity, image_src";

// ── Pool & schema ─────────────────────────────────────────────────────────────

/// Open a pool on `database_url`, creating the database file if it is missing.
pub async fn connect(database_url: &str, max_connections: u32) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create the `items` table if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id        INTEGER PRIMARY KEY,
            quantity  INTEGER,
            name      VARCHAR,
            image_src VARCHAR
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_items_id ON items (id)")
        .execute(pool)
        .await?;

    Ok(())
}

// ── Items ─────────────────────────────────────────────────────────────────────

pub async fn insert_item(pool: &SqlitePool, payload: &CreateItem) -> AppResult<Item> {
    let mut tx = pool.begin().await?;

    let item = sqlx::query_as::<_, Item>(&format!(
        "INSERT INTO items (name, quantity) VALUES (?, ?) RETURNING {ITEM_COLUMNS}"
    ))
    .bind(&payload.name)
    .bind(payload.quantity)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(item)
}

pub async fn fetch_all_items(pool: &SqlitePool) -> AppResult<Vec<Item>> {
    let items = sqlx::query_as::<_, Item>(&format!(
        "SELECT {ITEM_COLUMNS} FROM items ORDER BY id ASC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(items)
}

pub async fn fetch_item_by_id(pool: &SqlitePool, id: i64) -> AppResult<Item> {
    sqlx::query_as::<_, Item>(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(AppError::item_not_found)
}

/// Overwrite both `name` and `quantity`. Fields missing from `payload` are
/// written as NULL, not merged with the stored row.
pub async fn update_item(pool: &SqlitePool, id: i64, payload: &UpdateItem) -> AppResult<Item> {
    let mut tx = pool.begin().await?;

    let item = sqlx::query_as::<_, Item>(&format!(
        "UPDATE items SET name = ?, quantity = ? WHERE id = ? RETURNING {ITEM_COLUMNS}"
    ))
    .bind(payload.name.as_deref())
    .bind(payload.quantity)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(AppError::item_not_found)?;

    tx.commit().await?;
    Ok(item)
}

pub async fn delete_item(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::item_not_found());
    }

    tx.commit().await?;
    Ok(())
}

pub async fn set_item_image(pool: &SqlitePool, id: i64, filename: &str) -> AppResult<Item> {
    let mut tx = pool.begin().await?;

    let item = sqlx::query_as::<_, Item>(&format!(
        "UPDATE items SET image_src = ? WHERE id = ? RETURNING {ITEM_COLUMNS}"
    ))
    .bind(filename)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(AppError::item_not_found)?;

    tx.commit().await?;
    Ok(item)
}
