//! SQLite-backed list store
//!
//! Owns all persistence for shopping lists and their products. Everything
//! above this layer works on plain `ListDetails`/`Product` values; the
//! schema is an implementation detail of this module.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::PathBuf;

use crate::SortCriteria;

/// One product row of a shopping list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
    pub quantity: i64,
    /// Unit price in cents
    pub price_cents: i64,
    /// Already in the cart
    pub checked: bool,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

/// Per-list metadata, including the persisted sort selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDetails {
    pub id: i64,
    pub name: String,
    pub sort_by: SortCriteria,
    pub sort_ascending: bool,
}

pub struct StoreDb {
    conn: Connection,
}

impl StoreDb {
    pub fn open(data_dir: Option<&str>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => PathBuf::from(dir),
            None => Self::get_data_dir(),
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating data directory {}", dir.display()))?;

        let db_path = dir.join("lists.db");
        let conn = Connection::open(&db_path)
            .with_context(|| format!("opening list database {}", db_path.display()))?;

        let store = StoreDb { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// In-memory store, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let store = StoreDb {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn get_data_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("shoptui")
        } else {
            // Fallback to /tmp if no data dir available
            std::env::temp_dir().join("shoptui-data")
        }
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS lists (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                sort_by TEXT NOT NULL DEFAULT 'name',
                sort_ascending INTEGER NOT NULL DEFAULT 1
            );

            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY,
                list_id INTEGER NOT NULL REFERENCES lists(id),
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL DEFAULT 1,
                price_cents INTEGER NOT NULL DEFAULT 0,
                checked INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_products_list ON products(list_id);
            ",
        )?;

        Ok(())
    }

    /// Fetch a list by name, creating it with default settings on first use
    pub fn open_or_create_list(&self, name: &str) -> Result<ListDetails> {
        self.conn.execute(
            "INSERT OR IGNORE INTO lists (name) VALUES (?1)",
            params![name],
        )?;

        let mut stmt = self.conn.prepare(
            "SELECT id, name, sort_by, sort_ascending FROM lists WHERE name = ?1",
        )?;
        let details = stmt
            .query_row(params![name], Self::row_to_list)
            .with_context(|| format!("loading list '{}'", name))?;

        Ok(details)
    }

    pub fn get_list_details(&self, list_id: i64) -> Result<ListDetails> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, sort_by, sort_ascending FROM lists WHERE id = ?1",
        )?;
        let details = stmt
            .query_row(params![list_id], Self::row_to_list)
            .with_context(|| format!("loading list {}", list_id))?;

        Ok(details)
    }

    /// All products of a list, in insertion order
    pub fn get_products(&self, list_id: i64) -> Result<Vec<Product>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, list_id, name, quantity, price_cents, checked, created_at
             FROM products WHERE list_id = ?1 ORDER BY id",
        )?;

        let products = stmt
            .query_map(params![list_id], Self::row_to_product)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(products)
    }

    pub fn add_product(
        &self,
        list_id: i64,
        name: &str,
        quantity: i64,
        price_cents: i64,
    ) -> Result<Product> {
        let created_at = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO products (list_id, name, quantity, price_cents, checked, created_at)
             VALUES (?1, ?2, ?3, ?4, 0, ?5)",
            params![list_id, name, quantity, price_cents, created_at],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(Product {
            id,
            list_id,
            name: name.to_string(),
            quantity,
            price_cents,
            checked: false,
            created_at,
        })
    }

    pub fn set_checked(&self, product_id: i64, checked: bool) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE products SET checked = ?1 WHERE id = ?2",
            params![checked, product_id],
        )?;
        anyhow::ensure!(updated == 1, "product {} not found", product_id);

        Ok(())
    }

    /// Persist the sort selection for a list
    pub fn set_sort(&self, list_id: i64, sort_by: SortCriteria, sort_ascending: bool) -> Result<()> {
        self.conn.execute(
            "UPDATE lists SET sort_by = ?1, sort_ascending = ?2 WHERE id = ?3",
            params![sort_by.as_key(), sort_ascending, list_id],
        )?;

        Ok(())
    }

    /// Remove every checked product of a list; returns how many were removed
    pub fn delete_checked(&self, list_id: i64) -> Result<usize> {
        let removed = self.conn.execute(
            "DELETE FROM products WHERE list_id = ?1 AND checked = 1",
            params![list_id],
        )?;

        Ok(removed)
    }

    fn row_to_list(row: &rusqlite::Row) -> rusqlite::Result<ListDetails> {
        let sort_key: String = row.get(2)?;
        Ok(ListDetails {
            id: row.get(0)?,
            name: row.get(1)?,
            sort_by: SortCriteria::from_key(&sort_key),
            sort_ascending: row.get(3)?,
        })
    }

    fn row_to_product(row: &rusqlite::Row) -> rusqlite::Result<Product> {
        Ok(Product {
            id: row.get(0)?,
            list_id: row.get(1)?,
            name: row.get(2)?,
            quantity: row.get(3)?,
            price_cents: row.get(4)?,
            checked: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}
