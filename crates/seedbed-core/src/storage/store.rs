//! SQLite-backed per-kind stores.
//!
//! One handle and one lock per entity kind: inserts within a kind serialize
//! on the kind's mutex, inserts across kinds never contend. All per-record
//! failures are converted to [`Outcome`]s at this boundary; only setup
//! failures (open/DDL) are fatal.

use crate::errors::InsertError;
use crate::model::{EntityKind, Order, Outcome, Product, User, Validate};
use anyhow::Context;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Store {
    users: Arc<Mutex<Connection>>,
    products: Arc<Mutex<Connection>>,
    orders: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open file-backed stores under `dir` (one database file per kind),
    /// creating the directory and schemas as needed.
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create data dir {}", dir.display()))?;
        Ok(Self {
            users: open_kind(&dir.join("users.db"), super::schema::USERS_DDL)?,
            products: open_kind(&dir.join("products.db"), super::schema::PRODUCTS_DDL)?,
            orders: open_kind(&dir.join("orders.db"), super::schema::ORDERS_DDL)?,
        })
    }

    /// Throwaway in-memory stores (for tests and `--in-memory` runs).
    pub fn memory() -> anyhow::Result<Self> {
        Ok(Self {
            users: memory_kind(super::schema::USERS_DDL)?,
            products: memory_kind(super::schema::PRODUCTS_DDL)?,
            orders: memory_kind(super::schema::ORDERS_DDL)?,
        })
    }

    pub fn insert_user(&self, user: &User) -> Outcome {
        self.finish(user.id, self.try_insert_user(user))
    }

    pub fn insert_product(&self, product: &Product) -> Outcome {
        self.finish(product.id, self.try_insert_product(product))
    }

    pub fn insert_order(&self, order: &Order) -> Outcome {
        self.finish(order.id, self.try_insert_order(order))
    }

    fn finish(&self, id: i64, res: Result<(), InsertError>) -> Outcome {
        match res {
            Ok(()) => Outcome::success(id),
            Err(e) => {
                if let InsertError::Storage(ref msg) = e {
                    tracing::warn!(id, error = %msg, "storage fault during insert");
                }
                Outcome::failure(id, e.to_string())
            }
        }
    }

    fn try_insert_user(&self, user: &User) -> Result<(), InsertError> {
        user.validate()?;
        let conn = self.users.lock().unwrap();
        conn.execute(
            "INSERT INTO users (id, name, email) VALUES (?1, ?2, ?3)",
            params![user.id, user.name, user.email],
        )
        .map_err(|e| InsertError::from_sqlite(EntityKind::User, user.id, e))?;
        Ok(())
    }

    fn try_insert_product(&self, product: &Product) -> Result<(), InsertError> {
        product.validate()?;
        let conn = self.products.lock().unwrap();
        conn.execute(
            "INSERT INTO products (id, name, price) VALUES (?1, ?2, ?3)",
            params![product.id, product.name, product.price],
        )
        .map_err(|e| InsertError::from_sqlite(EntityKind::Product, product.id, e))?;
        Ok(())
    }

    fn try_insert_order(&self, order: &Order) -> Result<(), InsertError> {
        order.validate()?;
        let conn = self.orders.lock().unwrap();
        conn.execute(
            "INSERT INTO orders (id, user_id, product_id, quantity) VALUES (?1, ?2, ?3, ?4)",
            params![order.id, order.user_id, order.product_id, order.quantity],
        )
        .map_err(|e| InsertError::from_sqlite(EntityKind::Order, order.id, e))?;
        Ok(())
    }

    /// All stored users, ordered by id for deterministic reporting.
    pub fn fetch_users(&self) -> anyhow::Result<Vec<User>> {
        let conn = self.users.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, name, email FROM users ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn fetch_products(&self) -> anyhow::Result<Vec<Product>> {
        let conn = self.products.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, name, price FROM products ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Product {
                id: row.get(0)?,
                name: row.get(1)?,
                price: row.get(2)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn fetch_orders(&self) -> anyhow::Result<Vec<Order>> {
        let conn = self.orders.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT id, user_id, product_id, quantity FROM orders ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Order {
                id: row.get(0)?,
                user_id: row.get(1)?,
                product_id: row.get(2)?,
                quantity: row.get(3)?,
            })
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Row count for one kind.
    pub fn count(&self, kind: EntityKind) -> anyhow::Result<i64> {
        let conn = match kind {
            EntityKind::User => self.users.lock().unwrap(),
            EntityKind::Product => self.products.lock().unwrap(),
            EntityKind::Order => self.orders.lock().unwrap(),
        };
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let n = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(n)
    }
}

fn open_kind(path: &Path, ddl: &str) -> anyhow::Result<Arc<Mutex<Connection>>> {
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open sqlite db {}", path.display()))?;
    init_connection(&conn, ddl)
        .with_context(|| format!("failed to initialize schema in {}", path.display()))?;
    Ok(Arc::new(Mutex::new(conn)))
}

fn memory_kind(ddl: &str) -> anyhow::Result<Arc<Mutex<Connection>>> {
    let conn = Connection::open_in_memory().context("failed to open in-memory sqlite db")?;
    init_connection(&conn, ddl)?;
    Ok(Arc::new(Mutex::new(conn)))
}

fn init_connection(conn: &Connection, ddl: &str) -> anyhow::Result<()> {
    // WAL mode for file-backed DBs (no-op for in-memory)
    let _ = conn.execute_batch("PRAGMA journal_mode = WAL");
    conn.execute_batch(ddl)?;
    Ok(())
}
