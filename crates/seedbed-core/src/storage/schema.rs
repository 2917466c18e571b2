//! Idempotent per-kind DDL. Safe to run repeatedly; no migration logic.
//!
//! `id INTEGER PRIMARY KEY` is the only uniqueness constraint anywhere.
//! In particular `users.email` carries no UNIQUE: two users may share an
//! email as long as their ids differ.

pub const USERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL,
  email TEXT NOT NULL
);
"#;

pub const PRODUCTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS products (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL,
  price REAL NOT NULL
);
"#;

pub const ORDERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
  id INTEGER PRIMARY KEY,
  user_id INTEGER NOT NULL,
  product_id INTEGER NOT NULL,
  quantity INTEGER NOT NULL
);
"#;
