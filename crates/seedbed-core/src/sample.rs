//! The fixed demo dataset.
//!
//! Deliberately imperfect: user 8 reuses user 1's name and email (accepted,
//! ids differ), product 10 has a negative price (rejected), order 9 has a
//! negative quantity (rejected), and order 10 references product 11 which
//! does not exist (accepted, references are advisory).

use crate::model::{Order, Product, User};

#[derive(Debug, Clone)]
pub struct Dataset {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

pub fn demo_dataset() -> Dataset {
    Dataset {
        users: vec![
            user(1, "Alice", "alice@example.com"),
            user(2, "Bob", "bob@example.com"),
            user(3, "Charlie", "charlie@example.com"),
            user(4, "David", "david@example.com"),
            user(5, "Eve", "eve@example.com"),
            user(6, "Frank", "frank@example.com"),
            user(7, "Grace", "grace@example.com"),
            user(8, "Alice", "alice@example.com"),
            user(9, "Henry", "henry@example.com"),
            user(10, "Jane", "jane@example.com"),
        ],
        products: vec![
            product(1, "Laptop", 1000.00),
            product(2, "Smartphone", 700.00),
            product(3, "Headphones", 150.00),
            product(4, "Monitor", 300.00),
            product(5, "Keyboard", 50.00),
            product(6, "Mouse", 30.00),
            product(7, "Laptop", 1000.00),
            product(8, "Smartwatch", 250.00),
            product(9, "Gaming Chair", 500.00),
            product(10, "Earbuds", -50.00),
        ],
        orders: vec![
            order(1, 1, 1, 2),
            order(2, 2, 2, 1),
            order(3, 3, 3, 5),
            order(4, 4, 4, 1),
            order(5, 5, 5, 3),
            order(6, 6, 6, 4),
            order(7, 7, 7, 2),
            order(8, 8, 8, 0),
            order(9, 9, 1, -1),
            order(10, 10, 11, 2),
        ],
    }
}

fn user(id: i64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
    }
}

fn order(id: i64, user_id: i64, product_id: i64, quantity: i64) -> Order {
    Order {
        id,
        user_id,
        product_id,
        quantity,
    }
}
