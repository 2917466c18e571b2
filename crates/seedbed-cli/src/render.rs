//! Console table rendering. Rows arrive pre-sorted by id.

use comfy_table::{presets, Table};
use seedbed_core::model::{Order, Outcome, Product, User};

fn grid(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_MARKDOWN);
    table.set_header(header.to_vec());
    table
}

pub fn print_outcomes(title: &str, outcomes: &[Outcome]) {
    let mut table = grid(&["ID", "Success", "Message"]);
    for o in outcomes {
        table.add_row(vec![
            o.id.to_string(),
            o.success.to_string(),
            o.message.clone(),
        ]);
    }
    println!("\n{}:\n{}", title, table);
}

pub fn print_users(users: &[User]) {
    let mut table = grid(&["ID", "Name", "Email"]);
    for u in users {
        table.add_row(vec![u.id.to_string(), u.name.clone(), u.email.clone()]);
    }
    println!("\nUsers ({}):\n{}", users.len(), table);
}

pub fn print_products(products: &[Product]) {
    let mut table = grid(&["ID", "Name", "Price"]);
    for p in products {
        table.add_row(vec![
            p.id.to_string(),
            p.name.clone(),
            format!("{:.2}", p.price),
        ]);
    }
    println!("\nProducts ({}):\n{}", products.len(), table);
}

pub fn print_orders(orders: &[Order]) {
    let mut table = grid(&["ID", "User ID", "Product ID", "Quantity"]);
    for o in orders {
        table.add_row(vec![
            o.id.to_string(),
            o.user_id.to_string(),
            o.product_id.to_string(),
            o.quantity.to_string(),
        ]);
    }
    println!("\nOrders ({}):\n{}", orders.len(), table);
}
