use crate::cli::args::ShowArgs;
use crate::exit_codes::SUCCESS;
use crate::render;
use seedbed_core::Store;

pub fn run(args: ShowArgs) -> anyhow::Result<i32> {
    let store = Store::open(&args.data_dir)?;

    println!("\nStore contents:");
    render::print_users(&store.fetch_users()?);
    render::print_products(&store.fetch_products()?);
    render::print_orders(&store.fetch_orders()?);

    Ok(SUCCESS)
}
