use crate::cli::args::RunArgs;
use crate::exit_codes::SUCCESS;
use crate::render;
use seedbed_core::ingest::Ingestor;
use seedbed_core::sample;
use seedbed_core::Store;

pub async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let store = if args.in_memory {
        Store::memory()?
    } else {
        Store::open(&args.data_dir)?
    };

    let dataset = sample::demo_dataset();
    let ingestor = Ingestor::new(store.clone(), args.parallel);
    let report = ingestor.run(&dataset).await?;

    println!("\nInsert outcomes:");
    render::print_outcomes("Users", &report.users);
    render::print_outcomes("Products", &report.products);
    render::print_outcomes("Orders", &report.orders);

    println!("\nStore contents:");
    render::print_users(&store.fetch_users()?);
    render::print_products(&store.fetch_products()?);
    render::print_orders(&store.fetch_orders()?);

    println!("\n{}", report.summary_line());
    Ok(SUCCESS)
}
