use anyhow::Context;

use storehub_demo::{DemoConfig, run_combinators, run_inventory};
use storehub_inventory::{Hub, Item};

fn summaries(items: &[Item]) -> String {
    let inner = items.iter().map(Item::summary).collect::<Vec<_>>().join(", ");
    format!("[{inner}]")
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("failed to read demo configuration")?;
    storehub_observability::init(config.log_format);

    let mut hub = Hub::with_date(config.reference_date_or_now());
    tracing::info!(hub = %hub, "starting inventory scenario");

    let report = run_inventory(&mut hub, config.top_n).context("inventory scenario failed")?;
    println!("Starting with B: {}", summaries(&report.starting_with_b));
    println!("Outdated: {}", summaries(&report.outdated));
    println!("MostValuable: {}", summaries(&report.most_valuable));
    println!("Others: {}", summaries(&report.others));
    println!("{}", hub.preview());

    let combinators = run_combinators(config.repeat_times, config.sample_size, &mut rand::rng());
    let fib_argument = storehub_demo::exercises::FIB_ARGUMENT;
    match combinators.fib {
        Some(fib) => println!("fib({fib_argument}) = {fib}"),
        None => println!("fib({fib_argument}) overflows u128"),
    }
    for line in &combinators.clipped {
        println!("{line}");
    }
    for greeting in combinators.greetings.iter().flatten() {
        println!("{greeting}");
    }
    println!("{:?}", combinators.random_sums);

    Ok(())
}
