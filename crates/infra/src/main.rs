use anyhow::Context;

use orderdesk_infra::{Config, JsonDirSource, OrderDesk};

fn main() -> anyhow::Result<()> {
    orderdesk_observability::init();

    let config = Config::from_env();
    let source = JsonDirSource::new(&config.data_dir);
    let desk = OrderDesk::load(&source, config.actor())
        .with_context(|| format!("loading order data from {}", config.data_dir.display()))?;

    let snapshot = serde_json::json!({
        "actor": desk.actor().current_user(),
        "createdOrders": desk.created_orders(),
        "receivedOrders": desk.received_orders(),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
