//! The inventory walk-through: stock a hub, then empty it in stages.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use storehub_core::DomainResult;
use storehub_inventory::{Hub, Item};

/// Empty tag query: matches every item.
const ALL_TAGS: &[&str] = &[];

/// Items are stocked this long after the hub is dated, so toys shipping
/// "now" are still pending against the hub's own date.
const STOCKING_DELAY_SECS: i64 = 1;

/// What each stage took out of the hub.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub starting_with_b: Vec<Item>,
    pub outdated: Vec<Item>,
    pub most_valuable: Vec<Item>,
    pub others: Vec<Item>,
}

/// The demo toys, shipping relative to `now`.
pub fn seed_items(now: DateTime<Utc>) -> DomainResult<Vec<Item>> {
    let toys = [
        ("Car", "A toy for racing, blue", 1, 1500.0),
        ("Doll", "A beautiful doll in a red dress", -1, 5000.0),
        ("Train", "A green train on rails", 0, 10000.0),
        ("Board game", "A board game for children from 5 to 8 years old", 2, 1200.0),
        ("House", "A house for Barbies, pink", 5, 30000.0),
        ("Bear", "A brown bear", 0, 1200.0),
        ("Fox", "A red fox", 2, 1000.0),
    ];

    toys.into_iter()
        .map(|(name, description, days, cost)| {
            Item::new(name, description, now + Duration::days(days)).with_cost(cost)
        })
        .collect()
}

/// Stock `hub` just after its own date and run the four stages:
/// names starting with "b", outdated items, the `top_n` most valuable, and
/// whatever is left.
pub fn run_inventory(hub: &mut Hub, top_n: usize) -> DomainResult<ScenarioReport> {
    hub.clear();
    for item in seed_items(hub.date() + Duration::seconds(STOCKING_DELAY_SECS))? {
        hub.add_item(item);
    }
    tracing::info!(items = hub.size(), total_cost = hub.total_cost(), "hub stocked");

    let starting_with_b: Vec<Item> = hub
        .find_by_tags(ALL_TAGS)
        .into_iter()
        .filter(|item| item.name().to_lowercase().starts_with('b'))
        .collect();
    let removed = hub.drop_items(&starting_with_b);
    tracing::info!(removed, "dropped items starting with b");

    let outdated = hub.find_before_or_on(hub.date());
    let removed = hub.drop_items(&outdated);
    tracing::info!(removed, "dropped outdated items");

    let most_valuable = hub.find_most_valuable(top_n);
    let removed = hub.drop_items(&most_valuable);
    tracing::info!(removed, top_n, "dropped most valuable items");

    let others = hub.find_by_tags(ALL_TAGS);
    match serde_json::to_string(&hub.snapshot()) {
        Ok(snapshot) => tracing::debug!(%snapshot, "hub after scenario"),
        Err(e) => tracing::warn!(error = %e, "failed to serialize hub snapshot"),
    }

    Ok(ScenarioReport {
        starting_with_b,
        outdated,
        most_valuable,
        others,
    })
}
