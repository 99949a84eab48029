use chrono::{DateTime, Utc};
use serde::Serialize;

use storehub_core::{AggregateRoot, DomainError, DomainResult, Entity, HubId, ItemId, parse_timestamp};

use crate::item::Item;

/// How many item summaries `Hub::preview` lists.
const PREVIEW_LEN: usize = 3;

/// What to remove from a hub: a specific item value, or whatever item carries an id.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveTarget {
    ByValue(Item),
    ById(ItemId),
}

impl From<Item> for RemoveTarget {
    fn from(value: Item) -> Self {
        RemoveTarget::ByValue(value)
    }
}

impl From<ItemId> for RemoveTarget {
    fn from(value: ItemId) -> Self {
        RemoveTarget::ById(value)
    }
}

/// Aggregate root: an ordered collection of items plus the session date.
///
/// Insertion order is kept and is what indexed access and every query result
/// follow. Nothing is deduplicated. `version` counts mutations of the
/// sequence and of the date.
#[derive(Debug, Clone, PartialEq)]
pub struct Hub {
    id: HubId,
    items: Vec<Item>,
    date: DateTime<Utc>,
    version: u64,
}

/// Serializable view of a hub, for structured logs.
#[derive(Debug, Serialize)]
pub struct HubSnapshot<'a> {
    pub id: HubId,
    pub date: DateTime<Utc>,
    pub version: u64,
    pub total_cost: f64,
    pub items: &'a [Item],
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

impl Hub {
    /// Empty hub dated now.
    pub fn new() -> Self {
        Self::with_date(Utc::now())
    }

    pub fn with_date(date: DateTime<Utc>) -> Self {
        Self {
            id: HubId::new(),
            items: Vec::new(),
            date,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> HubId {
        self.id
    }

    pub fn add_item(&mut self, item: Item) {
        tracing::debug!(hub_id = %self.id, item_id = %item.id(), name = item.name(), "item added");
        self.items.push(item);
        self.bump();
    }

    pub fn get_item(&self, index: usize) -> DomainResult<&Item> {
        self.items
            .get(index)
            .ok_or_else(|| DomainError::out_of_range(index, self.items.len()))
    }

    /// Mutable access for in-place edits through `Item`'s own setters.
    pub fn get_item_mut(&mut self, index: usize) -> DomainResult<&mut Item> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| DomainError::out_of_range(index, len))
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// First item with the given id, with its position.
    pub fn find_by_id(&self, id: &ItemId) -> Option<(usize, &Item)> {
        self.items.iter().enumerate().find(|(_, item)| item.id() == id)
    }

    /// Items carrying every tag in `tags`, in hub order. An empty query
    /// returns every item.
    pub fn find_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.has_all_tags(tags))
            .cloned()
            .collect()
    }

    pub fn any_has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        self.items.iter().any(|item| item.has_all_tags(tags))
    }

    /// Remove the first entry equal to `item`. Returns whether one was removed.
    pub fn remove_by_value(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    /// Remove the first entry whose id matches. Returns whether one was removed.
    pub fn remove_by_id(&mut self, id: &ItemId) -> bool {
        match self.items.iter().position(|candidate| candidate.id() == id) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    pub fn remove(&mut self, target: impl Into<RemoveTarget>) -> bool {
        match target.into() {
            RemoveTarget::ByValue(item) => self.remove_by_value(&item),
            RemoveTarget::ById(id) => self.remove_by_id(&id),
        }
    }

    /// Remove each item by value, in order. Missing items are skipped.
    /// Returns how many were removed.
    pub fn drop_items<'a, I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut removed = 0;
        for item in items {
            if self.remove_by_value(item) {
                removed += 1;
            }
        }
        removed
    }

    /// Empty the sequence. The date is left alone.
    pub fn clear(&mut self) {
        tracing::debug!(hub_id = %self.id, removed = self.items.len(), "hub cleared");
        self.items.clear();
        self.bump();
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = date;
        self.bump();
    }

    /// Parse an RFC 3339 timestamp and store it. On error the date is unchanged.
    pub fn set_date_str(&mut self, raw: &str) -> DomainResult<()> {
        let date = parse_timestamp(raw)?;
        self.set_date(date);
        Ok(())
    }

    /// Items shipping on or before `date` (overdue relative to it).
    pub fn find_before_or_on(&self, date: DateTime<Utc>) -> Vec<Item> {
        self.filter_cloned(|item| item.ship_date() <= date)
    }

    /// Items with `start <= ship_date <= end`. Empty when `start > end`.
    pub fn find_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Item> {
        self.filter_cloned(|item| {
            let ship_date = item.ship_date();
            start <= ship_date && ship_date <= end
        })
    }

    /// Up to `amount` items, most expensive first. Equal costs keep hub order.
    pub fn find_most_valuable(&self, amount: usize) -> Vec<Item> {
        let mut ranked = self.items.clone();
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.cmp_cost(a));
        ranked.truncate(amount);
        ranked
    }

    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(Item::cost).sum()
    }

    /// Header plus the first few item summaries.
    pub fn preview(&self) -> String {
        let shown = self
            .items
            .iter()
            .take(PREVIEW_LEN)
            .map(Item::summary)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Hub (date: {}, items: [{shown}])",
            self.date.format("%Y-%m-%d %H:%M:%S")
        )
    }

    pub fn snapshot(&self) -> HubSnapshot<'_> {
        HubSnapshot {
            id: self.id,
            date: self.date,
            version: self.version,
            total_cost: self.total_cost(),
            items: &self.items,
        }
    }

    fn filter_cloned(&self, keep: impl Fn(&Item) -> bool) -> Vec<Item> {
        self.items.iter().filter(|item| keep(item)).cloned().collect()
    }

    fn remove_at(&mut self, index: usize) -> bool {
        let removed = self.items.remove(index);
        tracing::debug!(hub_id = %self.id, item_id = %removed.id(), name = removed.name(), "item removed");
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

impl AggregateRoot for Hub {
    type Id = HubId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl core::fmt::Display for Hub {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Hub (date: {}, items count: {})",
            self.date.format("%Y-%m-%d %H:%M:%S"),
            self.items.len()
        )
    }
}
