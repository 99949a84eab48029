use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storehub_core::{DomainError, DomainResult, Entity, ItemId, ValueObject};

/// Currency suffix used when rendering costs.
const CURRENCY: &str = "RUB";

/// Non-negative, finite monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "cost must be a number (got {value})"
            )));
        }
        if value < 0.0 {
            return Err(DomainError::validation(format!(
                "cost must be non-negative (got {value})"
            )));
        }
        // Adding +0.0 folds -0.0 into 0.0 so ordering stays total.
        Ok(Self(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Cost {}

impl TryFrom<f64> for Cost {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Cost::new(value)
    }
}

impl From<Cost> for f64 {
    fn from(value: Cost) -> Self {
        value.0
    }
}

impl core::fmt::Display for Cost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Set of opaque string labels. Iteration order is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the tag was not present before.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Returns `true` if the tag was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Superset test; vacuously true for an empty query.
    pub fn contains_all<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|t| self.0.contains(t.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl ValueObject for TagSet {}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl core::fmt::Display for TagSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return f.write_str("No tags");
        }
        let joined = self.iter().collect::<Vec<_>>().join(", ");
        f.write_str(&joined)
    }
}

/// A shippable good tracked by a hub.
///
/// `Clone` keeps the identifier (same item, another owner); `copy()` mints a
/// new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    ship_date: DateTime<Utc>,
    tags: TagSet,
    cost: Cost,
}

impl Item {
    /// New item with no tags and zero cost.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        ship_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: description.into(),
            ship_date,
            tags: TagSet::new(),
            cost: Cost::ZERO,
        }
    }

    /// Full constructor. The initial cost goes through the same validation as
    /// [`Item::set_cost`].
    pub fn try_new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        ship_date: DateTime<Utc>,
        tags: I,
        cost: f64,
    ) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, description, ship_date)
            .with_tags(tags)
            .with_cost(cost)
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_cost(mut self, cost: f64) -> DomainResult<Self> {
        self.set_cost(cost)?;
        Ok(self)
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn ship_date(&self) -> DateTime<Utc> {
        self.ship_date
    }

    pub fn set_ship_date(&mut self, ship_date: DateTime<Utc>) {
        self.ship_date = ship_date;
    }

    pub fn cost(&self) -> f64 {
        self.cost.value()
    }

    /// Replace the cost. On error the previous cost is kept.
    pub fn set_cost(&mut self, value: f64) -> DomainResult<()> {
        match Cost::new(value) {
            Ok(cost) => {
                self.cost = cost;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(item_id = %self.id, value, "rejected cost update");
                Err(e)
            }
        }
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag);
    }

    /// Removing an absent tag is a no-op.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    pub fn has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        self.tags.contains_all(tags)
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Orders by cost only; items with equal cost compare `Equal`.
    pub fn cmp_cost(&self, other: &Item) -> Ordering {
        self.cost.value().total_cmp(&other.cost.value())
    }

    /// Value copy under a fresh identifier.
    pub fn copy(&self) -> Item {
        Item {
            id: ItemId::new(),
            ..self.clone()
        }
    }

    /// Short form: `Item(name=Car, cost=1500)`.
    pub fn summary(&self) -> String {
        format!("Item(name={}, cost={})", self.name, self.cost)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Item:")?;
        writeln!(f, "  ID: {}", self.id)?;
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Shipment Date: {}", self.ship_date.format("%Y-%m-%d"))?;
        writeln!(f, "  Tags: {}", self.tags)?;
        write!(f, "  Cost: {} {CURRENCY}", self.cost)
    }
}
