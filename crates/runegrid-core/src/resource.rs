use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A kind of resource carried by packets and held by the bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Resource {
    /// Raw magical energy, produced by mana emitters.
    Mana,
    /// Any other named resource.
    Custom(String),
}

impl Resource {
    /// Parse a resource name. Unrecognized names become [`Resource::Custom`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "mana" => Self::Mana,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Lowercase name, e.g. `mana`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mana => "mana",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Resource {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<Resource> for String {
    fn from(resource: Resource) -> Self {
        resource.as_str().to_string()
    }
}

/// Quantities keyed by resource kind, in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resources(BTreeMap<Resource, i64>);

impl Resources {
    /// An empty set of quantities.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single quantity of mana.
    pub fn mana(amount: i64) -> Self {
        Self::from([(Resource::Mana, amount)])
    }

    /// Quantity of `resource`, zero if absent.
    pub fn get(&self, resource: &Resource) -> i64 {
        self.0.get(resource).copied().unwrap_or(0)
    }

    /// Set the quantity of `resource`.
    pub fn set(&mut self, resource: Resource, amount: i64) {
        self.0.insert(resource, amount);
    }

    /// Add `amount` to `resource`, starting from zero.
    pub fn add(&mut self, resource: Resource, amount: i64) {
        *self.0.entry(resource).or_insert(0) += amount;
    }

    /// Add every quantity of `other` into `self`.
    pub fn merge(&mut self, other: &Resources) {
        for (resource, amount) in other.iter() {
            self.add(resource.clone(), amount);
        }
    }

    /// Add `amount` to every resource already present.
    pub fn increment_all(&mut self, amount: i64) {
        for value in self.0.values_mut() {
            *value += amount;
        }
    }

    /// Iterate over `(resource, quantity)` pairs in resource order.
    pub fn iter(&self) -> impl Iterator<Item = (&Resource, i64)> {
        self.0.iter().map(|(r, a)| (r, *a))
    }

    /// Number of distinct resources.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no resource is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(Resource, i64); N]> for Resources {
    fn from(entries: [(Resource, i64); N]) -> Self {
        Self(BTreeMap::from(entries))
    }
}

impl FromIterator<(Resource, i64)> for Resources {
    fn from_iter<I: IntoIterator<Item = (Resource, i64)>>(iter: I) -> Self {
        let mut resources = Self::new();
        for (resource, amount) in iter {
            resources.add(resource, amount);
        }
        resources
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(r, a)| format!("{r}: {a}")).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
