use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::resource::{Resource, Resources};

/// The resource ledger fed by sink runes.
///
/// Balances are plain integers. [`Bank::remove`] does not floor at zero; use
/// [`Bank::has`] first, or [`Bank::try_remove`], when balances must stay
/// non-negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bank {
    balances: BTreeMap<Resource, i64>,
}

impl Bank {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposit every quantity in `amounts`.
    pub fn add(&mut self, amounts: &Resources) {
        for (resource, amount) in amounts.iter() {
            *self.balances.entry(resource.clone()).or_insert(0) += amount;
        }
    }

    /// Returns true if every requested quantity is covered. Unknown resources count as zero.
    pub fn has(&self, amounts: &Resources) -> bool {
        amounts
            .iter()
            .all(|(resource, amount)| self.balance(resource) >= amount)
    }

    /// Withdraw every quantity in `amounts`, allowing balances to go negative.
    pub fn remove(&mut self, amounts: &Resources) {
        for (resource, amount) in amounts.iter() {
            *self.balances.entry(resource.clone()).or_insert(0) -= amount;
        }
    }

    /// Withdraw `amounts` only if the bank covers all of them.
    ///
    /// On failure the ledger is left untouched and the first short resource
    /// is reported.
    pub fn try_remove(&mut self, amounts: &Resources) -> CoreResult<()> {
        if let Some((resource, requested)) = amounts
            .iter()
            .find(|(resource, amount)| self.balance(resource) < *amount)
        {
            return Err(CoreError::InsufficientFunds {
                resource: resource.clone(),
                requested,
                available: self.balance(resource),
            });
        }
        self.remove(amounts);
        Ok(())
    }

    /// Current balance of `resource`, zero if never touched.
    pub fn balance(&self, resource: &Resource) -> i64 {
        self.balances.get(resource).copied().unwrap_or(0)
    }

    /// Iterate over `(resource, balance)` pairs in resource order.
    pub fn iter(&self) -> impl Iterator<Item = (&Resource, i64)> {
        self.balances.iter().map(|(r, a)| (r, *a))
    }

    /// Returns true if no resource has ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Forget every balance.
    pub fn clear(&mut self) {
        self.balances.clear();
    }
}
