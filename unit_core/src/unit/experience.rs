//! ExperienceLedger - Earned and spent experience per class

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tracks total experience and the per-class earn/spend balance
///
/// For every class id, spent never exceeds earned: spending is refused when
/// the unspent balance is too small, and refunds only return what was spent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceLedger {
    total: u32,
    earned: BTreeMap<String, u32>,
    spent: BTreeMap<String, u32>,
}

impl ExperienceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from stored figures without recomputing anything
    pub fn from_parts(
        total: u32,
        earned: BTreeMap<String, u32>,
        spent: BTreeMap<String, u32>,
    ) -> Self {
        ExperienceLedger {
            total,
            earned,
            spent,
        }
    }

    /// Grant experience, optionally crediting a class as well
    pub fn add(&mut self, amount: u32, class_id: Option<&str>) {
        self.total = self.total.saturating_add(amount);
        if let Some(class_id) = class_id {
            let earned = self.earned.entry(class_id.to_string()).or_insert(0);
            *earned = earned.saturating_add(amount);
        }
    }

    /// Spend class experience
    /// Returns false, leaving the ledger untouched, if the balance is too small
    pub fn spend(&mut self, class_id: &str, amount: u32) -> bool {
        if self.unspent_class_experience(class_id) < amount {
            return false;
        }
        *self.spent.entry(class_id.to_string()).or_insert(0) += amount;
        true
    }

    /// Return previously spent class experience
    pub fn refund(&mut self, class_id: &str, amount: u32) {
        if let Some(spent) = self.spent.get_mut(class_id) {
            *spent = spent.saturating_sub(amount);
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn class_experience(&self, class_id: &str) -> u32 {
        self.earned.get(class_id).copied().unwrap_or(0)
    }

    pub fn class_experience_spent(&self, class_id: &str) -> u32 {
        self.spent.get(class_id).copied().unwrap_or(0)
    }

    pub fn unspent_class_experience(&self, class_id: &str) -> u32 {
        self.class_experience(class_id)
            .saturating_sub(self.class_experience_spent(class_id))
    }

    /// Total experience minus everything spent across all classes
    pub fn unspent_experience(&self) -> u32 {
        let spent: u64 = self.spent.values().map(|v| u64::from(*v)).sum();
        u64::from(self.total).saturating_sub(spent) as u32
    }

    /// Earned experience keyed by class id
    pub fn earned(&self) -> &BTreeMap<String, u32> {
        &self.earned
    }

    /// Spent experience keyed by class id
    pub fn spent(&self) -> &BTreeMap<String, u32> {
        &self.spent
    }
}
