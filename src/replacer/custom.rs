//! Configurable custom replacement rules.

use std::collections::{HashMap, VecDeque};

use crate::common::PageId;
use crate::replacer::{first_min_position, victim_or_first, Access, CustomRule};

/// Replacement driven by one of the [`CustomRule`]s.
///
/// Keeps per-page reference counts and a trailing window of the last `W`
/// references (the current one included). The window is updated before the
/// hit/fault decision, so the incoming page is already in it when a victim
/// is chosen.
#[derive(Debug, Clone)]
pub struct CustomReplacer {
    capacity: usize,
    rule: CustomRule,
    window_size: usize,

    /// Residents in admission order.
    residents: Vec<PageId>,

    /// Reference count of each resident.
    counts: HashMap<PageId, u64>,

    /// The last `window_size` references, oldest first.
    window: VecDeque<PageId>,
}

impl CustomReplacer {
    /// Create a new custom replacer with `capacity` frames.
    pub fn new(capacity: usize, rule: CustomRule) -> Self {
        let window_size = rule.window_size();
        Self {
            capacity,
            rule,
            window_size,
            residents: Vec::with_capacity(capacity),
            counts: HashMap::with_capacity(capacity),
            window: VecDeque::with_capacity(window_size + 1),
        }
    }

    /// Record a reference to `page`.
    pub fn admit(&mut self, page: PageId) -> Access {
        self.window.push_back(page);
        if self.window.len() > self.window_size {
            self.window.pop_front();
        }

        if let Some(count) = self.counts.get_mut(&page) {
            *count += 1;
            return Access::Hit;
        }

        let evicted = if self.len() >= self.capacity {
            let Some(victim) = self.evict(page) else {
                return Access::Fault { evicted: None };
            };
            Some(victim)
        } else {
            None
        };

        self.residents.push(page);
        *self.counts.entry(page).or_insert(0) += 1;

        Access::Fault { evicted }
    }

    fn evict(&mut self, incoming: PageId) -> Option<PageId> {
        let found = match self.rule {
            CustomRule::FewestInWindow { .. } => {
                let mut in_window: HashMap<PageId, usize> = HashMap::new();
                for &page in &self.window {
                    *in_window.entry(page).or_insert(0) += 1;
                }
                first_min_position(&self.residents, |page| {
                    in_window.get(&page).copied().unwrap_or(0)
                })
            }
            CustomRule::EvenPriority => self
                .residents
                .iter()
                .position(PageId::is_odd)
                .or_else(|| (!self.residents.is_empty()).then_some(0)),
        };

        let index = victim_or_first(found, self.rule.name());
        if index >= self.residents.len() {
            return None;
        }
        let victim = self.residents.remove(index);
        self.counts.remove(&victim);
        tracing::trace!(
            policy = self.rule.name(),
            victim = victim.0,
            incoming = incoming.0,
            "evict"
        );
        Some(victim)
    }

    /// Occurrences of `page` in the trailing window.
    pub fn window_count(&self, page: PageId) -> usize {
        self.window.iter().filter(|&&p| p == page).count()
    }

    /// Reference count of a resident page.
    pub fn frequency(&self, page: PageId) -> Option<u64> {
        self.counts.get(&page).copied()
    }

    /// The active rule.
    pub fn rule(&self) -> CustomRule {
        self.rule
    }

    /// Residents in admission order.
    pub fn residents(&self) -> impl Iterator<Item = PageId> + '_ {
        self.residents.iter().copied()
    }

    /// Whether `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.counts.contains_key(&page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.residents.len()
    }

    /// Whether no page is resident.
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Number of frames.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
