//! Policy selectors.

use std::fmt;
use std::str::FromStr;

use crate::common::config::{validate_capacity, DEFAULT_WINDOW_SIZE};
use crate::common::{Error, Result};
use crate::replacer::{
    AgingReplacer, CustomReplacer, FifoReplacer, FrequencyReplacer, LruReplacer,
    OptimalReplacer, Replacer, SecondChanceReplacer,
};
use crate::trace::Trace;

/// The two configurable custom eviction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomRule {
    /// Rule 1: evict the resident with the fewest occurrences among the last
    /// `window` references.
    FewestInWindow { window: usize },

    /// Rule 2: evict the first odd-numbered resident, or the first resident
    /// if none is odd.
    EvenPriority,
}

impl CustomRule {
    /// Map a rule id (1 or 2) to a rule.
    ///
    /// `window` is only used by rule 1.
    ///
    /// # Errors
    /// - `Error::UnknownCustomRule` for any other id
    /// - `Error::InvalidWindowSize` if rule 1 gets a zero window
    pub fn from_id(id: u8, window: usize) -> Result<Self> {
        let rule = match id {
            1 => CustomRule::FewestInWindow { window },
            2 => CustomRule::EvenPriority,
            other => return Err(Error::UnknownCustomRule(other)),
        };
        rule.validate()?;
        Ok(rule)
    }

    /// The rule id (1 or 2).
    pub fn id(&self) -> u8 {
        match self {
            CustomRule::FewestInWindow { .. } => 1,
            CustomRule::EvenPriority => 2,
        }
    }

    /// Length of the trailing reference window.
    ///
    /// Rule 2 never reads the window; it keeps the default length.
    pub fn window_size(&self) -> usize {
        match self {
            CustomRule::FewestInWindow { window } => *window,
            CustomRule::EvenPriority => DEFAULT_WINDOW_SIZE,
        }
    }

    /// Reject a zero window for rule 1.
    pub fn validate(&self) -> Result<()> {
        match self {
            CustomRule::FewestInWindow { window: 0 } => Err(Error::InvalidWindowSize(0)),
            _ => Ok(()),
        }
    }

    /// Report name of the rule.
    pub fn name(&self) -> &'static str {
        match self {
            CustomRule::FewestInWindow { .. } => "Custom (Fewest in Window)",
            CustomRule::EvenPriority => "Custom (Even Priority)",
        }
    }
}

/// Selects a replacement policy.
///
/// # Example
/// ```
/// use pagesim::{PolicyKind, Trace};
///
/// let trace = Trace::from_pages([1, 2, 3]).unwrap();
/// let kind: PolicyKind = "second-chance".parse().unwrap();
/// assert_eq!(kind.name(), "Second Chance");
///
/// let replacer = kind.build(2, &trace).unwrap();
/// assert_eq!(replacer.capacity(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
    SecondChance,
    Lfu,
    Mfu,
    Aging,
    Custom(CustomRule),
}

impl PolicyKind {
    /// Every policy configuration the full report runs, custom rule 1 using
    /// `window`.
    pub fn all(window: usize) -> [PolicyKind; 9] {
        [
            PolicyKind::Fifo,
            PolicyKind::Lru,
            PolicyKind::Optimal,
            PolicyKind::SecondChance,
            PolicyKind::Lfu,
            PolicyKind::Mfu,
            PolicyKind::Aging,
            PolicyKind::Custom(CustomRule::FewestInWindow { window }),
            PolicyKind::Custom(CustomRule::EvenPriority),
        ]
    }

    /// Map a menu code (1 to 8) to a policy.
    ///
    /// Code 8 selects a custom rule via `rule_id` and `window`.
    ///
    /// # Errors
    /// - `Error::UnknownPolicy` for codes outside 1..=8
    /// - any error from [`CustomRule::from_id`] for code 8
    pub fn from_code(code: u8, rule_id: u8, window: usize) -> Result<Self> {
        let kind = match code {
            1 => PolicyKind::Fifo,
            2 => PolicyKind::Lru,
            3 => PolicyKind::Optimal,
            4 => PolicyKind::SecondChance,
            5 => PolicyKind::Lfu,
            6 => PolicyKind::Mfu,
            7 => PolicyKind::Aging,
            8 => PolicyKind::Custom(CustomRule::from_id(rule_id, window)?),
            other => return Err(Error::UnknownPolicy(other.to_string())),
        };
        Ok(kind)
    }

    /// Report name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
            PolicyKind::SecondChance => "Second Chance",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Mfu => "MFU",
            PolicyKind::Aging => "Aging",
            PolicyKind::Custom(rule) => rule.name(),
        }
    }

    /// Whether the policy needs the full trace up front.
    pub fn requires_full_trace(&self) -> bool {
        matches!(self, PolicyKind::Optimal)
    }

    /// Reject invalid policy parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            PolicyKind::Custom(rule) => rule.validate(),
            _ => Ok(()),
        }
    }

    /// Build a fresh policy instance.
    ///
    /// `trace` is only read by policies that require the full trace.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    /// - `Error::InvalidWindowSize` for a custom rule 1 with a zero window
    pub fn build(&self, capacity: usize, trace: &Trace) -> Result<Replacer> {
        validate_capacity(capacity)?;
        self.validate()?;

        let replacer = match *self {
            PolicyKind::Fifo => Replacer::Fifo(FifoReplacer::new(capacity)),
            PolicyKind::Lru => Replacer::Lru(LruReplacer::new(capacity)),
            PolicyKind::Optimal => Replacer::Optimal(OptimalReplacer::new(capacity, trace)),
            PolicyKind::SecondChance => {
                Replacer::SecondChance(SecondChanceReplacer::new(capacity))
            }
            PolicyKind::Lfu => Replacer::Frequency(FrequencyReplacer::lfu(capacity)),
            PolicyKind::Mfu => Replacer::Frequency(FrequencyReplacer::mfu(capacity)),
            PolicyKind::Aging => Replacer::Aging(AgingReplacer::new(capacity)),
            PolicyKind::Custom(rule) => Replacer::Custom(CustomReplacer::new(capacity, rule)),
        };
        Ok(replacer)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Parse a policy name, ignoring case, spaces, dashes and underscores.
    ///
    /// Custom rule 1 parses with the default window.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_' | '(' | ')'))
            .flat_map(char::to_lowercase)
            .collect();

        let kind = match normalized.as_str() {
            "fifo" => PolicyKind::Fifo,
            "lru" => PolicyKind::Lru,
            "optimal" | "opt" => PolicyKind::Optimal,
            "secondchance" | "clock" => PolicyKind::SecondChance,
            "lfu" => PolicyKind::Lfu,
            "mfu" => PolicyKind::Mfu,
            "aging" => PolicyKind::Aging,
            "customfewestinwindow" | "custom1" => {
                PolicyKind::Custom(CustomRule::FewestInWindow {
                    window: DEFAULT_WINDOW_SIZE,
                })
            }
            "customevenpriority" | "custom2" => PolicyKind::Custom(CustomRule::EvenPriority),
            _ => return Err(Error::UnknownPolicy(s.to_string())),
        };
        Ok(kind)
    }
}
