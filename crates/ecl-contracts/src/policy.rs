//! Tunable registry rules.

use serde::{Deserialize, Serialize};

/// Extensions are accepted only when the current end date falls within
/// this many months of today.
pub const DEFAULT_EXTENSION_WINDOW_MONTHS: u32 = 3;

/// Rules applied by the [`ContractRegistry`](crate::ContractRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryPolicy {
    /// Length of the extension window, in calendar months.
    pub extension_window_months: u32,
}

impl Default for RegistryPolicy {
    fn default() -> Self {
        Self {
            extension_window_months: DEFAULT_EXTENSION_WINDOW_MONTHS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let policy: RegistryPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy.extension_window_months, 3);
    }
}
