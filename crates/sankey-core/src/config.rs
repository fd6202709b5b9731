//! Flow preparation configuration

use serde::{Deserialize, Serialize};

/// Placeholder source label for categories that carry a bare amount
///
/// A section such as `"Net Income": 14000000` has no sub-items to flow
/// from, so its edge starts at this node.
pub const TOTAL_REVENUE_LABEL: &str = "Total Revenue";

/// Company name used when the document has none
pub const DEFAULT_COMPANY: &str = "Company";

/// Year used when the document has none
pub const DEFAULT_YEAR: &str = "Year";

/// Environment variable overriding [`FlowConfig::root_label`]
pub const ENV_ROOT_LABEL: &str = "SANKEY_ROOT_LABEL";

/// Environment variable overriding [`FlowConfig::default_company`]
pub const ENV_DEFAULT_COMPANY: &str = "SANKEY_DEFAULT_COMPANY";

/// Environment variable overriding [`FlowConfig::default_year`]
pub const ENV_DEFAULT_YEAR: &str = "SANKEY_DEFAULT_YEAR";

/// Flow preparation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Source label for bare-amount sections
    pub root_label: String,
    /// Company name when the document omits it
    pub default_company: String,
    /// Year when the document omits it
    pub default_year: String,
}

impl FlowConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with overrides from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default configuration with overrides from an arbitrary key lookup
    ///
    /// Empty values are ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(label) = get(ENV_ROOT_LABEL) {
            config.root_label = label;
        }
        if let Some(company) = get(ENV_DEFAULT_COMPANY) {
            config.default_company = company;
        }
        if let Some(year) = get(ENV_DEFAULT_YEAR) {
            config.default_year = year;
        }
        config
    }

    /// With root label
    #[inline]
    #[must_use]
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    /// With default company
    #[inline]
    #[must_use]
    pub fn with_default_company(mut self, company: impl Into<String>) -> Self {
        self.default_company = company.into();
        self
    }

    /// With default year
    #[inline]
    #[must_use]
    pub fn with_default_year(mut self, year: impl Into<String>) -> Self {
        self.default_year = year.into();
        self
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            root_label: TOTAL_REVENUE_LABEL.to_string(),
            default_company: DEFAULT_COMPANY.to_string(),
            default_year: DEFAULT_YEAR.to_string(),
        }
    }
}
