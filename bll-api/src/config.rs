//! Resting place for BLL's [Config] & friends


use std::time::Duration;

/// Configuration to dictate the tunable behaviors of the Business Logic Layer
#[derive(Debug)]
pub struct Config {

    /// Log::warn! of any events that had to be dropped during the games building
    /// -- such as `Kill`s happening before the first `InitGame`.\
    /// With this setting, you have the option to visualize any issues.
    pub log_issues: bool,

    /// For how long parsed games remain valid in the cache -- `None` keeps them until explicitly invalidated
    pub cache_ttl: Option<Duration>,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_issues: false,
            cache_ttl: None,
        }
    }
}
