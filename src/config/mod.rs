/*!
Configuration of a context and of the analyses.

All configuration is contained within a [Config].
A [context](crate::context) keeps the budgets which apply to each query, while the [analyses](crate::analysis) copy the options relevant to them when built.

```rust
# use otter_anomalies::config::{Config, TimeoutPolicy};
let mut config = Config::default();
assert!(config.decision_limit.set(Some(1_000)).is_ok());
assert!(config.timeout_policy.set(TimeoutPolicy::Halt).is_ok());
assert!(config.solution_history.set(usize::MAX).is_ok());
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod timeout_policy;
pub use timeout_policy::TimeoutPolicy;

use std::time::Duration;

/// The size of the solution history used during atomic set discovery, unless configured otherwise.
pub const DEFAULT_SOLUTION_HISTORY: usize = 1000;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The time limit for a single query.
    pub time_limit: ConfigOption<Option<Duration>>,

    /// The limit on decisions and conflicts during a single query.
    pub decision_limit: ConfigOption<Option<usize>>,

    /// The count of distinct models remembered during atomic set discovery.
    pub solution_history: ConfigOption<usize>,

    /// What atomic set discovery does with a query left undecided.
    pub timeout_policy: ConfigOption<TimeoutPolicy>,

    /// Report atomic sets containing a single atom.
    pub report_singletons: ConfigOption<bool>,
}

impl Default for Config {
    /// By default queries are unbounded, and so never undecided.
    fn default() -> Self {
        Config {
            time_limit: ConfigOption {
                name: "time_limit",
                min: None,
                max: Some(Duration::MAX),
                value: None,
            },

            decision_limit: ConfigOption {
                name: "decision_limit",
                min: None,
                max: Some(usize::MAX),
                value: None,
            },

            solution_history: ConfigOption {
                name: "solution_history",
                min: 0,
                max: usize::MAX,
                value: DEFAULT_SOLUTION_HISTORY,
            },

            timeout_policy: ConfigOption {
                name: "timeout_policy",
                min: TimeoutPolicy::MIN,
                max: TimeoutPolicy::MAX,
                value: TimeoutPolicy::Skip,
            },

            report_singletons: ConfigOption {
                name: "report_singletons",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut config = Config::default();
        assert!(config.decision_limit.set(Some(0)).is_ok());
        assert_eq!(config.decision_limit.value, Some(0));

        assert!(config.timeout_policy.set(TimeoutPolicy::Halt).is_ok());
        assert_eq!(config.timeout_policy.min_max(), (TimeoutPolicy::Skip, TimeoutPolicy::Halt));
    }

    #[test]
    fn out_of_bounds() {
        let mut option = ConfigOption {
            name: "test",
            min: 1_usize,
            max: 4,
            value: 2,
        };
        assert_eq!(option.set(5), Err(crate::types::err::ConfigError::OutOfBounds("test")));
        assert_eq!(option.value, 2);
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("Halt".parse::<TimeoutPolicy>(), Ok(TimeoutPolicy::Halt));
        assert!("Abort".parse::<TimeoutPolicy>().is_err());
    }
}
