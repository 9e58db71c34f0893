//! Player strategy labels and the selectors they map to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::policy::{Aggressive, Greedy, Responsible, TokenSelector};
use crate::core::ConfigError;

/// A player's token-selection strategy, as chosen in the game setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strategy {
    /// Completes one token at a time ([`Greedy`]).
    #[default]
    Predictable,
    /// Captures whenever it can ([`Aggressive`]).
    Aggressive,
    /// Finishes and stays safe when it can ([`Responsible`]).
    Responsible,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 3] = [
        Strategy::Predictable,
        Strategy::Aggressive,
        Strategy::Responsible,
    ];

    /// The label used by setup forms and config files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::Predictable => "PREDICTABLE",
            Strategy::Aggressive => "AGGRESSIVE",
            Strategy::Responsible => "RESPONSIBLE",
        }
    }

    /// One-line description for menus.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Strategy::Predictable => "Focuses on completing one token at a time",
            Strategy::Aggressive => "Prioritizes captures, otherwise runs the leading token",
            Strategy::Responsible => "Finishes or lands on safe squares when possible",
        }
    }

    /// Build the selector implementing this strategy.
    #[must_use]
    pub fn selector(self) -> Box<dyn TokenSelector> {
        match self {
            Strategy::Predictable => Box::new(Greedy),
            Strategy::Aggressive => Box::new(Aggressive),
            Strategy::Responsible => Box::new(Responsible),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    /// Case-insensitive; "greedy" is accepted as an alias of PREDICTABLE.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("greedy") {
            return Ok(Strategy::Predictable);
        }
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("PREDICTABLE".parse::<Strategy>(), Ok(Strategy::Predictable));
        assert_eq!("aggressive".parse::<Strategy>(), Ok(Strategy::Aggressive));
        assert_eq!(" Responsible ".parse::<Strategy>(), Ok(Strategy::Responsible));
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::Predictable));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(
            "reckless".parse::<Strategy>(),
            Err(ConfigError::UnknownStrategy("reckless".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Strategy::Responsible).unwrap();
        assert_eq!(json, "\"RESPONSIBLE\"");
    }

    #[test]
    fn test_default_is_predictable() {
        assert_eq!(Strategy::default(), Strategy::Predictable);
        assert!(format!("{:?}", Strategy::default().selector()).contains("Greedy"));
    }
}
