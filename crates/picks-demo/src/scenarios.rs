//! Registry of the demo scenarios a presenter can switch between.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a demo scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioId {
    /// Mid-season account with picks, results and a populated leaderboard.
    #[default]
    Showcase,
    /// Brand new player: no picks, alone on the leaderboard.
    Fresh,
    /// Qualifying has started for the current race, so its pick is frozen.
    Locked,
    /// Commissioner account with results entry.
    Admin,
}

/// The scenario used when nothing (or something unrecognised) is stored.
pub const DEFAULT_SCENARIO: ScenarioId = ScenarioId::Showcase;

/// Display metadata for the scenario switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioDescriptor {
    pub id: ScenarioId,
    pub label: &'static str,
    pub description: &'static str,
}

/// All scenarios in switcher order.
pub const SCENARIOS: [ScenarioDescriptor; 4] = [
    ScenarioDescriptor {
        id: ScenarioId::Showcase,
        label: "Showcase",
        description: "Mid-season with picks, race results and a busy leaderboard",
    },
    ScenarioDescriptor {
        id: ScenarioId::Fresh,
        label: "Fresh Start",
        description: "A new player who has not made any picks yet",
    },
    ScenarioDescriptor {
        id: ScenarioId::Locked,
        label: "Picks Locked",
        description: "Qualifying is under way and the current pick can no longer change",
    },
    ScenarioDescriptor {
        id: ScenarioId::Admin,
        label: "Admin",
        description: "League commissioner with access to results entry",
    },
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown scenario: {0}")]
pub struct UnknownScenario(pub String);

impl ScenarioId {
    pub const ALL: [ScenarioId; 4] = [
        ScenarioId::Showcase,
        ScenarioId::Fresh,
        ScenarioId::Locked,
        ScenarioId::Admin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioId::Showcase => "showcase",
            ScenarioId::Fresh => "fresh",
            ScenarioId::Locked => "locked",
            ScenarioId::Admin => "admin",
        }
    }

    pub fn descriptor(self) -> &'static ScenarioDescriptor {
        // SCENARIOS is declared in the same order as ALL
        &SCENARIOS[self as usize]
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioId {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| UnknownScenario(s.to_string()))
    }
}
