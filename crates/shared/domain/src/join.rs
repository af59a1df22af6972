use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How a passenger moves between flights.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum JoinMode {
    /// Leave the previous flight, then board the next one. A failed boarding is not rolled
    /// back.
    #[default]
    Sequential,
    /// Check every precondition first; on failure neither flight nor the passenger changes.
    Atomic,
}
