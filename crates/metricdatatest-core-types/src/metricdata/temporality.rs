use serde::{Deserialize, Serialize};

/// Window an aggregation was calculated over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Temporality {
    #[default]
    Undefined,
    /// Measurements accumulate from a fixed start time
    Cumulative,
    /// Measurements reset every collection cycle
    Delta,
}

impl std::fmt::Display for Temporality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Temporality::Undefined => "UndefinedTemporality",
            Temporality::Cumulative => "CumulativeTemporality",
            Temporality::Delta => "DeltaTemporality",
        };
        f.write_str(name)
    }
}
