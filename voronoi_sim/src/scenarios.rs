//! Experiment catalogue.

/// Experiment identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentId {
    /// Eliminate the global-minimum interval each round
    GlobalElimination,

    /// Eliminate the minimum interval among a random sample each round
    SampledElimination,

    /// Grow a small configuration by inserting next-losers
    BackwardGrowth,
}

impl ExperimentId {
    /// Returns a list of all experiments.
    pub fn all() -> Vec<ExperimentId> {
        vec![
            ExperimentId::GlobalElimination,
            ExperimentId::SampledElimination,
            ExperimentId::BackwardGrowth,
        ]
    }

    /// Returns the experiment name.
    pub fn name(&self) -> &'static str {
        match self {
            ExperimentId::GlobalElimination => "global",
            ExperimentId::SampledElimination => "sampled",
            ExperimentId::BackwardGrowth => "backward",
        }
    }

    /// Returns a description of the experiment.
    pub fn description(&self) -> &'static str {
        match self {
            ExperimentId::GlobalElimination => "Remove the smallest Voronoi interval until the survivor count is reached",
            ExperimentId::SampledElimination => "Remove the smallest interval among k random points each round",
            ExperimentId::BackwardGrowth => "Grow survivors back up by rejection-sampling the next loser",
        }
    }

    /// Returns true if trials of this experiment can exhaust a rejection budget.
    pub fn is_rejection_sampled(&self) -> bool {
        matches!(self, ExperimentId::BackwardGrowth)
    }
}

impl std::fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ExperimentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" | "global_elimination" | "min" => Ok(ExperimentId::GlobalElimination),
            "sampled" | "sampled_elimination" | "sample" => Ok(ExperimentId::SampledElimination),
            "backward" | "backward_growth" | "grow" => Ok(ExperimentId::BackwardGrowth),
            "all" => Err("Use --experiment all to run every experiment".to_string()),
            _ => Err(format!("Unknown experiment: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for id in ExperimentId::all() {
            assert_eq!(id.name().parse::<ExperimentId>().unwrap(), id);
            assert_eq!(id.to_string(), id.name());
        }
    }

    #[test]
    fn test_aliases_and_unknown() {
        assert_eq!("GROW".parse::<ExperimentId>().unwrap(), ExperimentId::BackwardGrowth);
        assert!("all".parse::<ExperimentId>().is_err());
        assert!("sideways".parse::<ExperimentId>().is_err());
    }
}
