use bevy::prelude::*;
use serde::Deserialize;

use crate::engine::stadium::DetailTier;

/// One step of the label sampling schedule: layouts of up to
/// `max_stadiums` units label every `interval`-th stadium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LabelDensityStep {
    pub max_stadiums: usize,
    pub interval: usize,
}

/// Tunable detail-tier and labelling policy. The defaults are the values
/// the scene was balanced with; `config/population_policy.json` overrides
/// them when present.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct PopulationPolicy {
    /// Units built at full detail, counted from the front of the grid.
    pub high_detail_budget: usize,
    /// Units built at medium detail, after the high-detail block.
    pub medium_detail_budget: usize,
    /// Units constructed per scheduling step.
    pub batch_size: usize,
    /// Must be ordered by ascending `max_stadiums`.
    pub label_density_steps: Vec<LabelDensityStep>,
    /// Interval for layouts larger than every step.
    pub fallback_label_interval: usize,
}

impl Default for PopulationPolicy {
    fn default() -> Self {
        Self {
            high_detail_budget: 50,
            medium_detail_budget: 150,
            batch_size: 20,
            label_density_steps: vec![
                LabelDensityStep { max_stadiums: 100, interval: 1 },
                LabelDensityStep { max_stadiums: 300, interval: 3 },
                LabelDensityStep { max_stadiums: 600, interval: 10 },
            ],
            fallback_label_interval: 20,
        }
    }
}

impl PopulationPolicy {
    /// Detail tier for a stadium index, fixed for the layout's lifetime.
    pub fn tier_for(&self, index: usize) -> DetailTier {
        if index < self.high_detail_budget {
            DetailTier::High
        } else if index < self.high_detail_budget + self.medium_detail_budget {
            DetailTier::Medium
        } else {
            DetailTier::Low
        }
    }

    /// Label sampling interval for a layout of `stadium_count` units.
    pub fn label_interval(&self, stadium_count: usize) -> usize {
        self.label_density_steps
            .iter()
            .find(|step| stadium_count <= step.max_stadiums)
            .map(|step| step.interval)
            .unwrap_or(self.fallback_label_interval)
            .max(1)
    }

    /// Whether the stadium at `index` receives an overlay label. The first
    /// and last stadiums are always labelled.
    pub fn labelled(&self, index: usize, stadium_count: usize) -> bool {
        index % self.label_interval(stadium_count) == 0 || index + 1 == stadium_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_index_budgets() {
        let policy = PopulationPolicy::default();
        assert_eq!(policy.tier_for(0), DetailTier::High);
        assert_eq!(policy.tier_for(49), DetailTier::High);
        assert_eq!(policy.tier_for(50), DetailTier::Medium);
        assert_eq!(policy.tier_for(199), DetailTier::Medium);
        assert_eq!(policy.tier_for(200), DetailTier::Low);
        assert_eq!(policy.tier_for(999), DetailTier::Low);
    }

    #[test]
    fn label_interval_thins_out_with_scale() {
        let policy = PopulationPolicy::default();
        assert_eq!(policy.label_interval(100), 1);
        assert_eq!(policy.label_interval(250), 3);
        assert_eq!(policy.label_interval(600), 10);
        assert_eq!(policy.label_interval(601), 20);
        assert_eq!(policy.label_interval(1_000), 20);
    }

    #[test]
    fn first_and_last_are_always_labelled() {
        let policy = PopulationPolicy::default();
        assert!(policy.labelled(0, 1_000));
        assert!(policy.labelled(999, 1_000));
        assert!(!policy.labelled(7, 1_000));
    }

    #[test]
    fn policy_deserialises_from_the_shipped_override() {
        let raw = include_str!("../../../assets/config/population_policy.json");
        let policy: PopulationPolicy = serde_json::from_str(raw).expect("valid policy JSON");
        assert_eq!(policy, PopulationPolicy::default());
    }
}
