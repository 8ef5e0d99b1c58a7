use bevy::math::Vec3;

use crate::constants::{MAX_GRID_COLUMNS, MIN_GROUND_SIZE, STADIUM_CAPACITY, STADIUM_SPACING};

/// Deterministic grid layout derived from a population count. Every stadium
/// index maps to exactly one grid cell and one world position.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub people: u64,
    pub stadium_count: usize,
    pub columns: usize,
    pub rows: usize,
    pub ground_size: f32,
}

impl LayoutPlan {
    pub fn new(people: u64) -> Self {
        let people = people.max(1);
        let stadium_count = people.div_ceil(STADIUM_CAPACITY) as usize;
        let columns = (stadium_count as f64)
            .sqrt()
            .ceil()
            .max(1.0) as usize;
        let columns = columns.min(MAX_GRID_COLUMNS);
        let rows = stadium_count.div_ceil(columns);
        let ground_size = MIN_GROUND_SIZE
            .max((columns + 2) as f32 * STADIUM_SPACING)
            .max((rows + 2) as f32 * STADIUM_SPACING);

        Self {
            people,
            stadium_count,
            columns,
            rows,
            ground_size,
        }
    }

    pub fn grid_cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// World position of a stadium, with the grid centred on the origin.
    pub fn position(&self, index: usize) -> Vec3 {
        let (row, col) = self.grid_cell(index);
        let half_columns = (self.columns / 2) as isize;
        let half_rows = (self.stadium_count / self.columns / 2) as isize;
        Vec3::new(
            (col as isize - half_columns) as f32 * STADIUM_SPACING,
            0.0,
            (row as isize - half_rows) as f32 * STADIUM_SPACING,
        )
    }

    /// People seated in one stadium; only the last stadium can be partial.
    pub fn occupancy(&self, index: usize) -> u64 {
        let remainder = self.people % STADIUM_CAPACITY;
        if index + 1 == self.stadium_count && remainder != 0 {
            remainder
        } else {
            STADIUM_CAPACITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn stadium_count_rounds_up() {
        assert_eq!(LayoutPlan::new(1).stadium_count, 1);
        assert_eq!(LayoutPlan::new(99_999).stadium_count, 1);
        assert_eq!(LayoutPlan::new(100_001).stadium_count, 2);
        assert_eq!(LayoutPlan::new(250_000).stadium_count, 3);
    }

    #[test]
    fn partial_last_stadium() {
        let plan = LayoutPlan::new(250_000);
        assert_eq!(plan.occupancy(0), 100_000);
        assert_eq!(plan.occupancy(1), 100_000);
        assert_eq!(plan.occupancy(2), 50_000);
    }

    #[test]
    fn exact_multiple_fills_last_stadium() {
        let plan = LayoutPlan::new(100_000);
        assert_eq!(plan.stadium_count, 1);
        assert_eq!(plan.occupancy(0), 100_000);
    }

    #[test]
    fn grid_cells_are_unique_and_gapless() {
        let plan = LayoutPlan::new(8_500_000);
        assert_eq!(plan.stadium_count, 85);
        assert_eq!(plan.columns, 10);
        assert_eq!(plan.rows, 9);

        let mut seen = HashSet::new();
        for index in 0..plan.stadium_count {
            let (row, col) = plan.grid_cell(index);
            assert!(col < plan.columns);
            assert!(row < plan.rows);
            assert!(seen.insert((row, col)));
        }
    }

    #[test]
    fn columns_are_capped() {
        let plan = LayoutPlan::new(100_000_000);
        assert_eq!(plan.stadium_count, 1_000);
        assert_eq!(plan.columns, 20);
        assert_eq!(plan.rows, 50);
    }

    #[test]
    fn layout_is_deterministic() {
        let a = LayoutPlan::new(42_000_000);
        let b = LayoutPlan::new(42_000_000);
        assert_eq!(a, b);
        for index in 0..a.stadium_count {
            assert_eq!(a.position(index), b.position(index));
        }
    }

    #[test]
    fn ground_size_keeps_a_margin() {
        let small = LayoutPlan::new(100_000);
        assert_eq!(small.ground_size, MIN_GROUND_SIZE);

        let large = LayoutPlan::new(100_000_000);
        assert_eq!(large.ground_size, (large.rows + 2) as f32 * STADIUM_SPACING);
    }

    #[test]
    fn positions_are_centred() {
        let plan = LayoutPlan::new(900_000);
        assert_eq!(plan.columns, 3);
        // Middle column of the first row sits on the x axis.
        assert_eq!(plan.position(1).x, 0.0);
    }
}
