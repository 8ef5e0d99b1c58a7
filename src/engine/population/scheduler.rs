use std::ops::Range;

use bevy::prelude::*;

use crate::constants::LABEL_HEIGHT;
use crate::engine::camera::reframe::ReframeRequest;
use crate::engine::population::policy::PopulationPolicy;
use crate::engine::population::request::PopulationRequest;
use crate::engine::scene::ground::{GroundGrid, GroundPlane, spawn_ground};
use crate::engine::scene::layout::LayoutPlan;
use crate::engine::stadium::model::{StadiumUnit, spawn_stadium};
use crate::engine::stadium::templates::StadiumTemplates;
use crate::engine::ui::labels::{StadiumLabel, spawn_label};
use crate::engine::ui::readout::PopulationReadout;

/// Monotonic layout generation. Every accepted request bumps it; a deferred
/// batch scheduled under an older generation is dropped without running.
#[derive(Resource, Default)]
pub struct SceneGeneration(pub u64);

/// Head count the scene starts with.
#[derive(Resource, Debug, Clone, Copy)]
pub struct InitialPopulation(pub u64);

/// Cooperative construction task. One batch is processed per frame so the
/// interactive loop never blocks on more than a batch's worth of work.
#[derive(Resource, Debug, Clone)]
pub struct PopulateJob {
    generation: u64,
    plan: LayoutPlan,
    batch_size: usize,
    next_batch: usize,
    /// Set on the frame the job is created, after its synchronous first
    /// batch; consumed before any deferred batch runs so the first deferred
    /// batch lands on the following frame.
    fresh: bool,
}

impl PopulateJob {
    pub fn new(generation: u64, plan: LayoutPlan, batch_size: usize) -> Self {
        Self {
            generation,
            plan,
            batch_size: batch_size.max(1),
            next_batch: 0,
            fresh: false,
        }
    }

    pub fn batch_count(&self) -> usize {
        self.plan.stadium_count.div_ceil(self.batch_size)
    }

    pub fn batch_range(&self, batch: usize) -> Range<usize> {
        let start = batch * self.batch_size;
        start..(start + self.batch_size).min(self.plan.stadium_count)
    }

    pub fn is_finished(&self) -> bool {
        self.next_batch >= self.batch_count()
    }

    pub fn is_stale(&self, current_generation: u64) -> bool {
        self.generation != current_generation
    }
}

pub fn queue_initial_population(
    initial: Res<InitialPopulation>,
    mut requests: EventWriter<PopulationRequest>,
) {
    requests.write(PopulationRequest { people: initial.0 });
}

/// Accept the latest population request: clear the previous layout, rebuild
/// the ground to fit, and start a new construction job, running its first
/// batch synchronously for immediate visible feedback.
pub fn handle_population_requests(
    mut commands: Commands,
    mut requests: EventReader<PopulationRequest>,
    mut generation: ResMut<SceneGeneration>,
    templates: Res<StadiumTemplates>,
    policy: Res<PopulationPolicy>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut readout: ResMut<PopulationReadout>,
    mut reframes: EventWriter<ReframeRequest>,
    previous_layout: Query<
        Entity,
        Or<(
            With<StadiumUnit>,
            With<StadiumLabel>,
            With<GroundPlane>,
            With<GroundGrid>,
        )>,
    >,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    for entity in &previous_layout {
        commands.entity(entity).despawn();
    }

    generation.0 += 1;
    let plan = LayoutPlan::new(request.people);
    info!(
        "Populating {} stadiums for {} people (generation {})",
        plan.stadium_count, plan.people, generation.0
    );

    spawn_ground(&mut commands, &mut meshes, &mut materials, plan.ground_size);
    readout.stadiums = plan.stadium_count;
    readout.people = plan.people;

    let mut job = PopulateJob::new(generation.0, plan, policy.batch_size);
    spawn_units(
        &mut commands,
        &templates,
        &mut materials,
        &policy,
        &job.plan,
        job.batch_range(0),
    );
    job.next_batch = 1;

    if job.is_finished() {
        reframes.write(ReframeRequest {
            ground_size: job.plan.ground_size,
            rows: job.plan.rows,
        });
        commands.remove_resource::<PopulateJob>();
    } else {
        job.fresh = true;
        commands.insert_resource(job);
    }
}

/// Process exactly one deferred batch per frame, the cooperative suspension
/// point of the pipeline. A job superseded by a newer generation is dropped
/// wholesale before any of its remaining batches run.
pub fn run_population_batches(
    mut commands: Commands,
    job: Option<ResMut<PopulateJob>>,
    generation: Res<SceneGeneration>,
    templates: Res<StadiumTemplates>,
    policy: Res<PopulationPolicy>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut reframes: EventWriter<ReframeRequest>,
) {
    let Some(mut job) = job else {
        return;
    };

    if job.is_stale(generation.0) {
        info!("Dropping superseded population job (generation {})", job.generation);
        commands.remove_resource::<PopulateJob>();
        return;
    }

    if job.fresh {
        job.fresh = false;
        return;
    }

    let batch = job.next_batch;
    spawn_units(
        &mut commands,
        &templates,
        &mut materials,
        &policy,
        &job.plan,
        job.batch_range(batch),
    );
    job.next_batch += 1;

    if job.is_finished() {
        info!(
            "Population complete: {} stadiums over {} batches",
            job.plan.stadium_count,
            job.batch_count()
        );
        reframes.write(ReframeRequest {
            ground_size: job.plan.ground_size,
            rows: job.plan.rows,
        });
        commands.remove_resource::<PopulateJob>();
    }
}

fn spawn_units(
    commands: &mut Commands,
    templates: &StadiumTemplates,
    materials: &mut Assets<StandardMaterial>,
    policy: &PopulationPolicy,
    plan: &LayoutPlan,
    range: Range<usize>,
) {
    for index in range {
        let position = plan.position(index);
        spawn_stadium(
            commands,
            templates,
            materials,
            policy.tier_for(index),
            position,
            index,
            plan.occupancy(index),
        );

        if policy.labelled(index, plan.stadium_count) {
            spawn_label(commands, index + 1, position + Vec3::Y * LABEL_HEIGHT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(people: u64, batch_size: usize) -> PopulateJob {
        PopulateJob::new(1, LayoutPlan::new(people), batch_size)
    }

    #[test]
    fn batches_cover_every_index_exactly_once() {
        let job = job(8_500_000, 20);
        assert_eq!(job.plan.stadium_count, 85);
        assert_eq!(job.batch_count(), 5);

        let mut covered = Vec::new();
        for batch in 0..job.batch_count() {
            covered.extend(job.batch_range(batch));
        }
        assert_eq!(covered, (0..85).collect::<Vec<_>>());
    }

    #[test]
    fn single_batch_layouts_finish_after_the_synchronous_pass() {
        let mut job = job(300_000, 20);
        assert_eq!(job.batch_count(), 1);
        job.next_batch = 1;
        assert!(job.is_finished());
    }

    #[test]
    fn stale_jobs_are_detected_by_generation() {
        let job = job(10_000_000, 20);
        assert!(!job.is_stale(1));
        // A newer request bumped the scene generation; the job must no-op.
        assert!(job.is_stale(2));
    }

    #[test]
    fn zero_batch_size_is_clamped() {
        let job = PopulateJob::new(1, LayoutPlan::new(1_000_000), 0);
        assert_eq!(job.batch_range(0), 0..1);
    }
}
