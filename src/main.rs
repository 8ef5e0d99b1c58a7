use crate::engine::core::app_setup::create_app;
use crate::engine::population::request::PopulationRequest;

mod constants;
mod engine;

fn main() {
    create_app(initial_population_from_args()).run();
}

/// Optional population count as the first CLI argument. Invalid input is
/// reported and replaced by the default without touching the scene.
fn initial_population_from_args() -> u64 {
    let Some(raw) = std::env::args().nth(1) else {
        return constants::DEFAULT_POPULATION;
    };

    match PopulationRequest::parse(&raw) {
        Ok(request) => request.people,
        Err(err) => {
            eprintln!(
                "Ignoring population argument: {err}. Using default of {} people.",
                constants::DEFAULT_POPULATION
            );
            constants::DEFAULT_POPULATION
        }
    }
}
