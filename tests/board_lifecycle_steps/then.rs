//! Then steps for board lifecycle BDD scenarios.

use super::world::BoardWorld;
use kanban_core::board::{domain::BoardTime, index::ViewOrder, services::BoardError};
use rstest_bdd_macros::then;

fn view_matches(world: &BoardWorld, order: ViewOrder, expected: &str) -> Result<(), eyre::Report> {
    let actual = world.describe(world.board.index(order).snapshot())?;
    if actual != expected {
        return Err(eyre::eyre!("expected view '{expected}', found '{actual}'"));
    }
    Ok(())
}

#[then(r#"the description view is "{expected}""#)]
fn description_view_is(world: &BoardWorld, expected: String) -> Result<(), eyre::Report> {
    view_matches(world, ViewOrder::Description, &expected)
}

#[then(r#"the start view is "{expected}""#)]
fn start_view_is(world: &BoardWorld, expected: String) -> Result<(), eyre::Report> {
    view_matches(world, ViewOrder::StartTime, &expected)
}

#[then(r#"task "{description}" started at {time:u64}"#)]
fn task_started_at(world: &BoardWorld, description: String, time: u64) -> Result<(), eyre::Report> {
    let start = world.board.task(world.task_id(&description)?)?.start_time();
    if start != Some(BoardTime::new(time)) {
        return Err(eyre::eyre!("expected start {time}, found {start:?}"));
    }
    Ok(())
}

#[then("the move reports elapsed {elapsed:u64} and slack {slack:i64}")]
fn move_reports(world: &BoardWorld, elapsed: u64, slack: i64) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing activation outcome"))?;
    if outcome.elapsed != elapsed || outcome.slack() != slack {
        return Err(eyre::eyre!(
            "expected elapsed {elapsed} slack {slack}, got elapsed {} slack {}",
            outcome.elapsed,
            outcome.slack()
        ));
    }
    Ok(())
}

#[then("the time step is rejected")]
fn time_step_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_time_step
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing time step result"))?;
    if !matches!(result, Err(BoardError::NegativeTimeStep(_))) {
        return Err(eyre::eyre!("expected NegativeTimeStep error, got {result:?}"));
    }
    Ok(())
}

#[then("the board time is {time:u64}")]
fn board_time_is(world: &BoardWorld, time: u64) -> Result<(), eyre::Report> {
    if world.board.now() != BoardTime::new(time) {
        return Err(eyre::eyre!("expected time {time}, found {}", world.board.now()));
    }
    Ok(())
}
