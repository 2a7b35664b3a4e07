//! Ordering invariants over larger, mixed command sequences.

use super::helpers::{TestBoard, board, create, ids, move_task};
use kanban_core::board::{domain::TaskId, index::ViewOrder};
use rstest::rstest;

/// Small deterministic generator so sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_value(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }
}

#[rstest]
fn scenario_from_fruit_descriptions(mut board: TestBoard) -> eyre::Result<()> {
    let banana = create(&mut board, "banana", 3)?;
    let apple = create(&mut board, "apple", 2)?;
    let cherry = create(&mut board, "cherry", 1)?;

    let view = board.ordered_view(ViewOrder::Description, None)?;

    eyre::ensure!(ids(&view) == [apple, banana, cherry].map(TaskId::value));
    Ok(())
}

#[rstest]
#[case(7)]
#[case(42)]
#[case(2024)]
fn description_view_is_strictly_increasing(mut board: TestBoard, #[case] seed: u64) -> eyre::Result<()> {
    let mut rng = Lcg(seed);
    for n in 0..200 {
        // Unique descriptions in scrambled order.
        let description = format!("task-{:08}-{n}", rng.next_value() % 100_000);
        create(&mut board, &description, 1 + rng.next_value() % 9)?;
    }

    let view = board.ordered_view(ViewOrder::Description, None)?;
    let descriptions: Vec<&str> = view
        .iter()
        .map(|record| record.description().as_str())
        .collect();

    eyre::ensure!(view.len() == 200);
    eyre::ensure!(
        descriptions.windows(2).all(|pair| pair.first() < pair.get(1)),
        "description view out of order"
    );
    Ok(())
}

#[rstest]
#[case(1)]
#[case(99)]
#[case(31_337)]
fn start_view_matches_stable_sort_by_start(mut board: TestBoard, #[case] seed: u64) -> eyre::Result<()> {
    let mut rng = Lcg(seed);
    let mut created = Vec::new();
    for n in 0..60 {
        created.push(create(&mut board, &format!("item {n:03}"), 5)?);
    }

    // Activate in a scrambled order, occasionally advancing the clock.
    let mut pending = created.clone();
    let mut activation_order = Vec::new();
    while !pending.is_empty() {
        let pick = usize::try_from(rng.next_value())? % pending.len();
        let id = pending.swap_remove(pick);
        move_task(&mut board, id, "ana", "IN PROGRESS")?;
        activation_order.push((board.now(), id));
        if rng.next_value() % 4 == 0 {
            board.advance_time(i64::try_from(rng.next_value() % 3)?)?;
        }
    }

    // Re-moving started tasks must not disturb anything.
    for id in created.iter().step_by(3) {
        move_task(&mut board, *id, "bo", "DONE")?;
    }

    let mut expected = activation_order.clone();
    expected.sort_by_key(|(start, _)| *start);
    let expected_ids: Vec<u64> = expected.iter().map(|(_, id)| id.value()).collect();

    let view = board.ordered_view(ViewOrder::StartTime, None)?;
    eyre::ensure!(ids(&view) == expected_ids);
    for (start, id) in &activation_order {
        eyre::ensure!(board.task(*id)?.start_time() == Some(*start));
    }
    Ok(())
}

#[rstest]
fn unstarted_tasks_never_enter_start_view(mut board: TestBoard) -> eyre::Result<()> {
    let idle = create(&mut board, "idle", 1)?;
    let busy = create(&mut board, "busy", 1)?;
    move_task(&mut board, busy, "ana", "IN PROGRESS")?;
    board.advance_time(10)?;

    let view = board.ordered_view(ViewOrder::StartTime, None)?;

    eyre::ensure!(ids(&view) == vec![busy.value()]);
    eyre::ensure!(board.index(ViewOrder::StartTime).position_of(idle).is_none());
    eyre::ensure!(board.index(ViewOrder::Description).len() == 2);
    Ok(())
}
