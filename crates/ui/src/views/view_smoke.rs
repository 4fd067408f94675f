use dioxus::prelude::*;

use pickpack_core::model::{CellId, GameState, GAME_DURATION_SECS, GRID_CELLS};
use pickpack_core::rng::GameRng;

use super::test_harness::{setup_view_harness, ViewHarness, ViewKind};
use crate::vm::GameIntent;

/// Finds a seed whose first grid/order draw gives the test something to
/// match and something to miss, with an order that survives one pick.
fn seed_with_mixed_grid() -> u64 {
    for seed in 0..10_000 {
        let mut rng = GameRng::seeded(seed);
        let mut state = GameState::new();
        state.start(&mut rng);
        let order = state.order().expect("started session has an order");
        let has_match = state.grid().iter().any(|cell| cell.item() == order.item());
        let has_miss = state.grid().iter().any(|cell| cell.item() != order.item());
        if has_match && has_miss && order.quantity() >= 2 {
            return seed;
        }
    }
    panic!("no seed in range produced a mixed grid");
}

fn started_game_harness(seed: u64) -> ViewHarness {
    let mut harness = setup_view_harness(ViewKind::Game, seed);
    harness.rebuild();
    harness.dispatch(GameIntent::Start);
    harness.drive();
    harness
}

/// Cell ids matching (or not matching) the current order, via the live vm.
fn pick_targets(harness: &ViewHarness, matches: bool) -> Vec<u8> {
    let vm = harness.vm();
    let guard = vm.read();
    let wanted = guard.order().expect("running game has an order").item();
    guard
        .cells()
        .iter()
        .filter(|cell| (cell.item() == wanted) == matches)
        .map(|cell| cell.id().value())
        .collect()
}

fn dispatch_pick(harness: &mut ViewHarness, cell_id: u8) {
    harness.dispatch(GameIntent::Pick(CellId::new(cell_id)));
    harness.drive();
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_rules_and_cta() {
    let mut harness = setup_view_harness(ViewKind::Home, 0);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Pick & Pack"), "missing app name in {html}");
    assert!(html.contains("Play now"), "missing cta in {html}");
    assert!(html.contains("500 points"), "missing challenge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_starts_idle() {
    let mut harness = setup_view_harness(ViewKind::Game, 1);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("game-start"), "missing start button in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Time: 1:00"), "missing timer in {html}");
    assert!(!html.contains("Current Order"), "order shown before start in {html}");
    assert!(!html.contains("Game Over"), "game over shown before start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_start_renders_grid_and_order() {
    let mut harness = started_game_harness(7);
    // Let the spawned countdown task get polled once; one second of real
    // time never elapses here, so the timer label stays at the full minute.
    harness.drive_async().await;
    let html = harness.render();

    let cells = html.matches("id=\"game-cell-").count();
    assert_eq!(cells, GRID_CELLS, "expected a full grid in {html}");
    assert!(html.contains("Current Order:"), "missing order panel in {html}");
    assert!(html.contains("Pick "), "missing order prompt in {html}");
    assert!(!html.contains("game-start"), "start button still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_matching_pick_scores() {
    let mut harness = started_game_harness(seed_with_mixed_grid());
    let target = pick_targets(&harness, true)[0];

    dispatch_pick(&mut harness, target);

    let html = harness.render();
    assert!(html.contains("Score: 10"), "missing updated score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_mismatch_clamps_score_at_zero() {
    let mut harness = started_game_harness(seed_with_mixed_grid());
    let miss = pick_targets(&harness, false)[0];

    // Nothing earned yet: the penalty clamps at zero instead of going negative.
    dispatch_pick(&mut harness, miss);
    let html = harness.render();
    assert!(html.contains("Score: 0"), "score went negative in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_mismatch_costs_five() {
    let mut harness = started_game_harness(seed_with_mixed_grid());
    let target = pick_targets(&harness, true)[0];
    let miss = pick_targets(&harness, false)[0];

    // The seed guarantees quantity >= 2, so the order survives the match and
    // the miss list is still a miss list afterwards.
    dispatch_pick(&mut harness, target);
    dispatch_pick(&mut harness, miss);

    let html = harness.render();
    assert!(html.contains("Score: 5"), "missing 10-5 score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_expiry_shows_game_over_and_freezes_score() {
    let mut harness = started_game_harness(seed_with_mixed_grid());
    let target = pick_targets(&harness, true)[0];
    dispatch_pick(&mut harness, target);

    for _ in 0..GAME_DURATION_SECS {
        harness.dispatch(GameIntent::Tick);
    }
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Game Over!"), "missing game over panel in {html}");
    assert!(html.contains("Final Score: 10"), "missing final score in {html}");
    assert!(html.contains("Try again"), "missing challenge message in {html}");
    assert!(html.contains("game-start"), "start button not back in {html}");
    assert!(html.contains("Time: 0:00"), "timer not at zero in {html}");

    // Picks after expiry are ignored.
    dispatch_pick(&mut harness, target);
    let html = harness.render();
    assert!(html.contains("Final Score: 10"), "score moved after expiry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_restart_clears_the_summary() {
    let mut harness = started_game_harness(seed_with_mixed_grid());
    for _ in 0..GAME_DURATION_SECS {
        harness.dispatch(GameIntent::Tick);
    }
    harness.drive();
    assert!(harness.render().contains("Game Over!"));

    harness.dispatch(GameIntent::Start);
    harness.drive();
    let html = harness.render();
    assert!(!html.contains("Game Over!"), "stale summary after restart in {html}");
    assert!(html.contains("Score: 0"), "score not reset in {html}");
    assert!(html.contains("Time: 1:00"), "timer not reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_cells_disabled_until_started() {
    let mut harness = setup_view_harness(ViewKind::Game, 3);
    harness.rebuild();
    harness.dispatch(GameIntent::Start);
    harness.drive();
    for _ in 0..GAME_DURATION_SECS {
        harness.dispatch(GameIntent::Tick);
    }
    harness.drive();

    // The grid stays visible after the game ends, but every cell is disabled.
    let html = harness.render();
    let disabled = html.matches("disabled").count();
    assert!(
        disabled >= GRID_CELLS,
        "expected all cells disabled, found {disabled} in {html}"
    );
}
