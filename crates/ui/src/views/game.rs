use dioxus::core::Task;
use dioxus::prelude::*;

use pickpack_core::model::{Cell, GameSummary, ItemKind, TARGET_SCORE};

use crate::context::AppContext;
use crate::vm::{format_seconds, GameIntent, GameTick, GameVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Applies one countdown tick to the session.
///
/// Returns false once the session is no longer running, so the interval task
/// knows to stop itself.
fn apply_tick(mut vm: Signal<GameVm>, mut summary: Signal<Option<GameSummary>>) -> bool {
    let outcome = vm.write().tick();
    match outcome {
        GameTick::Finished(result) => {
            summary.set(Some(result));
            false
        }
        GameTick::Continue => vm.peek().is_running(),
    }
}

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || GameVm::new(ctx.new_rng()));
    let summary = use_signal(|| None::<GameSummary>);
    let timer = use_signal(|| None::<Task>);

    let dispatch_intent = use_callback(move |intent: GameIntent| {
        let mut vm = vm;
        let mut summary = summary;
        let mut timer = timer;

        match intent {
            GameIntent::Start => {
                summary.set(None);
                vm.write().start();

                // One timer per session: drop the previous handle before
                // registering a new 1-second cadence.
                if let Some(task) = timer.write().take() {
                    task.cancel();
                }
                let task = spawn(async move {
                    let mut interval =
                        tokio::time::interval(std::time::Duration::from_secs(1));
                    // The first interval tick completes immediately.
                    interval.tick().await;
                    loop {
                        interval.tick().await;
                        if !apply_tick(vm, summary) {
                            break;
                        }
                    }
                });
                timer.set(Some(task));
            }
            GameIntent::Tick => {
                if !apply_tick(vm, summary) {
                    if let Some(task) = timer.write().take() {
                        task.cancel();
                    }
                }
            }
            GameIntent::Pick(cell_id) => {
                vm.write().pick(cell_id);
            }
        }
    });

    // Component teardown is an exit path too; leave no interval behind.
    use_drop(move || {
        let mut timer = timer;
        if let Some(task) = timer.write().take() {
            task.cancel();
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let running = vm_guard.is_running();
    let score = vm_guard.score();
    let timer_label = format_seconds(vm_guard.seconds_remaining());
    let cells: Vec<Cell> = vm_guard.cells().to_vec();
    let order = vm_guard.order().copied();
    let summary_state = *summary.read();
    drop(vm_guard);

    rsx! {
        div { class: "page game-page",
            section { class: "game-card",
                header { class: "game-card__header",
                    h2 { class: "game-card__title", "Quetico 3PL Warehouse Pick & Pack" }
                    p { class: "game-card__challenge",
                        "Can you beat {TARGET_SCORE} points in 60 seconds?"
                    }
                }
                div { class: "game-card__body",
                    div { class: "game-stats",
                        span { class: "game-stats__item", id: "game-score", "Score: {score}" }
                        span { class: "game-stats__item", id: "game-timer", "Time: {timer_label}" }
                    }

                    if !running {
                        button {
                            class: "game-start",
                            id: "game-start",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(GameIntent::Start),
                            "Start Game"
                        }
                    }

                    if running {
                        if let Some(order) = order {
                            div { class: "game-order", id: "game-order",
                                div { class: "game-order__label", "Current Order:" }
                                span { "Pick {order.remaining()} {order.item()}" }
                            }
                        }
                    }

                    div { class: "game-grid",
                        for cell in cells {
                            CellButton { cell, active: running, on_intent: dispatch_intent }
                        }
                    }

                    if let Some(result) = summary_state {
                        div { class: "game-over", id: "game-over",
                            h3 { class: "game-over__title", "Game Over!" }
                            p { "Final Score: {result.final_score()}" }
                            if result.beat_target() {
                                p { class: "game-over__message",
                                    "Congratulations! You beat the challenge! 🏆"
                                }
                            } else {
                                p { class: "game-over__message",
                                    "Try again to beat {result.target_score()} points!"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CellButton(cell: Cell, active: bool, on_intent: EventHandler<GameIntent>) -> Element {
    let tone = match cell.item() {
        ItemKind::Domestic => "game-cell--domestic",
        ItemKind::International => "game-cell--international",
        ItemKind::Express => "game-cell--express",
        ItemKind::Standard => "game-cell--standard",
        ItemKind::Priority => "game-cell--priority",
    };

    rsx! {
        button {
            class: "game-cell {tone}",
            id: "game-cell-{cell.id()}",
            r#type: "button",
            disabled: !active,
            onclick: move |_| on_intent.call(GameIntent::Pick(cell.id())),
            "{cell.item()}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    vm: Rc<RefCell<Option<Signal<GameVm>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GameIntent>, vm: Signal<GameVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<GameVm> {
        (*self.vm.borrow()).expect("game vm registered")
    }
}
