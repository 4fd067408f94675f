use dioxus::prelude::*;
use dioxus_router::Link;

use pickpack_core::model::{GAME_DURATION_SECS, MATCH_POINTS, MISS_PENALTY, TARGET_SCORE};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page",
            h2 { "{ctx.app_name()}" }
            p { "Pick cells that match the current order before the clock runs out." }
            ul { class: "home-rules",
                li { "Each matching pick earns {MATCH_POINTS} points." }
                li { "A wrong pick costs {MISS_PENALTY} points (your score never goes negative)." }
                li { "Beat {TARGET_SCORE} points in {GAME_DURATION_SECS} seconds to win the challenge." }
            }
            Link { class: "home-cta", to: Route::Play {}, "Play now" }
        }
    }
}
