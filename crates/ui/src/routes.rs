use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{GameView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/play", GameView)] Play {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Pick & Pack" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Play {}, "Play" } }
            }
        }
    }
}
