use dioxus::prelude::*;

use ui::{use_session, SessionProvider};
use views::{AdminDashboard, Homepage, Login, PostManagement, Register, UserManagement};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Homepage {},
        #[route("/register")]
        Register {},
        #[route("/login")]
        Login {},
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/users")]
        UserManagement {},
        #[route("/admin/posts")]
        PostManagement {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Top navigation bar, shown on every route. Which links appear depends on
/// whether a session is active.
#[component]
fn NavBar() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let handle_logout = move |_| {
        session.logout();
        nav.push(Route::Homepage {});
    };

    rsx! {
        nav { class: "navbar",
            Link { class: "navbar-brand", to: Route::Homepage {}, "BlogSite" }

            div { class: "navbar-links",
                Link { class: "nav-link", to: Route::Homepage {}, "Home" }
                if session.identity().is_none() {
                    Link { class: "nav-link", to: Route::Register {}, "Register" }
                    Link { class: "nav-link", to: Route::Login {}, "Login" }
                } else {
                    Link { class: "nav-link", to: Route::AdminDashboard {}, "Admin" }
                }
            }

            if let Some(identity) = session.identity() {
                div { class: "navbar-user",
                    span { class: "navbar-username", "{identity.username}" }
                    button { class: "btn btn-outline btn-sm", onclick: handle_logout, "Logout" }
                }
            }
        }

        div { class: "container",
            Outlet::<Route> {}
        }
    }
}
