//! Login page with username/password form.

use api::{api, Credentials};
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let credentials = Credentials {
                username: username(),
                password: password(),
            };
            match api().login(&credentials).await {
                Ok(identity) => {
                    session.login(identity);
                    nav.push(Route::AdminDashboard {});
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    loading.set(false);
                    error.set(Some("Invalid username or password".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "form-page",
            h2 { "Login" }

            form { onsubmit: handle_login,
                if let Some(message) = error() {
                    div { class: "alert alert-danger", "{message}" }
                }

                div { class: "form-group",
                    label { "Username" }
                    input {
                        class: "form-control",
                        r#type: "text",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { "Password" }
                    input {
                        class: "form-control",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }
        }
    }
}
