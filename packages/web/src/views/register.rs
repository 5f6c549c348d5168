//! Registration page. A successful registration logs the new account in
//! immediately and continues to the dashboard.

use api::{api, UserPayload};
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let name = username().trim().to_string();
            let mail = email().trim().to_string();
            let pass = password();

            if name.is_empty() {
                error.set(Some("Username is required".to_string()));
                return;
            }
            if mail.is_empty() || !mail.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if pass.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            let payload = UserPayload {
                username: name,
                email: mail,
                password: pass,
                role: None,
            };
            match api().register(&payload).await {
                Ok(identity) => {
                    session.login(identity);
                    nav.push(Route::AdminDashboard {});
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    loading.set(false);
                    error.set(Some("There was an error registering the user".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "form-page",
            h2 { "User Registration" }

            form { onsubmit: handle_register,
                if let Some(message) = error() {
                    div { class: "alert alert-danger", "{message}" }
                }

                div { class: "form-group",
                    label { "Username" }
                    input {
                        class: "form-control",
                        r#type: "text",
                        placeholder: "Username",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { "Email" }
                    input {
                        class: "form-control",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { "Password" }
                    input {
                        class: "form-control",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }
        }
    }
}
