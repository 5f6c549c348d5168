//! User management screen: list, create, edit, and delete accounts.
//!
//! Every mutation round-trips through the backend and then refetches the
//! whole list; the table is only ever trusted after a round trip.

use api::{api, Role, User, UserPayload};
use dioxus::prelude::*;
use ui::{Alert, EditorMode, ModalOverlay, RequireSession, Spinner};

use crate::Route;

#[component]
pub fn UserManagement() -> Element {
    rsx! {
        RequireSession {
            ManageUsers {}
        }
    }
}

#[component]
fn ManageUsers() -> Element {
    let nav = use_navigator();
    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_modal = use_signal(|| false);
    let mut mode = use_signal(|| EditorMode::Create);
    let mut buffer = use_signal(UserPayload::default);
    let mut edit_id = use_signal(|| Option::<i64>::None);
    let mut pending_delete = use_signal(|| Option::<User>::None);

    // Replace the list wholesale with whatever the backend has. On failure
    // the previous rows stay visible next to the error.
    let refresh = move || {
        spawn(async move {
            loading.set(true);
            match api().list_users().await {
                Ok(list) => users.set(list),
                Err(err) => {
                    tracing::error!("failed to load users: {err}");
                    error.set(Some("Failed to load users".to_string()));
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || refresh());

    let open_create = move |_| {
        buffer.set(UserPayload {
            role: Some(Role::User),
            ..Default::default()
        });
        edit_id.set(None);
        mode.set(EditorMode::Create);
        error.set(None);
        show_modal.set(true);
    };

    let mut open_edit = move |user: User| {
        buffer.set(UserPayload::from_user(&user));
        edit_id.set(Some(user.id));
        mode.set(EditorMode::Edit);
        error.set(None);
        show_modal.set(true);
    };

    let handle_save = move |_| {
        let payload = buffer();
        // Validation failures never reach the network.
        if let Err(message) = payload.validate(mode().is_create()) {
            error.set(Some(message.to_string()));
            return;
        }
        spawn(async move {
            let result = match mode() {
                EditorMode::Create => api().create_user(&payload).await.map(|_| ()),
                EditorMode::Edit => match edit_id() {
                    Some(id) => api().update_user(id, &payload).await,
                    None => return,
                },
            };
            match result {
                Ok(()) => {
                    show_modal.set(false);
                    refresh();
                }
                Err(err) => {
                    // Modal stays open with the error inline.
                    tracing::error!("failed to save user: {err}");
                    error.set(Some("Failed to save user".to_string()));
                }
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(user) = pending_delete() else {
            return;
        };
        spawn(async move {
            match api().delete_user(user.id).await {
                Ok(()) => {
                    pending_delete.set(None);
                    refresh();
                }
                Err(err) => {
                    tracing::error!("failed to delete user {}: {err}", user.id);
                    pending_delete.set(None);
                    error.set(Some("Failed to delete user".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "page-header",
            h1 { "User Management" }
            button {
                class: "btn btn-secondary",
                onclick: move |_| { nav.push(Route::AdminDashboard {}); },
                "Back to Dashboard"
            }
        }

        div { class: "toolbar",
            button { class: "btn btn-success", onclick: open_create, "Add New User" }
        }

        if let Some(message) = error() {
            Alert { message: message, on_close: move |_| error.set(None) }
        }

        if loading() {
            div { class: "page-loading", Spinner {} }
        } else {
            table { class: "table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Username" }
                        th { "Email" }
                        th { "Role" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if users().is_empty() {
                        tr {
                            td { colspan: "5", class: "centered", "No users found" }
                        }
                    } else {
                        for user in users() {
                            tr { key: "{user.id}",
                                td { "{user.id}" }
                                td { "{user.username}" }
                                td { "{user.email}" }
                                td {
                                    span {
                                        class: if user.role == Role::Admin { "badge badge-danger" } else { "badge badge-primary" },
                                        "{user.role.as_str()}"
                                    }
                                }
                                td {
                                    button {
                                        class: "btn btn-warning btn-sm",
                                        onclick: {
                                            let user = user.clone();
                                            move |_| open_edit(user.clone())
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-danger btn-sm",
                                        onclick: {
                                            let user = user.clone();
                                            move |_| pending_delete.set(Some(user.clone()))
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_modal() {
            ModalOverlay { on_close: move |_| show_modal.set(false),
                div { class: "modal-body",
                    h5 {
                        if mode().is_create() { "Add New User" } else { "Edit User" }
                    }

                    if let Some(message) = error() {
                        div { class: "alert alert-danger", "{message}" }
                    }

                    div { class: "form-group",
                        label { "Username *" }
                        input {
                            class: "form-control",
                            r#type: "text",
                            value: buffer().username,
                            oninput: move |evt| buffer.with_mut(|b| b.username = evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { "Email *" }
                        input {
                            class: "form-control",
                            r#type: "email",
                            value: buffer().email,
                            oninput: move |evt| buffer.with_mut(|b| b.email = evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label {
                            if mode().is_create() { "Password *" } else { "Password (leave empty to keep current)" }
                        }
                        input {
                            class: "form-control",
                            r#type: "password",
                            placeholder: if mode().is_create() { "Enter password" } else { "Leave empty to keep current password" },
                            value: buffer().password,
                            oninput: move |evt| buffer.with_mut(|b| b.password = evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { "Role" }
                        select {
                            class: "form-control",
                            value: if buffer().role == Some(Role::Admin) { "ADMIN" } else { "USER" },
                            onchange: move |evt| {
                                let role = if evt.value() == "ADMIN" { Role::Admin } else { Role::User };
                                buffer.with_mut(|b| b.role = Some(role));
                            },
                            option { value: "USER", "USER" }
                            option { value: "ADMIN", "ADMIN" }
                        }
                    }

                    div { class: "modal-actions",
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| show_modal.set(false),
                            "Cancel"
                        }
                        button { class: "btn btn-primary", onclick: handle_save,
                            if mode().is_create() { "Create" } else { "Save Changes" }
                        }
                    }
                }
            }
        }

        if let Some(user) = pending_delete() {
            ModalOverlay { on_close: move |_| pending_delete.set(None),
                div { class: "modal-body",
                    h5 { "Delete User" }
                    p { "Are you sure you want to delete user \"{user.username}\"?" }
                    div { class: "modal-actions",
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| pending_delete.set(None),
                            "Cancel"
                        }
                        button { class: "btn btn-danger", onclick: confirm_delete, "Delete" }
                    }
                }
            }
        }
    }
}
