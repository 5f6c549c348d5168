//! Post management screen. Same shape as user management: modal editor,
//! mutate, then refetch the whole list.

use api::{api, Post, PostPayload};
use dioxus::prelude::*;
use ui::{use_session, Alert, EditorMode, ModalOverlay, RequireSession, Spinner};

use super::format_date;
use crate::Route;

#[component]
pub fn PostManagement() -> Element {
    rsx! {
        RequireSession {
            ManagePosts {}
        }
    }
}

#[component]
fn ManagePosts() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_modal = use_signal(|| false);
    let mut mode = use_signal(|| EditorMode::Create);
    let mut buffer = use_signal(PostPayload::default);
    let mut edit_id = use_signal(|| Option::<i64>::None);
    let mut pending_delete = use_signal(|| Option::<Post>::None);

    let refresh = move || {
        spawn(async move {
            loading.set(true);
            match api().list_posts().await {
                Ok(list) => posts.set(list),
                Err(err) => {
                    tracing::error!("failed to load posts: {err}");
                    error.set(Some("Failed to load posts".to_string()));
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || refresh());

    let open_create = move |_| {
        // The author is the signed-in account and is not editable.
        let author = session.identity().map(|i| i.username).unwrap_or_default();
        buffer.set(PostPayload::authored_by(&author));
        edit_id.set(None);
        mode.set(EditorMode::Create);
        error.set(None);
        show_modal.set(true);
    };

    let mut open_edit = move |post: Post| {
        buffer.set(PostPayload::from_post(&post));
        edit_id.set(Some(post.id));
        mode.set(EditorMode::Edit);
        error.set(None);
        show_modal.set(true);
    };

    let handle_save = move |_| {
        let payload = buffer();
        // Validation failures never reach the network.
        if let Err(message) = payload.validate() {
            error.set(Some(message.to_string()));
            return;
        }
        spawn(async move {
            let result = match mode() {
                EditorMode::Create => api().create_post(&payload).await.map(|_| ()),
                EditorMode::Edit => match edit_id() {
                    Some(id) => api().update_post(id, &payload).await,
                    None => return,
                },
            };
            match result {
                Ok(()) => {
                    show_modal.set(false);
                    refresh();
                }
                Err(err) => {
                    tracing::error!("failed to save post: {err}");
                    error.set(Some("Failed to save post".to_string()));
                }
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(post) = pending_delete() else {
            return;
        };
        spawn(async move {
            match api().delete_post(post.id).await {
                Ok(()) => {
                    pending_delete.set(None);
                    refresh();
                }
                Err(err) => {
                    tracing::error!("failed to delete post {}: {err}", post.id);
                    pending_delete.set(None);
                    error.set(Some("Failed to delete post".to_string()));
                }
            }
        });
    };

    let count = posts().len();

    rsx! {
        div { class: "page-header",
            h1 { "Post Management" }
            button {
                class: "btn btn-secondary",
                onclick: move |_| { nav.push(Route::AdminDashboard {}); },
                "Back to Dashboard"
            }
        }

        div { class: "toolbar",
            button { class: "btn btn-success", onclick: open_create, "Create New Post" }
        }

        if let Some(message) = error() {
            Alert { message: message, on_close: move |_| error.set(None) }
        }

        if loading() {
            div { class: "page-loading", Spinner {} }
        } else {
            div { class: "card",
                div { class: "card-header", h5 { "All Posts ({count})" } }
                div { class: "card-body",
                    if count == 0 {
                        div { class: "alert alert-info",
                            "No posts yet. Click \"Create New Post\" to get started!"
                        }
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Title" }
                                    th { "Author" }
                                    th { "Created" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for post in posts() {
                                    tr { key: "{post.id}",
                                        td { "{post.id}" }
                                        td { "{post.title}" }
                                        td { "{post.author}" }
                                        td { {format_date(post.created_at)} }
                                        td {
                                            button {
                                                class: "btn btn-warning btn-sm",
                                                onclick: {
                                                    let post = post.clone();
                                                    move |_| open_edit(post.clone())
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: {
                                                    let post = post.clone();
                                                    move |_| pending_delete.set(Some(post.clone()))
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
            }
        }

        if show_modal() {
            ModalOverlay { on_close: move |_| show_modal.set(false),
                div { class: "modal-body modal-wide",
                    h5 {
                        if mode().is_create() { "Create New Post" } else { "Edit Post" }
                    }

                    if let Some(message) = error() {
                        div { class: "alert alert-danger", "{message}" }
                    }

                    div { class: "form-group",
                        label { "Title *" }
                        input {
                            class: "form-control",
                            r#type: "text",
                            placeholder: "Enter post title",
                            value: buffer().title,
                            oninput: move |evt| buffer.with_mut(|b| b.title = evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { "Content *" }
                        textarea {
                            class: "form-control",
                            rows: "10",
                            placeholder: "Write your post content here...",
                            value: buffer().content,
                            oninput: move |evt| buffer.with_mut(|b| b.content = evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { "Author" }
                        input {
                            class: "form-control",
                            r#type: "text",
                            value: buffer().author,
                            disabled: true,
                        }
                        p { class: "text-muted", "Author is set to your username" }
                    }

                    div { class: "modal-actions",
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| show_modal.set(false),
                            "Cancel"
                        }
                        button { class: "btn btn-primary", onclick: handle_save,
                            if mode().is_create() { "Create Post" } else { "Save Changes" }
                        }
                    }
                }
            }
        }

        if let Some(post) = pending_delete() {
            ModalOverlay { on_close: move |_| pending_delete.set(None),
                div { class: "modal-body",
                    h5 { "Delete Post" }
                    p { "Are you sure you want to delete \"{post.title}\"?" }
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
