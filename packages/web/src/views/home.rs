//! Public homepage: every published post with its comment section. No
//! authorization gate; anyone can read.

use api::api;
use dioxus::prelude::*;
use ui::{CommentSection, Spinner};

use super::format_date;

#[component]
pub fn Homepage() -> Element {
    let posts = use_resource(move || async move { api().list_posts().await });

    rsx! {
        div { class: "page-header centered",
            h1 { "Welcome to BlogSite" }
            p { class: "lead",
                "A simple blog platform where users can register, post, and comment."
            }
        }

        match &*posts.read_unchecked() {
            None => rsx! {
                div { class: "page-loading", Spinner {} }
            },
            Some(Err(_)) => rsx! {
                div { class: "alert alert-danger", "Failed to load posts" }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                div { class: "alert alert-info",
                    h4 { "No posts yet!" }
                    p { "Be the first to create a post. Register or login to get started." }
                }
            },
            Some(Ok(list)) => rsx! {
                div { class: "section-header",
                    h2 { "Recent Posts" }
                    span { class: "badge badge-primary", "{list.len()} Posts" }
                }

                for post in list {
                    article { key: "{post.id}", class: "card post-card",
                        h3 { class: "post-title", "{post.title}" }
                        p { class: "post-meta",
                            "by {post.author} on "
                            {format_date(post.created_at)}
                        }
                        p { class: "post-content", "{post.content}" }

                        hr {}

                        CommentSection { post_id: post.id }
                    }
                }
            },
        }
    }
}
