//! Comment list and composer shown under each post.

use api::{api, Comment, NewComment};
use dioxus::prelude::*;

use crate::auth::use_session;

/// Comments arrive in creation order; the display wants the latest on top.
fn newest_first(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.reverse();
    comments
}

/// Comments under one post, newest first, with a composer for signed-in
/// visitors.
///
/// Posting a comment prepends the created record locally instead of waiting
/// for a refetch. This is the one optimistic update in the client; the
/// management screens only ever trust a fresh list fetch.
#[component]
pub fn CommentSection(post_id: i64) -> Element {
    let session = use_session();
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut draft = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Load comments for this post on mount.
    let _loader = use_resource(move || async move {
        match api().comments_for_post(post_id).await {
            Ok(list) => comments.set(newest_first(list)),
            Err(err) => {
                tracing::error!("failed to load comments for post {post_id}: {err}");
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(identity) = session.identity() else {
            return;
        };
        let content = draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        spawn(async move {
            error.set(None);
            let payload = NewComment {
                post_id,
                user_id: identity.id,
                content,
            };
            match api().create_comment(&payload).await {
                Ok(created) => {
                    comments.with_mut(|list| list.insert(0, created));
                    draft.set(String::new());
                }
                Err(err) => {
                    tracing::error!("failed to post comment: {err}");
                    error.set(Some("Failed to post comment".to_string()));
                }
            }
        });
    };

    let count = comments().len();

    rsx! {
        div { class: "comments",
            h5 { "Comments ({count})" }

            if session.identity().is_some() {
                form { class: "comment-form", onsubmit: handle_submit,
                    input {
                        class: "form-control",
                        placeholder: "Write a comment...",
                        value: draft(),
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button { class: "btn btn-primary btn-sm", r#type: "submit", "Post" }
                }
            }

            if let Some(message) = error() {
                p { class: "comment-error", "{message}" }
            }

            ul { class: "comment-list",
                for comment in comments() {
                    li { key: "{comment.id}", class: "comment-item",
                        strong { "User #{comment.user_id}: " }
                        "{comment.content}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64) -> Comment {
        Comment {
            id,
            post_id: 1,
            user_id: 1,
            content: format!("comment {id}"),
        }
    }

    #[test]
    fn fetched_comments_display_newest_first() {
        let fetched = vec![comment(1), comment(2), comment(3)];
        let ids: Vec<i64> = newest_first(fetched).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn created_comment_is_prepended() {
        let mut displayed = newest_first(vec![comment(1), comment(2), comment(3)]);
        displayed.insert(0, comment(4));
        let ids: Vec<i64> = displayed.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }
}
