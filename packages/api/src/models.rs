//! Wire types for the backend REST surface.
//!
//! Field names follow the backend's camelCase JSON (`createdAt`, `postId`,
//! `userId`, `totalUsers`); the structs themselves stay snake_case. Read and
//! write shapes are deliberately separate: fetched records never carry a
//! password, and the payload types exist so the write direction can.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use session::Role;

/// One account as the user management screen sees it.
///
/// Distinct from [`session::Identity`]: this is a row in the administrative
/// list, not the active session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Write-side shape for registration and the user management editor.
///
/// The password travels only in this direction. An empty password on an
/// update means "keep the current one"; `role` is omitted entirely for
/// self-registration and set by the admin screens.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserPayload {
    /// Editing buffer for an existing account. The password field starts
    /// blank rather than echoing anything back.
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: Some(user.role),
        }
    }

    /// Required-field check, run before any request is dispatched.
    pub fn validate(&self, require_password: bool) -> Result<(), &'static str> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err("Username and email are required");
        }
        if require_password && self.password.is_empty() {
            return Err("Password is required for new users");
        }
        Ok(())
    }
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One published blog post. `created_at` is assigned by the server; the
/// client renders it as-is and derives nothing from it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

/// Write-side shape for the post editor.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostPayload {
    /// Empty draft with the author pre-filled from the session identity.
    pub fn authored_by(author: &str) -> Self {
        Self {
            author: author.to_string(),
            ..Default::default()
        }
    }

    /// Editing buffer for an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
        }
    }

    /// Required-field check, run before any request is dispatched.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err("Title and content are required");
        }
        Ok(())
    }
}

/// One comment under a post.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub content: String,
}

/// Payload for posting a comment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewComment {
    #[serde(rename = "postId")]
    pub post_id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub content: String,
}

/// Aggregate counts shown on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalUsers")]
    pub total_users: i64,
    #[serde(rename = "totalPosts")]
    pub total_posts: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_parses_backend_shape() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": 12,
                "title": "Hello",
                "content": "World",
                "author": "alice",
                "createdAt": "2026-08-01T09:30:00"
            }"#,
        )
        .unwrap();
        assert_eq!(post.id, 12);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert_eq!(post.created_at.to_string(), "2026-08-01 09:30:00");
    }

    #[test]
    fn user_role_defaults_when_absent() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"username":"bob","email":"bob@example.com"}"#).unwrap();
        assert_eq!(user.role, Role::User);

        let admin: User = serde_json::from_str(
            r#"{"id":2,"username":"alice","email":"alice@example.com","role":"ADMIN"}"#,
        )
        .unwrap();
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn comment_field_names_map_to_camel_case() {
        let comment: Comment =
            serde_json::from_str(r#"{"id":5,"postId":3,"userId":9,"content":"nice"}"#).unwrap();
        assert_eq!(comment.post_id, 3);
        assert_eq!(comment.user_id, 9);

        let out = serde_json::to_value(NewComment {
            post_id: 3,
            user_id: 9,
            content: "nice".to_string(),
        })
        .unwrap();
        assert_eq!(out["postId"], 3);
        assert_eq!(out["userId"], 9);
    }

    #[test]
    fn registration_payload_omits_role() {
        let payload = UserPayload {
            username: "carol".to_string(),
            email: "carol@example.com".to_string(),
            password: "secret".to_string(),
            role: None,
        };
        let out = serde_json::to_value(&payload).unwrap();
        assert!(out.get("role").is_none());
        assert_eq!(out["password"], "secret");

        let with_role = UserPayload {
            role: Some(Role::Admin),
            ..payload
        };
        assert_eq!(serde_json::to_value(&with_role).unwrap()["role"], "ADMIN");
    }

    #[test]
    fn user_validation_short_circuits() {
        let mut payload = UserPayload {
            username: String::new(),
            email: "dave@example.com".to_string(),
            password: "pw".to_string(),
            role: None,
        };
        assert_eq!(
            payload.validate(true),
            Err("Username and email are required")
        );

        payload.username = "dave".to_string();
        payload.password = String::new();
        assert_eq!(payload.validate(true), Err("Password is required for new users"));
        // Blank password is fine on edit: it means "keep the current one".
        assert_eq!(payload.validate(false), Ok(()));
    }

    #[test]
    fn post_validation_short_circuits() {
        let mut draft = PostPayload::authored_by("alice");
        assert_eq!(draft.validate(), Err("Title and content are required"));

        draft.title = "Hello".to_string();
        assert_eq!(draft.validate(), Err("Title and content are required"));

        draft.content = "World".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn edit_buffer_leaves_password_blank() {
        let user: User = serde_json::from_str(
            r#"{"id":2,"username":"alice","email":"alice@example.com","role":"ADMIN"}"#,
        )
        .unwrap();
        let buffer = UserPayload::from_user(&user);
        assert_eq!(buffer.username, "alice");
        assert!(buffer.password.is_empty());
        assert_eq!(buffer.role, Some(Role::Admin));
    }

    #[test]
    fn dashboard_stats_parse() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalUsers":4,"totalPosts":17}"#).unwrap();
        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.total_posts, 17);
        assert_eq!(DashboardStats::default().total_users, 0);
    }
}
