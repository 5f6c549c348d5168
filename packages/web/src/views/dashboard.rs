//! Admin dashboard: aggregate counts, quick actions, and a read-only view of
//! the registered accounts.

use api::{api, DashboardStats, Role};
use dioxus::prelude::*;
use ui::{use_session, RequireSession, Spinner};

use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RequireSession {
            Dashboard {}
        }
    }
}

#[component]
fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Stats failures are logged and the cards fall back to zeros.
    let stats = use_resource(move || async move {
        match api().dashboard_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                tracing::error!("failed to load dashboard stats: {err}");
                DashboardStats::default()
            }
        }
    });
    let users = use_resource(move || async move { api().list_users().await });

    let handle_logout = move |_| {
        session.logout();
        nav.replace(Route::Homepage {});
    };

    let totals = (*stats.read_unchecked()).unwrap_or_default();

    rsx! {
        div { class: "page-header",
            h1 { "Admin Dashboard" }
            button { class: "btn btn-danger", onclick: handle_logout, "Logout" }
        }

        if let Some(identity) = session.identity() {
            div { class: "alert alert-success welcome-banner",
                h4 { "Welcome, {identity.username}!" }
                p { "Role: {identity.role.as_str()} | Email: {identity.email}" }
            }
        }

        div { class: "stat-cards",
            div { class: "card stat-card",
                h6 { "Total Users" }
                p { class: "stat-value", "{totals.total_users}" }
                p { class: "text-muted", "Registered accounts" }
            }
            div { class: "card stat-card",
                h6 { "Total Posts" }
                p { class: "stat-value", "{totals.total_posts}" }
                p { class: "text-muted", "Blog posts created" }
            }
        }

        div { class: "card",
            div { class: "card-header", h5 { "Quick Actions" } }
            div { class: "card-body quick-actions",
                button {
                    class: "btn btn-outline-primary",
                    onclick: move |_| { nav.push(Route::UserManagement {}); },
                    "Manage Users"
                }
                button {
                    class: "btn btn-outline-success",
                    onclick: move |_| { nav.push(Route::PostManagement {}); },
                    "Manage Posts"
                }
            }
        }

        div { class: "card",
            match &*users.read_unchecked() {
                None => rsx! {
                    div { class: "card-header", h5 { "All Users" } }
                    div { class: "card-body page-loading", Spinner {} }
                },
                Some(Err(_)) => rsx! {
                    div { class: "card-header", h5 { "All Users" } }
                    div { class: "card-body",
                        div { class: "alert alert-danger", "There was an error fetching the users" }
                    }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "card-header", h5 { "All Users ({list.len()})" } }
                    div { class: "card-body",
                        table { class: "table",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Username" }
                                    th { "Email" }
                                    th { "Role" }
                                }
                            }
                            tbody {
                                if list.is_empty() {
                                    tr {
                                        td { colspan: "4", class: "centered", "No users found" }
                                    }
                                } else {
                                    for user in list {
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
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
