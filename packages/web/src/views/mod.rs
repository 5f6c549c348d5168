mod home;
pub use home::Homepage;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::AdminDashboard;

mod users;
pub use users::UserManagement;

mod posts;
pub use posts::PostManagement;

/// Server timestamps render the same way everywhere.
pub(crate) fn format_date(ts: chrono::NaiveDateTime) -> String {
    ts.format("%b %e, %Y").to_string()
}
