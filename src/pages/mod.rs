//! Routed Pages

mod about;
mod add_task;
mod dashboard;
mod edit_task;
mod not_found;
mod sign_in;
mod sign_up;
mod task_detail;
mod tasks;

pub use about::AboutPage;
pub use add_task::AddTaskPage;
pub use dashboard::DashboardPage;
pub use edit_task::EditTaskPage;
pub use not_found::NotFoundPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
pub use task_detail::TaskDetailPage;
pub use tasks::TasksPage;
