//! UI Components
//!
//! Shared widgets used by the routed pages.

mod category_panel;
mod confirm_dialog;
mod form;
mod nav_bar;
mod task_list;
mod task_widget;
mod toast;

pub use category_panel::CategoryPanel;
pub use confirm_dialog::{ConfirmContext, ConfirmDialog};
pub use form::field_alerts;
pub use nav_bar::NavBar;
pub use task_list::TaskList;
pub use task_widget::TaskWidget;
pub use toast::{ToastContext, ToastHost};
