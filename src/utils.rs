//! Shared Helpers
//!
//! Small presentation and filtering helpers used across the task views.

use crate::models::{Task, TaskPriority, TaskStatus};

/// Uppercase the first character, leaving the rest as-is
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// CSS class for a status badge
pub fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "status-pending",
        TaskStatus::InProgress => "status-in-progress",
        TaskStatus::Completed => "status-completed",
    }
}

/// Display name for an attachment, derived from its URL. Upload-mangled
/// underscores are folded back into dots.
pub fn file_name_from_url(url: &str) -> String {
    let last = url.rsplit('/').next().unwrap_or("");
    if last.is_empty() {
        return "Unknown File".to_string();
    }
    last.replace('_', ".")
}

/// Tasks visible under the selected category; `None` means "All"
pub fn filter_by_category(tasks: &[Task], selected: Option<u32>) -> Vec<Task> {
    match selected {
        Some(id) => tasks
            .iter()
            .filter(|task| task.category == Some(id))
            .cloned()
            .collect(),
        None => tasks.to_vec(),
    }
}

/// Dashboard widget flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetFilter {
    Important,
    DueSoon,
}

/// Widget task selection: both flavors hide completed work, and the
/// important widget keeps only high-priority tasks.
pub fn widget_tasks(tasks: &[Task], filter: WidgetFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status != TaskStatus::Completed)
        .filter(|task| match filter {
            WidgetFilter::Important => task.priority == TaskPriority::Important,
            WidgetFilter::DueSoon => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, category: Option<u32>, priority: TaskPriority, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            category,
            priority,
            status,
            due_date: None,
            is_overdue: false,
            days_left: None,
        }
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("groceries"), "Groceries");
        assert_eq!(capitalize_first_letter("a"), "A");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("Already"), "Already");
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://res.example.com/media/report_pdf"),
            "report.pdf"
        );
        assert_eq!(file_name_from_url(""), "Unknown File");
    }

    #[test]
    fn test_category_filter_exact_match() {
        let tasks = vec![
            task(1, Some(10), TaskPriority::None, TaskStatus::Pending),
            task(2, Some(11), TaskPriority::None, TaskStatus::Pending),
            task(3, None, TaskPriority::None, TaskStatus::Pending),
        ];

        let filtered = filter_by_category(&tasks, Some(10));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_category_filter_all_returns_everything() {
        let tasks = vec![
            task(1, Some(10), TaskPriority::None, TaskStatus::Pending),
            task(2, None, TaskPriority::None, TaskStatus::Pending),
        ];
        assert_eq!(filter_by_category(&tasks, None), tasks);
    }

    #[test]
    fn test_important_widget_excludes_completed_and_low_priority() {
        let tasks = vec![
            task(1, None, TaskPriority::Important, TaskStatus::Pending),
            task(2, None, TaskPriority::Important, TaskStatus::Completed),
            task(3, None, TaskPriority::None, TaskStatus::Pending),
        ];

        let visible = widget_tasks(&tasks, WidgetFilter::Important);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_due_soon_widget_excludes_only_completed() {
        let tasks = vec![
            task(1, None, TaskPriority::None, TaskStatus::InProgress),
            task(2, None, TaskPriority::None, TaskStatus::Completed),
            task(3, None, TaskPriority::Important, TaskStatus::Pending),
        ];

        let visible = widget_tasks(&tasks, WidgetFilter::DueSoon);
        let ids: Vec<u32> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
