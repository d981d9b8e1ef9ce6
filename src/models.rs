//! Frontend Models
//!
//! Data structures matching the TaskFlow API entities, plus the generic
//! paged collection the list views accumulate into.

use serde::{Deserialize, Serialize};

/// Authenticated user (dj-rest-auth user shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub pk: u32,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Successful login payload. Token fields are optional: under the cookie
/// flavor the tokens travel in Set-Cookie headers, not the body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// User-defined task category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub title: String,
}

/// Task priority choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    #[default]
    None,
    Important,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::None => "None",
            TaskPriority::Important => "Important",
        }
    }
}

/// Task status choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Human-readable label shown in lists and dropdowns
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// API wire value, used for PATCH bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Task entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<u32>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(default)]
    pub days_left: Option<i64>,
}

/// File attached to a task. `file` is the download URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFile {
    pub id: u32,
    pub task: u32,
    pub file: String,
}

/// Entities addressable by numeric id, for dedup in paged collections
pub trait HasId {
    fn id(&self) -> u32;
}

impl HasId for Category {
    fn id(&self) -> u32 {
        self.id
    }
}

impl HasId for Task {
    fn id(&self) -> u32 {
        self.id
    }
}

impl HasId for TaskFile {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Paged collection: a results array plus an opaque continuation URL.
///
/// `results` is unique by id; `next == None` means the listing is exhausted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paged<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            next: None,
        }
    }
}

impl<T: HasId> Paged<T> {
    /// Fold a freshly fetched page into this collection.
    ///
    /// Existing results keep their relative order; new items are appended in
    /// response order, skipping ids already present. The continuation is
    /// always replaced with the incoming one, including `None`.
    pub fn merge_page(&mut self, page: Paged<T>) {
        self.next = page.next;
        for item in page.results {
            if !self.results.iter().any(|existing| existing.id() == item.id()) {
                self.results.push(item);
            }
        }
    }

    /// Drop the entry with the given id, if present
    pub fn remove(&mut self, id: u32) {
        self.results.retain(|item| item.id() != id);
    }

    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            description: String::new(),
            category: None,
            priority: TaskPriority::None,
            status: TaskStatus::Pending,
            due_date: None,
            is_overdue: false,
            days_left: None,
        }
    }

    fn paged(ids: &[u32], next: Option<&str>) -> Paged<Task> {
        Paged {
            results: ids.iter().copied().map(task).collect(),
            next: next.map(String::from),
        }
    }

    #[test]
    fn test_merge_deduplicates_overlapping_page() {
        let mut collection = paged(&[1, 2], Some("page2"));
        collection.merge_page(paged(&[2, 3], None));

        let ids: Vec<u32> = collection.results.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(collection.next, None);
    }

    #[test]
    fn test_merge_preserves_prior_order_then_response_order() {
        let mut collection = paged(&[5, 1, 9], Some("next"));
        collection.merge_page(paged(&[7, 1, 3], Some("more")));

        let ids: Vec<u32> = collection.results.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 1, 9, 7, 3]);
        assert_eq!(collection.next.as_deref(), Some("more"));
    }

    #[test]
    fn test_merge_empty_page_only_updates_next() {
        let mut collection = paged(&[1, 2], Some("page2"));
        collection.merge_page(paged(&[], None));

        assert_eq!(collection.results.len(), 2);
        assert_eq!(collection.next, None);
        assert!(!collection.has_more());
    }

    #[test]
    fn test_repeated_merges_never_duplicate_ids() {
        let mut collection = paged(&[1, 2], Some("p2"));
        collection.merge_page(paged(&[2, 3], Some("p3")));
        collection.merge_page(paged(&[3, 1, 4], None));

        let ids: Vec<u32> = collection.results.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_filters_by_id() {
        let mut collection = paged(&[4, 5], None);
        collection.remove(5);

        let ids: Vec<u32> = collection.results.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4]);

        // removing an absent id is a no-op
        collection.remove(99);
        assert_eq!(collection.results.len(), 1);
    }

    #[test]
    fn test_status_wire_format() {
        let parsed: TaskStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(parsed, TaskStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_priority_wire_format() {
        let parsed: TaskPriority = serde_json::from_str("\"important\"").unwrap();
        assert_eq!(parsed, TaskPriority::Important);
        assert_eq!(
            serde_json::to_string(&TaskPriority::None).unwrap(),
            "\"none\""
        );
    }

    #[test]
    fn test_task_tolerates_missing_optional_fields() {
        let task: Task =
            serde_json::from_str(r#"{"id": 7, "title": "Pay rent", "category": null}"#).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::None);
        assert!(task.due_date.is_none());
        assert!(!task.is_overdue);
    }

    #[test]
    fn test_paged_deserializes_without_next() {
        let page: Paged<Category> =
            serde_json::from_str(r#"{"results": [{"id": 1, "title": "home"}]}"#).unwrap();
        assert_eq!(page.results.len(), 1);
        assert!(page.next.is_none());
    }
}
