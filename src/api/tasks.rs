//! Task Endpoints

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Paged, Task, TaskPriority, TaskStatus};

use super::Api;

/// Form payload for creating or fully updating a task
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub category: Option<u32>,
    pub description: String,
    pub priority: TaskPriority,
    /// `None` is sent as an explicit null to clear the date
    pub due_date: Option<String>,
}

#[derive(Serialize)]
struct StatusPatch<'a> {
    status: &'a str,
}

impl Api {
    pub async fn list_tasks(&self) -> Result<Paged<Task>, ApiError> {
        self.get_json("/tasks/").await
    }

    /// Server-side "due soon" filter used by the dashboard widget
    pub async fn due_soon_tasks(&self) -> Result<Paged<Task>, ApiError> {
        self.get_json("/tasks/due-soon/").await
    }

    pub async fn get_task(&self, id: u32) -> Result<Task, ApiError> {
        self.get_json(&format!("/tasks/{id}/")).await
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.post_json("/tasks/", draft).await
    }

    /// Full update from the edit form
    pub async fn update_task(&self, id: u32, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.put_json(&format!("/tasks/{id}/"), draft).await
    }

    /// Partial update from the detail view's status dropdown
    pub async fn set_task_status(&self, id: u32, status: TaskStatus) -> Result<Task, ApiError> {
        self.patch_json(
            &format!("/tasks/{id}/"),
            &StatusPatch {
                status: status.as_str(),
            },
        )
        .await
    }

    pub async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/tasks/{id}/")).await
    }
}
