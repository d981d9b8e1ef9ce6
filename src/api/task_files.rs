//! Task File Endpoints
//!
//! Attachments are the one multipart surface; everything else is JSON.

use crate::error::ApiError;
use crate::models::{Paged, TaskFile};

use super::Api;

impl Api {
    /// Files for one task, via the task id filter
    pub async fn list_task_files(&self, task_id: u32) -> Result<Paged<TaskFile>, ApiError> {
        self.get_json(&format!("/task-files/?task={task_id}")).await
    }

    pub async fn upload_task_file(
        &self,
        task_id: u32,
        file: web_sys::File,
    ) -> Result<TaskFile, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network(gloo_net::Error::GlooError(
                "failed to build form data".to_string(),
            )))?;
        let _ = form.append_with_blob("file", &file);
        let _ = form.append_with_str("task", &task_id.to_string());
        self.post_form("/task-files/", form).await
    }

    pub async fn delete_task_file(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/task-files/{id}/")).await
    }
}
