//! Category Endpoints

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Category, Paged};

use super::Api;

#[derive(Serialize)]
struct CreateCategoryArgs<'a> {
    title: &'a str,
}

impl Api {
    pub async fn list_categories(&self) -> Result<Paged<Category>, ApiError> {
        self.get_json("/categories/").await
    }

    pub async fn create_category(&self, title: &str) -> Result<Category, ApiError> {
        self.post_json("/categories/", &CreateCategoryArgs { title })
            .await
    }

    pub async fn delete_category(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("/categories/{id}/")).await
    }
}
