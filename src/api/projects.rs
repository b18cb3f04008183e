//! `/projects` endpoints.

use super::{ApiClient, NoBody};
use crate::errors::SyncResult;
use crate::models::{NewProject, Project, ProjectUpdate};

impl ApiClient {
    /// GET /projects
    pub async fn list_projects(&self) -> SyncResult<Vec<Project>> {
        self.get("/projects").await
    }

    /// POST /projects
    pub async fn create_project(&self, project: &NewProject) -> SyncResult<Project> {
        self.post("/projects", Some(project)).await
    }

    /// GET /projects/{id}
    pub async fn get_project(&self, id: i64) -> SyncResult<Project> {
        self.get(&format!("/projects/{id}")).await
    }

    /// PUT /projects/{id}
    pub async fn update_project(&self, id: i64, update: &ProjectUpdate) -> SyncResult<Project> {
        self.put(&format!("/projects/{id}"), Some(update)).await
    }

    /// DELETE /projects/{id}
    pub async fn delete_project(&self, id: i64) -> SyncResult<()> {
        self.delete(&format!("/projects/{id}")).await
    }

    /// PUT /projects/{id}/toggle-status
    pub async fn toggle_project_status(&self, id: i64) -> SyncResult<Project> {
        self.put::<NoBody, _>(&format!("/projects/{id}/toggle-status"), None)
            .await
    }
}
