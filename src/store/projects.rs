//! Project actions.

use super::{log_error, require_text, SyncStore};
use crate::errors::SyncResult;
use crate::models::{NewProject, Project, ProjectUpdate};
use crate::normalize::Normalize;
use crate::reconcile::EntityKind;

impl SyncStore {
    /// Replace the cached projects with the server's list.
    pub async fn fetch_projects(&self) -> SyncResult<Vec<Project>> {
        let projects = self
            .api
            .list_projects()
            .await
            .inspect_err(log_error("fetching projects"))?
            .normalize();

        self.state.write().await.cache.projects.replace(projects.clone());
        Ok(projects)
    }

    /// Read one project and refresh its cached copy if present.
    pub async fn fetch_project(&self, id: i64) -> SyncResult<Project> {
        let project = self
            .api
            .get_project(id)
            .await
            .inspect_err(log_error("fetching project"))?
            .normalize();

        self.state.write().await.cache.projects.upsert(project.clone());
        Ok(project)
    }

    pub async fn add_project(&self, project: NewProject) -> SyncResult<Project> {
        require_text(&project.name, "Project name")?;
        require_text(&project.domain, "Project domain")?;

        let created = self
            .api
            .create_project(&project)
            .await
            .inspect_err(log_error("adding project"))?
            .normalize();

        self.state.write().await.cache.projects.insert(created.clone());
        tracing::info!("Added project {} ({})", created.id, created.domain);
        Ok(created)
    }

    pub async fn update_project(&self, id: i64, update: ProjectUpdate) -> SyncResult<Project> {
        let updated = self
            .api
            .update_project(id, &update)
            .await
            .inspect_err(log_error("updating project"))?
            .normalize();

        self.state.write().await.cache.projects.upsert(updated.clone());
        Ok(updated)
    }

    /// Delete a project and cascade to its keywords, rank entries and schedules.
    pub async fn delete_project(&self, id: i64) -> SyncResult<()> {
        self.api
            .delete_project(id)
            .await
            .inspect_err(log_error("deleting project"))?;

        self.state.write().await.cache.delete(EntityKind::Project, id);
        tracing::info!("Deleted project {}", id);
        Ok(())
    }

    /// Flip a project's active flag server-side and take the returned state.
    pub async fn toggle_project_status(&self, id: i64) -> SyncResult<Project> {
        let updated = self
            .api
            .toggle_project_status(id)
            .await
            .inspect_err(log_error("toggling project status"))?
            .normalize();

        self.state.write().await.cache.projects.upsert(updated.clone());
        Ok(updated)
    }
}
