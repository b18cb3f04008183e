//! Schedule endpoints.

use super::{ApiClient, NoBody};
use crate::errors::SyncResult;
use crate::models::{NewSchedule, Schedule};

impl ApiClient {
    /// GET /schedules
    pub async fn list_schedules(&self) -> SyncResult<Vec<Schedule>> {
        self.get("/schedules").await
    }

    /// POST /schedules
    pub async fn create_schedule(&self, schedule: &NewSchedule) -> SyncResult<Schedule> {
        self.post("/schedules", Some(schedule)).await
    }

    /// DELETE /schedules/{id}
    pub async fn delete_schedule(&self, id: i64) -> SyncResult<()> {
        self.delete(&format!("/schedules/{id}")).await
    }

    /// POST /schedules/{id}/run
    pub async fn run_schedule(&self, id: i64) -> SyncResult<()> {
        self.post_empty::<NoBody>(&format!("/schedules/{id}/run"), None)
            .await
    }

    /// POST /schedules/{id}/run-in-1-minute
    pub async fn run_schedule_in_one_minute(&self, id: i64) -> SyncResult<()> {
        self.post_empty::<NoBody>(&format!("/schedules/{id}/run-in-1-minute"), None)
            .await
    }
}
