//! Schedule actions.
//!
//! Running a schedule never edits the cached copy; the authoritative list is
//! re-fetched instead.

use super::{log_error, require_text, SyncStore};
use crate::errors::SyncResult;
use crate::models::{NewSchedule, Schedule};
use crate::normalize::Normalize;
use crate::reconcile::EntityKind;

impl SyncStore {
    pub async fn fetch_schedules(&self) -> SyncResult<Vec<Schedule>> {
        let schedules = self
            .api
            .list_schedules()
            .await
            .inspect_err(log_error("fetching schedules"))?
            .normalize();

        self.state.write().await.cache.schedules.replace(schedules.clone());
        Ok(schedules)
    }

    pub async fn add_schedule(&self, schedule: NewSchedule) -> SyncResult<Schedule> {
        require_text(&schedule.frequency, "Schedule frequency")?;

        let created = self
            .api
            .create_schedule(&schedule)
            .await
            .inspect_err(log_error("adding schedule"))?
            .normalize();

        self.state.write().await.cache.schedules.insert(created.clone());
        Ok(created)
    }

    pub async fn delete_schedule(&self, id: i64) -> SyncResult<()> {
        self.api
            .delete_schedule(id)
            .await
            .inspect_err(log_error("deleting schedule"))?;

        self.state.write().await.cache.delete(EntityKind::Schedule, id);
        Ok(())
    }

    /// Run a schedule now, then re-fetch the schedule list.
    pub async fn run_schedule(&self, id: i64) -> SyncResult<Vec<Schedule>> {
        self.api
            .run_schedule(id)
            .await
            .inspect_err(log_error("running schedule"))?;

        self.fetch_schedules().await
    }

    /// Queue a schedule to run in one minute, then re-fetch the schedule list.
    pub async fn run_schedule_in_one_minute(&self, id: i64) -> SyncResult<Vec<Schedule>> {
        self.api
            .run_schedule_in_one_minute(id)
            .await
            .inspect_err(log_error("queueing schedule"))?;

        self.fetch_schedules().await
    }
}
