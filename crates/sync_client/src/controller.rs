use std::time::Duration;

use shared::{
    domain::{GuestDraft, GuestId, GuestRecord},
    error::SyncError,
};
use tokio::time::{sleep, Instant};
use tracing::{info, warn};

use crate::store::{RecordStore, StoreError};

/// Minimum time a loading/updating indicator stays visible, measured from
/// the start of the remote call. Calls slower than this add no padding.
/// A UX contract against indicator flicker on fast networks, not a tunable.
pub const INDICATOR_FLOOR: Duration = Duration::from_millis(1000);

/// What the owning view is currently showing for this controller. Doubles as
/// the "in progress" flag that disables re-submission while a call is out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    #[default]
    Idle,
    Loading,
    Updating,
}

/// Navigation signal carried by successful update/delete: the caller returns
/// to the list view, which must refetch and re-show its own loading floor on
/// arrival even if the data in memory is still fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSave {
    ReloadList,
}

/// The explicit confirmation step required before a delete is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmation was declined; no network call was made.
    Cancelled,
    Deleted(AfterSave),
}

/// Mediates between a [`RecordStore`] and the local state of one view.
///
/// Each navigation to a screen constructs its own controller; methods take
/// `&mut self`, so a view can never have two operations in flight at once.
/// There is no cancellation (once issued, an operation runs to completion
/// or failure) and no automatic retry anywhere.
pub struct SyncController<S> {
    store: S,
    records: Vec<GuestRecord>,
    indicator: Indicator,
}

impl<S: RecordStore> SyncController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            records: Vec::new(),
            indicator: Indicator::Idle,
        }
    }

    /// The locally materialized set from the last successful fetch.
    pub fn records(&self) -> &[GuestRecord] {
        &self.records
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn is_busy(&self) -> bool {
        self.indicator != Indicator::Idle
    }

    /// Fetch the complete current set, holding the loading indicator for at
    /// least [`INDICATOR_FLOOR`]. Failure is terminal for this attempt; the
    /// caller shows the [`SyncError::FetchFailed`] message, no retry.
    pub async fn fetch_all(&mut self) -> Result<&[GuestRecord], SyncError> {
        self.indicator = Indicator::Loading;
        let started = Instant::now();
        let result = self.store.list().await;
        hold_indicator_floor(started).await;
        self.indicator = Indicator::Idle;

        match result {
            Ok(records) => {
                info!(count = records.len(), "guest list fetched");
                self.records = records;
                Ok(&self.records)
            }
            Err(err) => {
                warn!(error = %err, "guest list fetch failed");
                Err(SyncError::FetchFailed)
            }
        }
    }

    /// Fetch one record by id, unless the caller already holds it (passed
    /// forward from the list view), in which case no network call is made
    /// and no indicator is shown.
    pub async fn fetch_one(
        &mut self,
        id: &GuestId,
        known: Option<GuestRecord>,
    ) -> Result<GuestRecord, SyncError> {
        if let Some(record) = known {
            if record.id == *id {
                return Ok(record);
            }
        }

        self.indicator = Indicator::Loading;
        let started = Instant::now();
        let result = self.store.get(id).await;
        hold_indicator_floor(started).await;
        self.indicator = Indicator::Idle;

        match result {
            Ok(record) => Ok(record),
            Err(StoreError::NotFound) => Err(SyncError::NotFound),
            Err(err) => {
                warn!(guest_id = %id, error = %err, "guest fetch failed");
                Err(SyncError::FetchFailed)
            }
        }
    }

    /// Validate and persist a new guest. Validation failures surface before
    /// any network call. On success the caller navigates back to the list.
    pub async fn create(&mut self, draft: &GuestDraft) -> Result<GuestRecord, SyncError> {
        let fields = draft.normalize()?;

        self.indicator = Indicator::Updating;
        let result = self.store.create(&fields).await;
        self.indicator = Indicator::Idle;

        match result {
            Ok(record) => {
                info!(guest_id = %record.id, "guest created");
                Ok(record)
            }
            Err(StoreError::DuplicateEmail) => Err(SyncError::DuplicateEmail),
            Err(err) => {
                warn!(error = %err, "guest create failed");
                Err(SyncError::CreateFailed)
            }
        }
    }

    /// Full replacement of the mutable fields of `id`, with the same
    /// validation as create and the indicator floor on the updating state.
    pub async fn update(
        &mut self,
        id: &GuestId,
        draft: &GuestDraft,
    ) -> Result<(GuestRecord, AfterSave), SyncError> {
        let fields = draft.normalize()?;

        self.indicator = Indicator::Updating;
        let started = Instant::now();
        let result = self.store.update(id, &fields).await;
        hold_indicator_floor(started).await;
        self.indicator = Indicator::Idle;

        match result {
            Ok(record) => {
                info!(guest_id = %record.id, "guest updated");
                Ok((record, AfterSave::ReloadList))
            }
            Err(StoreError::DuplicateEmail) => Err(SyncError::DuplicateEmail),
            Err(err) => {
                warn!(guest_id = %id, error = %err, "guest update failed");
                Err(SyncError::UpdateFailed)
            }
        }
    }

    /// Irreversibly delete `id`. A declined confirmation issues no network
    /// call. On failure the record is untouched and the caller stays on the
    /// detail view with its state intact.
    pub async fn delete(
        &mut self,
        id: &GuestId,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, SyncError> {
        if confirmation == Confirmation::Declined {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.indicator = Indicator::Updating;
        let result = self.store.delete(id).await;
        self.indicator = Indicator::Idle;

        match result {
            Ok(()) => {
                info!(guest_id = %id, "guest deleted");
                Ok(DeleteOutcome::Deleted(AfterSave::ReloadList))
            }
            Err(err) => {
                warn!(guest_id = %id, error = %err, "guest delete failed");
                Err(SyncError::DeleteFailed)
            }
        }
    }
}

async fn hold_indicator_floor(started: Instant) {
    let elapsed = started.elapsed();
    if elapsed < INDICATOR_FLOOR {
        sleep(INDICATOR_FLOOR - elapsed).await;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
