//! Client-side synchronization layer between a remote guest-record store and
//! local view state.
//!
//! [`SyncController`] owns the five remote operations (fetch-all, fetch-one,
//! create, update, delete), the validation gate in front of the mutating
//! ones, and the minimum-visible-duration contract on loading/updating
//! indicators. [`view`] holds the pure filter/sort the list screen renders
//! from. The remote store itself stays behind the [`RecordStore`] trait;
//! [`HttpRecordStore`] is the production implementation.

pub mod controller;
pub mod store;
pub mod view;

pub use controller::{
    AfterSave, Confirmation, DeleteOutcome, Indicator, SyncController, INDICATOR_FLOOR,
};
pub use store::{HttpRecordStore, RecordStore, StoreError};
pub use view::{filter_and_sort, GuestListView};
