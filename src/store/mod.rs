//! Task record store
//!
//! Task records are plain files, one per tracked entry, somewhere under a
//! records root. The store finds them and narrows them down by time
//! window, project and tag.

pub(crate) mod record;
mod scan;

pub(crate) use record::TaskRecord;
pub(crate) use scan::RecordStore;
