//! Core module - query types shared between the store and the CLI

mod types;

pub(crate) use types::{FilterCriteria, TimeWindow};
