//! User interface and presentation
//!
//! Presenters format ship notifications, keeping presentation out of the
//! ship classes and the dispatch logic.

pub mod presenters;
