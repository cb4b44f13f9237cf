//! remind - Weekly pulse of a personal journal
//!
//! Reads dated markdown journal entries, strips them down to their prose and
//! reports word, tag, question and tone statistics for the past week, with an
//! optional reflection from a local text-analysis service.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RemindError;
