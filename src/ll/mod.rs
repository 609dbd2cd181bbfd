//! Low-level kernel communication.

pub mod sys;
