//! Process runtime: picking and starting an execution mode

pub mod modes;
