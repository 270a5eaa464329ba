// Service module exports

pub mod calendar;
pub mod planner;
pub mod settings;
