// src/lib.rs — Library root for findash

pub mod api;
pub mod chart;
pub mod cli;
pub mod dashboard;
pub mod data;
pub mod infra;
