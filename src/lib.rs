//! HRMS Lite: employee records and daily attendance over HTTP.

pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod routes;
pub mod utils;
