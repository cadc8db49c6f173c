//! HTTP proxy that reads and increments like counts of Webflow CMS collection items
//! while keeping the CMS API token on the server.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
