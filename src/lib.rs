//! `foliogen` - Static portfolio page generator for data-analysis projects
//!
//! This library turns a project folder of visualization images, an optional
//! `project_config.json`, and an optional dashboard document into a single
//! self-contained portfolio project page.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod page;
pub mod scan;
