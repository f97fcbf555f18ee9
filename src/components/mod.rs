//! Reusable view components shared by pages.

pub mod nav_bar;
pub mod page_errors;
pub mod workspace_row;
