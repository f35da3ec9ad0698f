//! CLI commands for crossing

pub mod check;
pub mod dispatch;
pub mod distances;
pub mod route;
