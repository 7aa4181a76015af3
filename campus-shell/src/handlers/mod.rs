//! Message handlers for [`DashboardShell`](crate::DashboardShell)
//!
//! Each file groups the handlers for one concern. All handlers are
//! `impl DashboardShell` methods returning the effects the host should
//! execute.

mod navigation;
mod reorder;
mod resolution;
mod search;
