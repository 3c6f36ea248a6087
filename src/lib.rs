//! A terminal viewer for delimited text tables with click-to-sort columns.
//!
//! Each input file becomes one on-screen table. Clicking a column header
//! sorts that table by that column; clicking it again reverses the order.
//! Numeric columns compare numerically, everything else compares with
//! Russian collation rules.

#![warn(rust_2018_idioms)]
#[allow(unused_imports)]
#[cfg(feature = "log")]
#[macro_use]
extern crate log;

pub mod utils {
    pub mod logging;
    pub mod strings;
}
pub mod app;
pub mod canvas;
pub mod data;
pub mod event;
pub mod options;
pub mod table;
