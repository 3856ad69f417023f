//! Antpath: the library
//!
//! Decides whether filesystem-like path strings are matched by NAnt-style
//! glob patterns (`*`, `?`, `**`), by translating each pattern to a
//! regular expression. On top of the single-pattern matcher sit filesets
//! (include/exclude pattern lists applied together) and a directory
//! scanner that walks a tree and reports the paths a fileset selects. The
//! `antpath` binary is a thin front end over the same modules.
//!
//! Start with [`pattern::matches`] for one-off checks, [`pattern::Pattern`]
//! when a pattern is matched many times, and [`fileset::FileSet`] plus
//! [`scan::scan`] for include/exclude selection over a directory tree.

#![forbid(
    clippy::pedantic,
    clippy::nursery,
    deprecated,
    clippy::option_unwrap_used,
    clippy::result_unwrap_used,
)]
#![deny(unsafe_code, clippy::missing_const_for_fn)]
#![allow(clippy::default_trait_access, clippy::cognitive_complexity)]

#[macro_use]
extern crate clap;
#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

pub mod cli;
pub mod config;
pub mod error;
pub mod fileset;
pub mod pattern;
pub mod run;
pub mod scan;

pub use crate::fileset::FileSet;
pub use crate::pattern::{build_regex, forwardify_slashes, matches, matches_ignore_case, Pattern};
pub use crate::run::run;
