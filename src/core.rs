//! Filesystem and process plumbing used by the navigation controller and the
//! preview resolver. Nothing in here touches the terminal.

pub mod archive;
pub mod cursor;
pub mod finder;
pub mod fs_ops;
pub mod launch;
pub mod listing;
pub mod proc;
