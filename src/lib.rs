//! laptop-brick - block distracting sites in the hosts file while a smart plug is on.

pub mod blocklist;
pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod monitor;
pub mod platform;
pub mod watcher;
