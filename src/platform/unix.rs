//! Unix (macOS, Linux) platform specifics.

pub const HOSTS_PATH: &str = "/etc/hosts";

/// Resolver cache flush: directory services first, then mDNSResponder.
pub const FLUSH_STEPS: &[&[&str]] = &[
    &["sudo", "dscacheutil", "-flushcache"],
    &["sudo", "killall", "-HUP", "mDNSResponder"],
];

/// Effective uid is root.
pub fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}
