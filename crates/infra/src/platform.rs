// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific timestamp lookups so the extractor
//! stays free of conditional compilation.

use std::{fs::Metadata, io, time::SystemTime};

// ============================================================================
// Creation Time
// ============================================================================

/// Creation time of the file described by `meta`.
///
/// Uses the birth time where the platform and filesystem report one. On Unix
/// filesystems without birth time support this falls back to the inode
/// status-change time, which is what `st_ctime` reports there.
pub fn creation_time(meta: &Metadata) -> io::Result<SystemTime> {
    match meta.created() {
        Ok(time) => Ok(time),
        #[cfg(unix)]
        Err(_) => Ok(status_change_time(meta)),
        #[cfg(not(unix))]
        Err(err) => Err(err),
    }
}

#[cfg(unix)]
fn status_change_time(meta: &Metadata) -> SystemTime {
    use std::{os::unix::fs::MetadataExt, time::Duration};

    let nanos = u32::try_from(meta.ctime_nsec()).unwrap_or(0);
    match u64::try_from(meta.ctime()) {
        Ok(secs) => SystemTime::UNIX_EPOCH + Duration::new(secs, nanos),
        Err(_) => {
            let before = Duration::new(meta.ctime().unsigned_abs(), 0);
            SystemTime::UNIX_EPOCH
                .checked_sub(before)
                .unwrap_or(SystemTime::UNIX_EPOCH)
                + Duration::new(0, nanos)
        }
    }
}

// ============================================================================
// Modification / Access Time
// ============================================================================

/// Last content modification time.
pub fn modification_time(meta: &Metadata) -> io::Result<SystemTime> {
    meta.modified()
}

/// Last access time. Mount options such as `noatime` make this stale, not absent.
pub fn access_time(meta: &Metadata) -> io::Result<SystemTime> {
    meta.accessed()
}
