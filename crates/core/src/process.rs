//! Process introspection: memory snapshot.
//!
//! Values that cannot be read on the current platform are reported as `0`
//! rather than failing, so callers never need to handle an error.

use serde::Serialize;

/// Memory usage of the current process, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    /// Resident set size.
    pub rss_bytes: u64,
    /// Total virtual address space.
    pub virtual_bytes: u64,
    /// Peak resident set size since process start.
    pub peak_rss_bytes: u64,
}

impl MemoryUsage {
    /// Take a snapshot of the current process memory usage.
    pub fn snapshot() -> Self {
        let (virtual_bytes, rss_bytes) = read_statm().unwrap_or((0, 0));
        Self {
            rss_bytes,
            virtual_bytes,
            peak_rss_bytes: peak_rss_bytes(),
        }
    }
}

/// Read `(virtual, resident)` sizes from `/proc/self/statm`.
fn read_statm() -> Option<(u64, u64)> {
    let raw = std::fs::read_to_string("/proc/self/statm").ok()?;
    let (size, resident) = parse_statm(&raw)?;
    let page = page_size();
    Some((size * page, resident * page))
}

/// Parse the first two fields (total pages, resident pages) of a statm line.
fn parse_statm(raw: &str) -> Option<(u64, u64)> {
    let mut fields = raw.split_whitespace();
    let size = fields.next()?.parse().ok()?;
    let resident = fields.next()?.parse().ok()?;
    Some((size, resident))
}

fn page_size() -> u64 {
    #[cfg(unix)]
    {
        // Safety: sysconf has no preconditions.
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if size > 0 {
            return size as u64;
        }
    }
    4096
}

fn peak_rss_bytes() -> u64 {
    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut usage = MaybeUninit::<libc::rusage>::uninit();
        // Safety: getrusage fills the struct when it returns 0.
        let ret = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
        if ret == 0 {
            let usage = unsafe { usage.assume_init() };
            let max_rss = usage.ru_maxrss.max(0) as u64;
            // Linux reports kilobytes, macOS reports bytes.
            return if cfg!(target_os = "macos") {
                max_rss
            } else {
                max_rss * 1024
            };
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_statm_line() {
        assert_eq!(parse_statm("5120 1024 300 10 0 900 0\n"), Some((5120, 1024)));
    }

    #[test]
    fn rejects_truncated_statm() {
        assert_eq!(parse_statm("5120"), None);
        assert_eq!(parse_statm(""), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn snapshot_reports_resident_memory_on_linux() {
        let usage = MemoryUsage::snapshot();
        assert!(usage.rss_bytes > 0);
        assert!(usage.virtual_bytes >= usage.rss_bytes);
        assert!(usage.peak_rss_bytes > 0);
    }

    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_value(MemoryUsage {
            rss_bytes: 1,
            virtual_bytes: 2,
            peak_rss_bytes: 3,
        })
        .unwrap();
        assert_eq!(json["rss_bytes"], 1);
        assert_eq!(json["virtual_bytes"], 2);
        assert_eq!(json["peak_rss_bytes"], 3);
    }
}
