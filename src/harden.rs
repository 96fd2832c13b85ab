//! Process hardening: keep generated secrets out of core dumps.

use tracing::warn;

/// Disable core dumps for this process. Failures are logged, not fatal.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    {
        if unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } != 0 {
            warn!(error = %std::io::Error::last_os_error(), "prctl(PR_SET_DUMPABLE) failed");
        }
    }

    #[cfg(unix)]
    {
        let limit = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        if unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) } != 0 {
            warn!(error = %std::io::Error::last_os_error(), "setrlimit(RLIMIT_CORE) failed");
        }
    }
}
