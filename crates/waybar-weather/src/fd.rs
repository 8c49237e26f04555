//! Detects a standard output that was closed before the process started.
//!
//! The Rust runtime reopens a closed fd 0-2 as `/dev/null` with `O_RDWR`
//! before `main` runs, so a `waybar-weather >&-` invocation would otherwise
//! write into `/dev/null` and succeed. Shells redirect to `/dev/null` with
//! `O_WRONLY`, which keeps that case distinguishable.

use std::io;

#[cfg(unix)]
use std::os::unix::io::RawFd;

#[cfg(unix)]
use nix::fcntl::{fcntl, FcntlArg, OFlag};
#[cfg(unix)]
use nix::sys::stat::{fstat, stat, SFlag};

/// True when `fd` is `/dev/null` opened read-write.
#[cfg(unix)]
pub(crate) fn is_substituted_null(fd: RawFd) -> nix::Result<bool> {
    let flags = OFlag::from_bits_truncate(fcntl(fd, FcntlArg::F_GETFL)?);
    if flags & OFlag::O_ACCMODE != OFlag::O_RDWR {
        return Ok(false);
    }

    let st = fstat(fd)?;
    if st.st_mode & SFlag::S_IFMT.bits() != SFlag::S_IFCHR.bits() {
        return Ok(false);
    }

    let null = stat("/dev/null")?;
    Ok(st.st_rdev == null.st_rdev)
}

/// Fail with `EBADF` if standard output was closed at startup.
#[cfg(unix)]
pub fn ensure_stdout_open() -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    match is_substituted_null(io::stdout().as_raw_fd()) {
        Ok(true) => Err(io::Error::from_raw_os_error(nix::errno::Errno::EBADF as i32)),
        Ok(false) => Ok(()),
        Err(e) => {
            log::debug!("Could not inspect stdout: {}", e);
            Ok(())
        }
    }
}

#[cfg(not(unix))]
pub fn ensure_stdout_open() -> io::Result<()> {
    Ok(())
}
