//! Outcome reporting
//!
//! reboot(2) only hands control back when it did not do its job. Whatever it left in errno
//! becomes both the stderr line and the exit status.

use std::fmt;
use std::io::{self, Write};
use libc::{c_int, EIO};
use log::debug;

use crate::ll::sys;

/// Result of a returned reboot(2) call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    errno: c_int,
}

impl Report {
    /// Report the given errno value. Zero means the call returned without an error.
    pub fn new(errno: c_int) -> Report {
        Report { errno }
    }

    /// Report a failed call. Errors that carry no OS error number count as `EIO`.
    pub fn from_error(err: &io::Error) -> Report {
        Report::new(err.raw_os_error().unwrap_or(EIO))
    }

    pub fn errno(&self) -> c_int {
        self.errno
    }

    pub fn is_success(&self) -> bool {
        self.errno == 0
    }

    /// Process exit code: the negated errno. The OS keeps the low 8 bits, so `EPERM` exits
    /// with status 255.
    pub fn exit_code(&self) -> i32 {
        self.errno.wrapping_neg()
    }

    /// Write the report line to `out`. A failed write is dropped, as the exit status still
    /// has to reach the caller.
    pub fn emit<W: Write>(&self, out: &mut W) {
        if let Err(err) = writeln!(out, "{}", self) {
            debug!("Failed to write report: {}", err);
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reboot: {}", sys::strerror(self.errno))
    }
}
