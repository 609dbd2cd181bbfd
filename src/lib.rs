//! Restart, halt or power off a Linux system
//!
//! This crate wraps the privileged reboot(2) system call. A [`Request`] is built from the
//! command line, dispatched to a [`Kernel`] exactly once, and whatever comes back is turned
//! into a [`Report`] with the message and exit status for the user. There is no retry and no
//! confirmation. Data not written out by a preceding sync(2) is lost.

#![warn(missing_debug_implementations, rust_2018_idioms)]

#[cfg(not(target_os = "linux"))]
compile_error!("linux-reboot only supports Linux");

use std::io;

pub use reboot_abi as abi;

pub use crate::action::Action;
pub use crate::report::Report;
pub use crate::request::Request;

mod action;
mod ll;
mod report;
mod request;

/// The kernel's reboot facility
///
/// Implementations receive a `LINUX_REBOOT_CMD_*` value. For halt, restart and power off a
/// real kernel never returns on success.
pub trait Kernel {
    fn reboot(&mut self, cmd: u32) -> io::Result<()>;
}

/// reboot(2) on the running Linux kernel. Requires `CAP_SYS_BOOT`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxKernel;

impl Kernel for LinuxKernel {
    fn reboot(&mut self, cmd: u32) -> io::Result<()> {
        ll::sys::reboot(cmd)
    }
}
