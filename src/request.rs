//! Reboot request
//!
//! A request is built from the command line and handed to the kernel once. The kernel either
//! takes the system down, in which case nothing after the call runs, or returns control with
//! an error that is turned into a report for the user.

use std::ffi::OsStr;
use log::{debug, info, warn};

use crate::action::Action;
use crate::report::Report;
use crate::Kernel;

/// Request for a single system-level action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    action: Action,
}

impl Request {
    pub fn new(action: Action) -> Request {
        Request { action }
    }

    /// Create a request from a full argument vector, program name included. Only the first
    /// argument after the program name is looked at.
    pub fn from_args<I>(args: I) -> Request
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let arg = args.into_iter().nth(1);
        Request::new(Action::from_arg(arg.as_ref().map(AsRef::<OsStr>::as_ref)))
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Hand the request to the kernel. Returns only if the kernel returned.
    pub fn dispatch<K: Kernel>(&self, kernel: &mut K) -> Report {
        let cmd = self.action.cmd();
        info!("Requesting {}", self.action);
        debug!("reboot({:#010x})", cmd);
        match kernel.reboot(cmd) {
            Ok(()) => {
                warn!("reboot({:#010x}) returned without an error", cmd);
                Report::new(0)
            }
            Err(err) => {
                debug!("reboot({:#010x}) failed: {}", cmd, err);
                Report::from_error(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Refusing(Vec<u32>);

    impl Kernel for Refusing {
        fn reboot(&mut self, cmd: u32) -> io::Result<()> {
            self.0.push(cmd);
            Err(io::Error::from_raw_os_error(libc::EPERM))
        }
    }

    #[test]
    fn program_name_is_skipped() {
        assert_eq!(Request::from_args(&["P"]).action(), Action::Halt);
        assert_eq!(Request::from_args(&["reboot", "P"]).action(), Action::PowerOff);
        assert_eq!(Request::from_args(Vec::<String>::new()).action(), Action::Halt);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let request = Request::from_args(&["reboot", "r", "P", "x"]);
        assert_eq!(request.action(), Action::Restart);
    }

    #[test]
    fn dispatch_calls_kernel_once() {
        let mut kernel = Refusing(Vec::new());
        let report = Request::new(Action::PowerOff).dispatch(&mut kernel);
        assert_eq!(kernel.0, vec![Action::PowerOff.cmd()]);
        assert_eq!(report.errno(), libc::EPERM);
    }
}
