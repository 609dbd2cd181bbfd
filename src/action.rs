//! Action selection
//!
//! The command line names the action with a single character: the first byte of the first
//! argument. Everything after that byte, and every further argument, is ignored.

use std::ffi::OsStr;
use std::fmt;
use std::os::unix::ffi::OsStrExt;

use reboot_abi::{LINUX_REBOOT_CMD_HALT, LINUX_REBOOT_CMD_POWER_OFF, LINUX_REBOOT_CMD_RESTART};

/// What to do with the running system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Stop the OS and return to the ROM monitor, if any
    Halt,
    /// Stop the OS and remove power, if possible
    PowerOff,
    /// Restart with the default command and mode
    Restart,
}

impl Action {
    /// Select an action from the first command-line argument. `P` powers off, `r` restarts,
    /// anything else (including no argument or an empty one) halts.
    pub fn from_arg(arg: Option<&OsStr>) -> Action {
        match arg.and_then(|arg| arg.as_bytes().first()) {
            Some(b'P') => Action::PowerOff,
            Some(b'r') => Action::Restart,
            _ => Action::Halt,
        }
    }

    /// The `LINUX_REBOOT_CMD_*` value passed to reboot(2)
    pub fn cmd(self) -> u32 {
        match self {
            Action::Halt => LINUX_REBOOT_CMD_HALT,
            Action::PowerOff => LINUX_REBOOT_CMD_POWER_OFF,
            Action::Restart => LINUX_REBOOT_CMD_RESTART,
        }
    }
}

impl Default for Action {
    fn default() -> Action {
        Action::Halt
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Halt => "halt",
            Action::PowerOff => "power off",
            Action::Restart => "restart",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    fn select(arg: &str) -> Action {
        Action::from_arg(Some(OsStr::new(arg)))
    }

    #[test]
    fn no_argument_halts() {
        assert_eq!(Action::from_arg(None), Action::Halt);
        assert_eq!(Action::default(), Action::Halt);
    }

    #[test]
    fn first_byte_selects() {
        assert_eq!(select("P"), Action::PowerOff);
        assert_eq!(select("Poweroff"), Action::PowerOff);
        assert_eq!(select("r"), Action::Restart);
        assert_eq!(select("reboot"), Action::Restart);
    }

    #[test]
    fn anything_else_halts() {
        for arg in &["", "h", "halt", "p", "R", "-r", "--help", " r", "xP"] {
            assert_eq!(select(arg), Action::Halt, "argument {:?}", arg);
        }
    }

    #[test]
    fn non_utf8_argument_is_read_by_first_byte() {
        let restart = OsString::from_vec(vec![b'r', 0xff, 0xfe]);
        assert_eq!(Action::from_arg(Some(restart.as_os_str())), Action::Restart);
        let garbage = OsString::from_vec(vec![0xff, b'P']);
        assert_eq!(Action::from_arg(Some(garbage.as_os_str())), Action::Halt);
    }

    #[test]
    fn commands_map_to_kernel_values() {
        assert_eq!(Action::Halt.cmd(), 0xcdef_0123);
        assert_eq!(Action::PowerOff.cmd(), 0x4321_fedc);
        assert_eq!(Action::Restart.cmd(), 0x0123_4567);
    }
}
