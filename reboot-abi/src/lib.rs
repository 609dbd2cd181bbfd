//! Linux reboot(2) ABI
//!
//! Magic numbers and commands of the `reboot` system call, as found in the kernel header
//! `linux/reboot.h`. The raw syscall checks both magic numbers before it looks at the
//! command; the C library's `reboot(int)` wrapper fills them in itself.

#![no_std]

/// First magic number, must always be given.
pub const LINUX_REBOOT_MAGIC1: u32 = 0xfee1_dead;

/// Second magic number (Linus' birthday in hex). The alternates below are accepted too.
pub const LINUX_REBOOT_MAGIC2: u32 = 0x2812_1969;
pub const LINUX_REBOOT_MAGIC2A: u32 = 0x0512_1996;
pub const LINUX_REBOOT_MAGIC2B: u32 = 0x1604_1998;
pub const LINUX_REBOOT_MAGIC2C: u32 = 0x2011_2000;

/// Restart system using default command and mode.
pub const LINUX_REBOOT_CMD_RESTART: u32 = 0x0123_4567;
/// Stop OS and give system control to ROM monitor, if any.
pub const LINUX_REBOOT_CMD_HALT: u32 = 0xcdef_0123;
/// Ctrl-Alt-Del sequence causes RESTART command.
pub const LINUX_REBOOT_CMD_CAD_ON: u32 = 0x89ab_cdef;
/// Ctrl-Alt-Del sequence sends SIGINT to init task.
pub const LINUX_REBOOT_CMD_CAD_OFF: u32 = 0x0000_0000;
/// Stop OS and remove all power from system, if possible.
pub const LINUX_REBOOT_CMD_POWER_OFF: u32 = 0x4321_fedc;
/// Restart system using given command string.
pub const LINUX_REBOOT_CMD_RESTART2: u32 = 0xa1b2_c3d4;
/// Suspend system using software suspend if compiled in.
pub const LINUX_REBOOT_CMD_SW_SUSPEND: u32 = 0xd000_fce2;
/// Restart system using a previously loaded Linux kernel.
pub const LINUX_REBOOT_CMD_KEXEC: u32 = 0x4558_4543;
