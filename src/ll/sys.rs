use std::ffi::CStr;
use std::io;
use libc::{c_char, c_int};

fn sys_reboot(cmd: c_int) -> c_int {
    unsafe { libc::reboot(cmd) }
}

/// Invoke reboot(2) with the given `LINUX_REBOOT_CMD_*` value. The C library supplies the
/// magic numbers. Halt, restart and power off only return if the kernel refused them.
pub fn reboot(cmd: u32) -> io::Result<()> {
    match sys_reboot(cmd as c_int) {
        -1 => Err(io::Error::last_os_error()),
        _ => Ok(()),
    }
}

/// Describe an errno value the way strerror(3) and printf's `%m` do, without the
/// `(os error N)` suffix that `io::Error` appends.
pub fn strerror(errnum: c_int) -> String {
    let mut buf = [0 as c_char; 128];
    // libc links the XSI strerror_r, which writes into `buf` instead of returning a pointer
    let rc = unsafe { libc::strerror_r(errnum, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 && buf[0] == 0 {
        return format!("Unknown error {}", errnum);
    }
    unsafe { CStr::from_ptr(buf.as_ptr()) }.to_string_lossy().into_owned()
}
