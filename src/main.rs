//! Unsafe halt command
//!
//! `P` powers off, `r` restarts, anything else halts and returns to the ROM monitor, if any.
//! All data not written out by a preceding sync(2) is lost.

use std::env;
use std::io;
use std::process;

use linux_reboot::{LinuxKernel, Request};

fn main() {
    env_logger::init();
    let request = Request::from_args(env::args_os());
    let report = request.dispatch(&mut LinuxKernel);
    report.emit(&mut io::stderr());
    process::exit(report.exit_code());
}
