//! quill - launcher for the bundled platform-specific quill binary.
//!
//! Installed next to one prebuilt binary per supported platform. Picks the
//! right one for this host, makes sure it is executable, and runs it with
//! every argument and stream passed through untouched. The argument vector
//! is opaque payload for the delegated binary; the launcher itself parses
//! nothing, so `--help` and friends belong to the real CLI.

use std::env;
use std::ffi::OsString;
use std::process;

use quill_launcher::LauncherError;
use quill_launcher::launch;
use quill_launcher::runtime::RealRuntime;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let runtime = RealRuntime;
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    match launch::run(&runtime, &args) {
        Ok(code) => process::exit(code),
        Err(err) => {
            match err.downcast_ref::<LauncherError>() {
                Some(launcher_err) => {
                    eprintln!("Error: {}", launcher_err);
                    if let Some(remedy) = launcher_err.remediation() {
                        eprintln!("{}", remedy);
                    }
                    process::exit(launcher_err.exit_code());
                }
                None => {
                    eprintln!("Error: {:#}", err);
                    process::exit(1);
                }
            }
        }
    }
}
