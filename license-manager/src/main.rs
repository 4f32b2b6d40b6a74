//! TrackSuite license manager
//!
//! Usage:
//!   license-manager --license <LICENSE-KEY>
//!   license-manager --trial <TRIAL-KEY>
//!   license-manager --status
//!   license-manager --deactivate
//!
//! Set `RUST_LOG=debug` to trace every authority call on stderr.

use std::io::{self, Write};
use std::process;
use license_manager::{exit_code, run};
use tracing_subscriber::EnvFilter;
use tracksuite_license::{LexActivator, ProductIdentity};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let mut authority = LexActivator::new();
    let identity = ProductIdentity::embedded();

    let result = {
        let mut stdout = io::stdout().lock();
        run(&mut authority, &identity, std::env::args_os(), &mut stdout)
    };
    let code = match result {
        Ok(exit) => exit.code(),
        Err(err) => {
            eprintln!("{err}");
            exit_code(&err)
        }
    };

    let _ = io::stdout().flush();
    process::exit(code);
}
