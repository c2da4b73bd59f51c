//! Discovery of the agent's runtime files.
//!
//! The agent publishes a shared secret and a PID file under a runtime
//! directory resolved from the environment: `$XDG_RUNTIME_DIR/logflux/`
//! first, then `$HOME/.logflux/runtime/`, then a fixed temporary path.
//! Resolution itself is a pure function of those inputs; the environment is
//! read only in the thin public wrappers.

use std::env;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::ClientError;

const SECRET_FILE: &str = "agent.secret";
const PID_FILE: &str = "agent.pid";
const FALLBACK_RUNTIME_DIR: &str = "/tmp/.logflux-runtime";

/// Resolve the runtime file `name` from the supplied environment inputs.
fn resolve_runtime_file(name: &str, xdg_runtime: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(runtime) = xdg_runtime {
        return runtime.join("logflux").join(name);
    }
    if let Some(home) = home {
        return home.join(".logflux").join("runtime").join(name);
    }
    PathBuf::from(FALLBACK_RUNTIME_DIR).join(name)
}

fn runtime_file_path(name: &str) -> PathBuf {
    resolve_runtime_file(
        name,
        env::var_os("XDG_RUNTIME_DIR").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
    )
}

fn read_secret_file(path: &Path) -> Result<String, ClientError> {
    let file = File::open(path).map_err(|err| {
        ClientError::connection(format!("secret file {} unavailable: {err}", path.display()))
    })?;
    let mut line = String::new();
    let bytes_read = BufReader::new(file)
        .read_line(&mut line)
        .map_err(|err| ClientError::Format(format!("secret file is unreadable: {err}")))?;
    if bytes_read == 0 {
        return Err(ClientError::Format("secret file is empty".to_owned()));
    }
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

/// Load the shared secret published by a locally running agent.
///
/// Reads the first line of the resolved secret file and strips a single
/// trailing newline. A missing file yields [`ClientError::Connection`]; an
/// empty or unreadable file yields [`ClientError::Format`].
pub fn load_shared_secret() -> Result<String, ClientError> {
    read_secret_file(&runtime_file_path(SECRET_FILE))
}

fn process_alive(pid: u32) -> bool {
    // SAFETY: kill(2) with signal 0 delivers nothing; it only reports
    // whether the target process can be signalled.
    unsafe { libc::kill(pid as libc::pid_t, 0) == 0 }
}

fn pid_file_alive(path: &Path) -> bool {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return false,
    };
    let pid = match content.trim().parse::<u32>() {
        Ok(pid) => pid,
        Err(err) => {
            warn!("unparsable agent pid file {}: {err}", path.display());
            return false;
        }
    };
    process_alive(pid)
}

/// Report whether a LogFlux agent appears to be running on this machine.
///
/// Resolves the agent's PID file, parses the recorded process id, and probes
/// it with a zero signal. Every failure mode (missing file, garbled content,
/// dead process) is reported as `false`, never as an error.
pub fn agent_running() -> bool {
    pid_file_alive(&runtime_file_path(PID_FILE))
}
