//! Runtime configuration resolution.

use tracing::warn;

/// Environment variable consulted when no `--port` flag is given
pub const PORT_ENV_VAR: &str = "PORT";

/// Port used when neither the CLI flag nor the environment supplies one
pub const DEFAULT_PORT: u16 = 8081;

/// Resolves the listen port from the CLI flag and the process environment.
///
/// Precedence: `--port` flag, then the `PORT` environment variable, then
/// [`DEFAULT_PORT`].
pub fn resolve_port(cli_port: Option<u16>) -> u16 {
    pick_port(cli_port, std::env::var(PORT_ENV_VAR).ok().as_deref())
}

/// Pure port-selection logic, with the environment value passed in so tests
/// never have to mutate process state.
///
/// An unparseable environment value is ignored with a warning rather than
/// treated as fatal; the service still comes up on the default port.
pub fn pick_port(cli_port: Option<u16>, env_port: Option<&str>) -> u16 {
    if let Some(port) = cli_port {
        return port;
    }

    if let Some(raw) = env_port {
        match raw.parse() {
            Ok(port) => return port,
            Err(_) => warn!(
                "Ignoring {} value {:?}: not a valid port number",
                PORT_ENV_VAR, raw
            ),
        }
    }

    DEFAULT_PORT
}
