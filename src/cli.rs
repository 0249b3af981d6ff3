//! Command-line interface configuration.

use argh::FromArgs;
use std::{net::IpAddr, path::PathBuf};

/// A small static site server with a liveness endpoint
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// path to the site root directory (default: 'site')
    #[argh(option, long = "static-dir", default = "PathBuf::from(\"site\")")]
    pub static_dir: PathBuf,

    /// listen port; overrides the PORT environment variable
    #[argh(option)]
    pub port: Option<u16>,

    /// address to bind (default: '0.0.0.0')
    #[argh(option, default = "\"0.0.0.0\".parse().unwrap()")]
    pub host: IpAddr,
}
