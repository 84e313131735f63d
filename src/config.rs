use anyhow::{Context, anyhow};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8000));

pub const USAGE: &str = concat!(
    "Usage: dnd_characters [--bind <addr:port>] ",
    "[--log-level <trace|debug|info|warn|error>]"
);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_level: tracing::Level,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND,
            log_level: tracing::Level::INFO,
            show_help: false,
        }
    }
}

impl Config {
    /// Parses command line flags (without the program name).
    ///
    /// Unknown flags are returned so the caller can warn about them once
    /// logging is up.
    pub fn from_args<I, S>(args: I) -> anyhow::Result<(Config, Vec<String>)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut config = Config::default();
        let mut ignored = Vec::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = flag_value(&args, i)?;
                    config.bind_addr = value
                        .parse()
                        .with_context(|| format!("invalid --bind address: {}", value))?;
                    i += 2;
                }
                "--log-level" => {
                    let value = flag_value(&args, i)?;
                    config.log_level = value
                        .parse()
                        .map_err(|_| anyhow!("invalid --log-level: {}", value))?;
                    i += 2;
                }
                "-h" | "--help" => {
                    config.show_help = true;
                    i += 1;
                }
                other => {
                    ignored.push(other.to_string());
                    i += 1;
                }
            }
        }

        Ok((config, ignored))
    }
}

fn flag_value(args: &[String], i: usize) -> anyhow::Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires a value", args[i]))
}
