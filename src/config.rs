use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// The port is fixed; the tool has no configuration surface.
pub const PORT: u16 = 8000;

/// Immutable server settings, resolved once at startup.
pub struct Config {
    pub port: u16,
    pub bind: IpAddr,
    pub doc_root: PathBuf,
}

impl Config {
    /// Serve the directory containing the executable itself, so the binary
    /// can be dropped next to the static assets and run from anywhere.
    pub fn from_exe_dir() -> io::Result<Config> {
        let exe = std::env::current_exe()?.canonicalize()?;
        let doc_root = exe
            .parent()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "executable has no parent directory",
                )
            })?
            .to_path_buf();

        Ok(Config {
            port: PORT,
            // 0.0.0.0 so other devices on the network can connect
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            doc_root,
        })
    }

    pub fn local_url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }

    pub fn lan_url(&self, host: &str) -> String {
        format!("http://{}:{}/", host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            port: PORT,
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            doc_root: PathBuf::from("."),
        }
    }

    #[test]
    fn local_url_uses_loopback_name() {
        assert_eq!(config().local_url(), "http://localhost:8000/");
    }

    #[test]
    fn lan_url_uses_given_host() {
        assert_eq!(config().lan_url("192.168.1.7"), "http://192.168.1.7:8000/");
    }
}
