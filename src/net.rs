use std::net::{IpAddr, UdpSocket};

/// Best-effort detection of the address other devices on the LAN can use to
/// reach this machine.
///
/// Connecting a UDP socket transmits nothing; it only makes the OS pick the
/// outbound interface for that route, which we then read back.
pub fn local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    Some(socket.local_addr().ok()?.ip())
}

/// Host to show in the LAN URL, falling back to the loopback name when no
/// route is available.
pub fn display_host(ip: Option<IpAddr>) -> String {
    match ip {
        Some(ip) => ip.to_string(),
        None => "localhost".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn display_host_formats_resolved_address() {
        let ip = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 7));
        assert_eq!(display_host(Some(ip)), "192.168.1.7");
    }

    #[test]
    fn display_host_falls_back_to_localhost() {
        assert_eq!(display_host(None), "localhost");
    }

    #[test]
    fn local_ip_never_panics() {
        // May be Some or None depending on the machine's network; either is
        // fine as long as the call returns.
        let _ = local_ip();
    }
}
