//! Host reachability probe via the system `ping` utility.

use std::net::{IpAddr, ToSocketAddrs};
use std::process::Command;

use tracing::debug;

/// Check whether `address` answers a single ping.
///
/// The address is resolved first; an unresolvable address is unreachable.
/// The verdict comes from the utility's output alone: reachable iff it
/// contains `TTL`. Utilities that print the field in lower case (most
/// Linux builds do) will always report unreachable.
pub fn ping(address: &str) -> bool {
    let Some(ip) = resolve(address) else {
        debug!(address, "could not resolve address");
        return false;
    };

    let output = match Command::new("ping").args(ping_args(ip)).output() {
        Ok(output) => output,
        Err(e) => {
            debug!(%ip, error = %e, "failed to run ping");
            return false;
        }
    };

    // The exit status is ignored, only the output matters
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    let reachable = reply_indicates_reachable(&text);
    debug!(address, %ip, reachable, "ping finished");
    reachable
}

/// Arguments for a single echo request to `ip` on this platform.
pub fn ping_args(ip: IpAddr) -> Vec<String> {
    if cfg!(windows) {
        vec![
            "-w".to_string(),
            "1000".to_string(),
            "-n".to_string(),
            "1".to_string(),
            ip.to_string(),
        ]
    } else {
        vec!["-c".to_string(), "1".to_string(), ip.to_string()]
    }
}

/// Check ping output for a reply. Case-sensitive.
pub fn reply_indicates_reachable(output: &str) -> bool {
    output.contains("TTL")
}

fn resolve(address: &str) -> Option<IpAddr> {
    if let Ok(ip) = address.parse::<IpAddr>() {
        return Some(ip);
    }
    (address, 0)
        .to_socket_addrs()
        .ok()?
        .next()
        .map(|addr| addr.ip())
}
