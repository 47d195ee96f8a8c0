//! Request target and server address derivation from a [`Uri`].

use std::net::{SocketAddr, ToSocketAddrs};

use http::Uri;
use tracing::debug;

use crate::protocol::ConnectError;

pub const HTTP_PORT: u16 = 80;
pub const HTTPS_PORT: u16 = 443;

/// Returns the origin-form request target for `uri`: its path, or `/` if the
/// path is empty, followed by `?` and the raw query when one is present.
///
/// The query is copied as it appears in the uri, nothing is re-encoded.
pub fn canonical_path(uri: &Uri) -> String {
    let path = match uri.path() {
        "" => "/",
        path => path,
    };

    match uri.query() {
        Some(query) => {
            let mut target = String::with_capacity(path.len() + 1 + query.len());
            target.push_str(path);
            target.push('?');
            target.push_str(query);
            target
        }
        None => path.to_owned(),
    }
}

/// The port to connect to: the explicit one, otherwise 443 for `https` and 80
/// for anything else.
pub fn server_port(uri: &Uri) -> u16 {
    uri.port_u16().unwrap_or_else(|| match uri.scheme_str() {
        Some("https") => HTTPS_PORT,
        _ => HTTP_PORT,
    })
}

/// Returns the unresolved host and the port of `uri`.
///
/// IPv6 literals are returned without their brackets.
///
/// # Errors
///
/// Returns [`ConnectError::MissingHost`] if the uri carries no authority.
pub fn host_and_port(uri: &Uri) -> Result<(&str, u16), ConnectError> {
    let host = uri.host().ok_or(ConnectError::MissingHost)?;
    let host = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')).unwrap_or(host);
    Ok((host, server_port(uri)))
}

/// Resolves the server address of `uri`.
///
/// This performs a blocking name lookup through the system resolver.
///
/// # Errors
///
/// Returns [`ConnectError::UnresolvableHost`] if the lookup fails or yields no
/// address.
pub fn resolve_address(uri: &Uri) -> Result<SocketAddr, ConnectError> {
    let (host, port) = host_and_port(uri)?;

    let mut addrs = (host, port).to_socket_addrs().map_err(|e| ConnectError::unresolvable_host(host, e))?;
    let addr = addrs
        .next()
        .ok_or_else(|| ConnectError::unresolvable_host(host, std::io::Error::other("no address found")))?;

    debug!(host, %addr, "resolved server address");
    Ok(addr)
}
