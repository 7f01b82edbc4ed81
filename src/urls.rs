//! URL assembly and reduction helpers.

use tracing::trace;
use url::Url;

use crate::error::Result;
use crate::guard;

/// Separator between a protocol and a host.
pub const PROTOCOL_SEPARATOR: &str = "://";

/// Parse a raw URL string.
///
/// A blank string is an invalid argument; anything else that fails to parse
/// surfaces as a URL parse error.
pub fn create_url(raw: &str) -> Result<Url> {
    guard::ensure_string(raw, "Must provide a URL string!")?;

    let url = Url::parse(raw)?;
    trace!(raw, url = %url, "parsed URL");

    Ok(url)
}

/// Join a protocol and host into `protocol://host` form.
pub fn join_protocol_host(protocol: &str, host: &str) -> Result<String> {
    guard::ensure_string(protocol, "Must provide a protocol!")?;
    guard::ensure_string(host, "Must provide a host!")?;

    Ok(format!("{protocol}{PROTOCOL_SEPARATOR}{host}"))
}

/// Reduce a URL to its `protocol://host` string, dropping path, query and
/// port.
pub fn protocol_and_host(url: &Url) -> Result<String> {
    let host = guard::ensure_object(url.host_str(), "URL must have a host!")?;

    join_protocol_host(url.scheme(), host)
}

/// Reduce a raw URL string to its `protocol://host` string.
pub fn protocol_and_host_str(raw: &str) -> Result<String> {
    guard::ensure_string(raw, "Must provide a URL string!")?;

    let reduced = protocol_and_host(&create_url(raw)?)?;
    trace!(raw, reduced = %reduced, "reduced URL to protocol and host");

    Ok(reduced)
}

/// Reduce a raw URL string to a host-only [`Url`].
pub fn host_url(raw: &str) -> Result<Url> {
    create_url(&protocol_and_host_str(raw)?)
}
