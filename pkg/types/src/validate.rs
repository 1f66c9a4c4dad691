use anyhow::{Result, bail};

/// Maximum length of a fully-qualified hostname.
const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of one DNS label.
const MAX_LABEL_LEN: usize = 63;

/// Check that `host` is a DNS-1123 subdomain: dot-separated labels of
/// `[a-z0-9-]`, no label starting or ending with a hyphen.
pub fn validate_hostname(host: &str) -> Result<()> {
    if host.is_empty() {
        bail!("hostname must not be empty");
    }
    if host.len() > MAX_HOSTNAME_LEN {
        bail!(
            "hostname '{}' is {} characters, more than {}",
            host,
            host.len(),
            MAX_HOSTNAME_LEN
        );
    }
    for (i, label) in host.split('.').enumerate() {
        if let Err(reason) = check_label(label) {
            bail!("hostname '{}': label {} {}", host, i, reason);
        }
    }
    Ok(())
}

fn check_label(label: &str) -> std::result::Result<(), &'static str> {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (None, _) | (_, None) => Err("is empty"),
        _ if bytes.len() > MAX_LABEL_LEN => Err("is longer than 63 characters"),
        (Some(b'-'), _) | (_, Some(b'-')) => Err("starts or ends with a hyphen"),
        _ if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-') =>
        {
            Err("has characters outside [a-z0-9-]")
        }
        _ => Ok(()),
    }
}
