//! IPv4 address and subnet mask arithmetic.
//!
//! Addresses and masks are plain `u32` values, most significant octet first.
//! Text is only involved at the edges, see [`is_ipv4`], [`ipv4_to_int`] and
//! [`int_to_ipv4`].

use super::error::Ipv4Error;
use regex::Regex;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Dotted-decimal grammar, one group per octet with no leading zeros.
/// ASCII digits only.
static IPV4_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_ipv4_regex() -> &'static Regex {
    IPV4_REGEX.get_or_init(|| {
        Regex::new(r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])){3}$")
            .expect("Invalid Regex")
    })
}

/// Check if `text` is a dotted-decimal IPv4 address.
///
/// Exactly four groups `0-255`, no leading zeros and no surrounding whitespace.
///
/// # Examples
/// ```
/// use subnet_reach::models::is_ipv4;
/// assert!(is_ipv4("192.168.0.1"));
/// assert!(!is_ipv4("01.2.3.4"));
/// ```
pub fn is_ipv4(text: &str) -> bool {
    get_ipv4_regex().is_match(text)
}

/// Parse a dotted-decimal IPv4 address into a `u32`.
pub fn ipv4_to_int(text: &str) -> Result<u32, Ipv4Error> {
    if !is_ipv4(text) {
        return Err(Ipv4Error::InvalidFormat(text.to_string()));
    }
    let mut value: u32 = 0;
    for octet in text.split('.') {
        // grammar already limits each octet to 0-255
        let octet: u8 = octet
            .parse()
            .map_err(|_| Ipv4Error::InvalidFormat(text.to_string()))?;
        value = (value << 8) | u32::from(octet);
    }
    log::trace!("ipv4_to_int({text}) = {value:#010x}");
    Ok(value)
}

/// Format a `u32` as a dotted-decimal IPv4 address.
pub fn int_to_ipv4(value: u32) -> String {
    [24, 16, 8, 0]
        .iter()
        .map(|shift| ((value >> shift) & 0xFF).to_string())
        .collect::<Vec<String>>()
        .join(".")
}

/// Check that `mask` is a run of 1 bits from the top followed only by 0 bits.
///
/// Both `0.0.0.0` and `255.255.255.255` are valid masks.
pub fn is_mask(mask: u32) -> bool {
    let inverted = !mask;
    inverted & inverted.wrapping_add(1) == 0
}

/// Convert a CIDR prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use subnet_reach::models::mask_from_len;
/// assert_eq!(mask_from_len(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(mask_from_len(0).unwrap(), 0);
/// ```
pub fn mask_from_len(len: u8) -> Result<u32, Ipv4Error> {
    if len > MAX_LENGTH {
        return Err(Ipv4Error::OutOfRange(i64::from(len)));
    }
    if len == 0 {
        // u32 << 32 overflows
        return Ok(0);
    }
    Ok(u32::MAX << (MAX_LENGTH - len))
}

/// Convert a subnet mask to its CIDR prefix length.
pub fn len_from_mask(mask: u32) -> Result<u8, Ipv4Error> {
    if !is_mask(mask) {
        return Err(Ipv4Error::InvalidMask(mask));
    }
    Ok((!mask).leading_zeros() as u8)
}

/// Get the network address for a given IP and mask.
///
/// The mask is not checked for contiguity.
pub fn network_from_ip_mask(ip: u32, mask: u32) -> u32 {
    ip & mask
}

/// Find the widest mask that puts `ip` into `network`.
///
/// Prefix lengths are tried from 0 upwards and the first match wins, so the
/// result is the loosest mask. See [`max_mask_from_ip_network`] for the tightest.
pub fn min_mask_from_ip_network(ip: u32, network: u32) -> Result<u32, Ipv4Error> {
    find_mask(ip, network, 0..=MAX_LENGTH)
}

/// Find the narrowest mask that puts `ip` into `network`.
pub fn max_mask_from_ip_network(ip: u32, network: u32) -> Result<u32, Ipv4Error> {
    find_mask(ip, network, (0..=MAX_LENGTH).rev())
}

fn find_mask(
    ip: u32,
    network: u32,
    lengths: impl Iterator<Item = u8>,
) -> Result<u32, Ipv4Error> {
    for len in lengths {
        let mask = mask_from_len(len)?;
        log::trace!(
            "find_mask try /{len}: {} & {} == {}?",
            int_to_ipv4(ip),
            int_to_ipv4(mask),
            int_to_ipv4(network)
        );
        if network_from_ip_mask(ip, mask) == network {
            return Ok(mask);
        }
    }
    Err(Ipv4Error::NoSuchMask { ip, network })
}
