//! Host record and the raw text form it is parsed from.

use super::error::Ipv4Error;
use super::ipv4::{int_to_ipv4, ipv4_to_int, is_ipv4, is_mask, len_from_mask, mask_from_len};
use serde::{Serialize, Serializer};

/// A host as entered so far.
///
/// `None` means the field has not been validly entered yet. `Some(0)` is the
/// address or mask `0.0.0.0` and is a real value.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Default, Serialize)]
pub struct Host {
    /// The host address.
    #[serde(serialize_with = "serialize_dotted")]
    pub ip: Option<u32>,
    /// The subnet mask.
    #[serde(serialize_with = "serialize_dotted")]
    pub mask: Option<u32>,
}

/// Serialize an optional address as dotted-decimal text, or null.
pub(crate) fn serialize_dotted<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&int_to_ipv4(*v)),
        None => serializer.serialize_none(),
    }
}

impl Host {
    pub fn new(ip: u32, mask: u32) -> Host {
        Host {
            ip: Some(ip),
            mask: Some(mask),
        }
    }

    /// Both address and mask present.
    pub fn is_complete(&self) -> bool {
        self.ip.is_some() && self.mask.is_some()
    }

    /// Network address of the host, if complete.
    pub fn network(&self) -> Option<u32> {
        Some(self.ip? & self.mask?)
    }

    /// Prefix length of the stored mask, if there is one and it is valid.
    pub fn display_mask_len(&self) -> Option<u8> {
        self.mask.and_then(|m| len_from_mask(m).ok())
    }
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.ip, self.display_mask_len(), self.mask) {
            (Some(ip), Some(len), _) => write!(f, "{}/{}", int_to_ipv4(ip), len),
            (Some(ip), None, Some(mask)) => write!(f, "{}/{}", int_to_ipv4(ip), int_to_ipv4(mask)),
            (Some(ip), None, None) => write!(f, "{}/?", int_to_ipv4(ip)),
            (None, Some(len), _) => write!(f, "?/{len}"),
            _ => write!(f, "<incomplete>"),
        }
    }
}

/// The raw text of one host's fields.
///
/// The mask field takes a dotted mask (`255.255.255.0`) or a prefix length
/// (`24` or `/24`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostForm {
    pub ip: String,
    pub mask: String,
}

impl HostForm {
    pub fn new(ip: &str, mask: &str) -> HostForm {
        HostForm {
            ip: ip.to_string(),
            mask: mask.to_string(),
        }
    }

    /// Parse the fields, leaving anything invalid as `None`.
    pub fn parse(&self) -> Host {
        let ip = parse_ip_field(&self.ip).ok().flatten();
        let mask = parse_mask_field(&self.mask).ok().flatten();
        log::debug!(
            "HostForm::parse ip={:?} -> {:?}, mask={:?} -> {:?}",
            self.ip,
            ip,
            self.mask,
            mask
        );
        Host { ip, mask }
    }

    /// Parse the fields, reporting why a non-empty field is invalid.
    pub fn parse_strict(&self) -> Result<Host, Ipv4Error> {
        Ok(Host {
            ip: parse_ip_field(&self.ip)?,
            mask: parse_mask_field(&self.mask)?,
        })
    }
}

fn parse_ip_field(text: &str) -> Result<Option<u32>, Ipv4Error> {
    if text.is_empty() {
        return Ok(None);
    }
    ipv4_to_int(text).map(Some)
}

fn parse_mask_field(text: &str) -> Result<Option<u32>, Ipv4Error> {
    if text.is_empty() {
        return Ok(None);
    }
    if is_ipv4(text) {
        let mask = ipv4_to_int(text)?;
        if !is_mask(mask) {
            return Err(Ipv4Error::InvalidMask(mask));
        }
        return Ok(Some(mask));
    }
    let len_text = text.strip_prefix('/').unwrap_or(text);
    let len: i64 = len_text
        .parse()
        .map_err(|_| Ipv4Error::InvalidFormat(text.to_string()))?;
    let len = u8::try_from(len).map_err(|_| Ipv4Error::OutOfRange(len))?;
    mask_from_len(len).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_mask() {
        let host = HostForm::new("192.168.1.10", "255.255.255.0").parse();
        assert_eq!(host, Host::new(0xC0A8010A, 0xFFFFFF00));
        assert!(host.is_complete());
        assert_eq!(host.network(), Some(0xC0A80100));
        assert_eq!(host.display_mask_len(), Some(24));
    }

    #[test]
    fn test_parse_prefix_len() {
        assert_eq!(
            HostForm::new("10.0.0.1", "8").parse().mask,
            Some(0xFF000000)
        );
        assert_eq!(
            HostForm::new("10.0.0.1", "/8").parse().mask,
            Some(0xFF000000)
        );
        assert_eq!(HostForm::new("10.0.0.1", "/0").parse().mask, Some(0));
        assert_eq!(
            HostForm::new("10.0.0.1", "32").parse().mask,
            Some(u32::MAX)
        );
    }

    #[test]
    fn test_parse_zero_is_not_empty() {
        let host = HostForm::new("0.0.0.0", "0.0.0.0").parse();
        assert_eq!(host.ip, Some(0));
        assert_eq!(host.mask, Some(0));
        assert!(host.is_complete());
        assert_eq!(host.network(), Some(0));
    }

    #[test]
    fn test_parse_invalid_fields_are_none() {
        let host = HostForm::new("192.168.1.", "255.0.255.0").parse();
        assert_eq!(host, Host::default());
        assert!(!host.is_complete());
        assert_eq!(host.network(), None);

        assert_eq!(HostForm::new("1.2.3.4", "33").parse().mask, None);
        assert_eq!(HostForm::new("1.2.3.4", "-1").parse().mask, None);
        assert_eq!(HostForm::new("1.2.3.4", "abc").parse().mask, None);
        assert_eq!(HostForm::new("1.2.3.4", "").parse().mask, None);
        assert_eq!(HostForm::new(" 1.2.3.4", "24").parse().ip, None);
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(
            HostForm::new("1.2.3", "24").parse_strict().unwrap_err(),
            Ipv4Error::InvalidFormat("1.2.3".to_string())
        );
        assert_eq!(
            HostForm::new("1.2.3.4", "255.0.255.0")
                .parse_strict()
                .unwrap_err(),
            Ipv4Error::InvalidMask(0xFF00FF00)
        );
        assert_eq!(
            HostForm::new("1.2.3.4", "-1").parse_strict().unwrap_err(),
            Ipv4Error::OutOfRange(-1)
        );
        assert_eq!(
            HostForm::new("1.2.3.4", "/40").parse_strict().unwrap_err(),
            Ipv4Error::OutOfRange(40)
        );
        // empty fields are not errors
        assert_eq!(
            HostForm::new("", "").parse_strict().unwrap(),
            Host::default()
        );
    }

    #[test]
    fn test_host_display() {
        assert_eq!(Host::new(0xC0A8010A, 0xFFFFFF00).to_string(), "192.168.1.10/24");
        assert_eq!(
            Host {
                ip: Some(0x0A000001),
                mask: None
            }
            .to_string(),
            "10.0.0.1/?"
        );
        assert_eq!(Host::default().to_string(), "<incomplete>");
    }

    #[test]
    fn test_host_serialize() {
        let json = serde_json::to_string(&Host {
            ip: Some(0),
            mask: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"ip":"0.0.0.0","mask":null}"#);
    }
}
