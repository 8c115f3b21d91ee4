//! Reachability between two hosts.
//!
//! Two hosts can talk directly when each one's address falls inside the
//! network the other host declares with its own mask.

use crate::models::{network_from_ip_mask, Host};
use serde::Serialize;

/// Verdict of a reachability check.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reachability {
    Reachable,
    Unreachable,
    /// At least one host is missing its address or mask.
    Unknown,
}

impl Reachability {
    fn from_bool(value: bool) -> Reachability {
        if value {
            Reachability::Reachable
        } else {
            Reachability::Unreachable
        }
    }

    /// `None` for [`Reachability::Unknown`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Reachability::Reachable => Some(true),
            Reachability::Unreachable => Some(false),
            Reachability::Unknown => None,
        }
    }
}

impl std::fmt::Display for Reachability {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Reachability::Reachable => write!(f, "Yes"),
            Reachability::Unreachable => write!(f, "No"),
            Reachability::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Check if `to` is inside the network `from` declares.
///
/// Returns `None` when either host is incomplete.
pub fn sees_as_local(from: &Host, to: &Host) -> Option<bool> {
    let from_network = from.network()?;
    let to_ip = to.ip?;
    let from_mask = from.mask?;
    Some(network_from_ip_mask(to_ip, from_mask) == from_network)
}

/// Decide if two hosts can communicate directly.
pub fn can_communicate(a: &Host, b: &Host) -> Reachability {
    match (a.ip, a.mask, b.ip, b.mask) {
        (Some(ip_a), Some(mask_a), Some(ip_b), Some(mask_b)) => {
            let network_a = network_from_ip_mask(ip_a, mask_a);
            let network_b = network_from_ip_mask(ip_b, mask_b);
            Reachability::from_bool(
                ip_a & mask_b == network_b && ip_b & mask_a == network_a,
            )
        }
        _ => Reachability::Unknown,
    }
}

/// Both directions of a reachability check, with the networks involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachReport {
    pub a: Host,
    pub b: Host,
    #[serde(serialize_with = "crate::models::serialize_dotted")]
    pub network_a: Option<u32>,
    #[serde(serialize_with = "crate::models::serialize_dotted")]
    pub network_b: Option<u32>,
    /// Host A's mask puts host B on its network.
    pub a_sees_b: Option<bool>,
    /// Host B's mask puts host A on its network.
    pub b_sees_a: Option<bool>,
    pub reachability: Reachability,
}

/// Run the reachability check and keep the working.
pub fn reach_report(a: &Host, b: &Host) -> ReachReport {
    let report = ReachReport {
        a: *a,
        b: *b,
        network_a: a.network(),
        network_b: b.network(),
        a_sees_b: sees_as_local(a, b),
        b_sees_a: sees_as_local(b, a),
        reachability: can_communicate(a, b),
    };
    log::debug!(
        "reach_report {a} <-> {b}: a_sees_b={:?} b_sees_a={:?} => {}",
        report.a_sees_b,
        report.b_sees_a,
        report.reachability
    );
    report
}
