//! CIDR network blocks.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Failure to parse CIDR notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrParseError {
    #[error("invalid CIDR address {0:?}: missing prefix length")]
    MissingPrefix(String),
    #[error("invalid CIDR address {0:?}: bad IP address")]
    InvalidAddress(String),
    #[error("invalid CIDR address {0:?}: bad prefix length")]
    InvalidPrefix(String),
}

/// An IP network, e.g. `192.168.0.0/16`.
///
/// The address is always the network address: host bits of the parsed text
/// are cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpNet {
    addr: IpAddr,
    prefix_len: u8,
}

impl IpNet {
    /// Build a network from an address and prefix length.
    ///
    /// Returns `None` if the prefix is longer than the address.
    pub fn new(addr: IpAddr, prefix_len: u8) -> Option<Self> {
        let addr = match addr {
            IpAddr::V4(v4) => {
                let mask = mask_v4(prefix_len)?;
                IpAddr::V4(Ipv4Addr::from(u32::from(v4) & mask))
            }
            IpAddr::V6(v6) => {
                let mask = mask_v6(prefix_len)?;
                IpAddr::V6(Ipv6Addr::from(u128::from(v6) & mask))
            }
        };
        Some(Self { addr, prefix_len })
    }

    /// The network address.
    pub fn network(&self) -> IpAddr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Whether `ip` belongs to this network.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.addr, ip) {
            (IpAddr::V4(net), IpAddr::V4(ip)) => mask_v4(self.prefix_len)
                .is_some_and(|mask| u32::from(ip) & mask == u32::from(net)),
            (IpAddr::V6(net), IpAddr::V6(ip)) => mask_v6(self.prefix_len)
                .is_some_and(|mask| u128::from(ip) & mask == u128::from(net)),
            _ => false,
        }
    }
}

fn mask_v4(prefix_len: u8) -> Option<u32> {
    match prefix_len {
        0 => Some(0),
        1..=32 => Some(u32::MAX << (32 - prefix_len)),
        _ => None,
    }
}

fn mask_v6(prefix_len: u8) -> Option<u128> {
    match prefix_len {
        0 => Some(0),
        1..=128 => Some(u128::MAX << (128 - prefix_len)),
        _ => None,
    }
}

impl FromStr for IpNet {
    type Err = CidrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| CidrParseError::MissingPrefix(s.to_string()))?;
        let addr: IpAddr = addr
            .parse()
            .map_err(|_| CidrParseError::InvalidAddress(s.to_string()))?;
        // Only plain decimal digits, as in "10.0.0.0/8".
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrParseError::InvalidPrefix(s.to_string()));
        }
        let prefix_len: u8 = prefix
            .parse()
            .map_err(|_| CidrParseError::InvalidPrefix(s.to_string()))?;
        Self::new(addr, prefix_len).ok_or_else(|| CidrParseError::InvalidPrefix(s.to_string()))
    }
}

impl fmt::Display for IpNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl Serialize for IpNet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IpNet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
