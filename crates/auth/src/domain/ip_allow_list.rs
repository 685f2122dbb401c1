//! IP Allow-List Value Object
//!
//! Parses the `ip_allow_list` store attribute: a comma-separated list of
//! CIDR entries. An entry without a prefix length is an exact single-host
//! range (`/32` for IPv4, `/128` for IPv6).

use std::net::IpAddr;

use ipnet::IpNet;

/// Parsed allow-list ranges
///
/// Each entry is parsed independently; a malformed entry is dropped from
/// the usable set with a warning rather than aborting the whole list. A
/// list whose usable set is empty permits nothing - the attribute was
/// present, so the identity is restricted even if no range survived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpAllowList {
    ranges: Vec<IpNet>,
}

impl IpAllowList {
    /// Parse a comma-separated list of CIDR entries
    pub fn parse(raw: &str) -> Self {
        let mut ranges = Vec::new();

        for entry in raw.split(',') {
            let entry = entry.trim();

            let parsed = if entry.contains('/') {
                entry.parse::<IpNet>().map_err(|_| ())
            } else {
                // bare address, normalize to an exact single-host range
                entry.parse::<IpAddr>().map(IpNet::from).map_err(|_| ())
            };

            match parsed {
                Ok(net) => ranges.push(net),
                Err(_) => {
                    tracing::warn!(entry, "invalid CIDR entry in ip_allow_list, skipping");
                }
            }
        }

        Self { ranges }
    }

    /// Whether the address falls inside at least one usable range
    pub fn permits(&self, ip: IpAddr) -> bool {
        self.ranges.iter().any(|net| net.contains(&ip))
    }

    /// Number of usable ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True when no entry survived parsing
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_bare_entry_normalized_to_host_range() {
        let list = IpAllowList::parse("1.2.3.4/32,1.2.3.5");

        assert_eq!(list.len(), 2);
        assert!(list.permits(ip("1.2.3.4")));
        assert!(list.permits(ip("1.2.3.5")));
        assert!(!list.permits(ip("1.2.3.6")));
        assert!(!list.permits(ip("9.9.9.9")));
    }

    #[test]
    fn test_cidr_range_containment() {
        let list = IpAllowList::parse("10.0.0.0/24");

        assert!(list.permits(ip("10.0.0.1")));
        assert!(list.permits(ip("10.0.0.255")));
        assert!(!list.permits(ip("10.0.1.5")));
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let list = IpAllowList::parse("not_an_ip,10.0.0.0/24,999.1.1.1");

        assert_eq!(list.len(), 1);
        assert!(list.permits(ip("10.0.0.1")));
    }

    #[test]
    fn test_all_malformed_permits_nothing() {
        let list = IpAllowList::parse("invalid_ip");

        assert!(list.is_empty());
        assert!(!list.permits(ip("1.2.3.4")));
        assert!(!list.permits(ip("0.0.0.0")));
    }

    #[test]
    fn test_entries_are_trimmed() {
        let list = IpAllowList::parse(" 1.2.3.4 , 10.0.0.0/24 ");

        assert_eq!(list.len(), 2);
        assert!(list.permits(ip("1.2.3.4")));
        assert!(list.permits(ip("10.0.0.7")));
    }
}
