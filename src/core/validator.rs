use crate::core::errors::{NonRoutable, ValidationError};
use std::net::{IpAddr, Ipv4Addr};

/*-------------------------------------------------------------------------------------------------
  Address Validation
-------------------------------------------------------------------------------------------------*/

/// Parse `raw` and return the IPv4 address it denotes when it is a public, routable address.
///
/// IPv4-mapped IPv6 literals (`::ffff:a.b.c.d`) reduce to their embedded IPv4 address. Any other
/// IPv6 literal is rejected with [ValidationError::NotIpv4].
///
/// ```
/// use githubipranges::{validate, NonRoutable, ValidationError};
///
/// assert_eq!(validate("192.30.252.1"), Ok("192.30.252.1".parse().unwrap()));
/// assert_eq!(validate("not-an-ip"), Err(ValidationError::Malformed));
/// assert_eq!(validate("2001:db8::1"), Err(ValidationError::NotIpv4));
/// assert_eq!(
///     validate("10.0.0.1"),
///     Err(ValidationError::NotRoutable(NonRoutable::Private))
/// );
/// ```
pub fn validate(raw: &str) -> Result<Ipv4Addr, ValidationError> {
    let ip: IpAddr = raw.parse().map_err(|_| ValidationError::Malformed)?;

    let ipv4 = match ip {
        IpAddr::V4(ipv4) => ipv4,
        IpAddr::V6(ipv6) => ipv6.to_ipv4_mapped().ok_or(ValidationError::NotIpv4)?,
    };

    match non_routable(&ipv4) {
        Some(reason) => Err(ValidationError::NotRoutable(reason)),
        None => Ok(ipv4),
    }
}

// Ipv4Addr::is_broadcast() is not covered by the other predicates, so it is checked explicitly.
fn non_routable(ip: &Ipv4Addr) -> Option<NonRoutable> {
    if ip.is_private() {
        Some(NonRoutable::Private)
    } else if ip.is_loopback() {
        Some(NonRoutable::Loopback)
    } else if ip.is_unspecified() {
        Some(NonRoutable::Unspecified)
    } else if ip.is_multicast() {
        Some(NonRoutable::Multicast)
    } else if ip.is_broadcast() {
        Some(NonRoutable::Broadcast)
    } else {
        None
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn assert_non_routable(raw: &str, reason: NonRoutable) {
        assert_eq!(
            validate(raw),
            Err(ValidationError::NotRoutable(reason)),
            "{raw}"
        );
    }

    #[test]
    fn test_validate_public_ipv4() {
        assert_eq!(validate("192.30.252.1"), Ok(Ipv4Addr::new(192, 30, 252, 1)));
        assert_eq!(validate("8.8.8.8"), Ok(Ipv4Addr::new(8, 8, 8, 8)));
    }

    #[test]
    fn test_validate_malformed() {
        for raw in [
            "",
            "invalid-ip",
            "256.1.1.1",
            "1.2.3",
            "192.30.252.0/22",
            " 8.8.8.8",
            "8.8.8.8\n",
            "01.2.3.4",
        ] {
            assert_eq!(validate(raw), Err(ValidationError::Malformed), "{raw:?}");
        }
    }

    #[test]
    fn test_validate_not_ipv4() {
        for raw in ["2001:db8::1", "::1", "::", "fe80::1"] {
            assert_eq!(validate(raw), Err(ValidationError::NotIpv4), "{raw}");
        }
    }

    #[test]
    fn test_validate_ipv4_mapped_ipv6() {
        assert_eq!(
            validate("::ffff:192.30.252.1"),
            Ok(Ipv4Addr::new(192, 30, 252, 1))
        );
        assert_non_routable("::ffff:127.0.0.1", NonRoutable::Loopback);
    }

    #[test]
    fn test_validate_private() {
        for raw in [
            "10.0.0.0",
            "10.255.255.255",
            "172.16.0.1",
            "172.31.255.254",
            "192.168.0.0",
            "192.168.1.1",
            "192.168.255.255",
        ] {
            assert_non_routable(raw, NonRoutable::Private);
        }
    }

    #[test]
    fn test_validate_loopback() {
        assert_non_routable("127.0.0.1", NonRoutable::Loopback);
        assert_non_routable("127.255.255.254", NonRoutable::Loopback);
    }

    #[test]
    fn test_validate_unspecified() {
        assert_non_routable("0.0.0.0", NonRoutable::Unspecified);
    }

    #[test]
    fn test_validate_multicast() {
        assert_non_routable("224.0.0.1", NonRoutable::Multicast);
        assert_non_routable("239.255.255.250", NonRoutable::Multicast);
    }

    #[test]
    fn test_validate_broadcast() {
        assert_non_routable("255.255.255.255", NonRoutable::Broadcast);
    }

    #[test]
    fn test_validate_boundaries_are_routable() {
        for raw in ["172.15.255.255", "172.32.0.0", "11.0.0.1", "223.255.255.255", "1.1.1.1"] {
            assert!(validate(raw).is_ok(), "{raw}");
        }
    }
}
