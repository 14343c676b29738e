use jiff::Timestamp;
use shortwave_core as core;
use thiserror::Error;

tonic::include_proto!("shorts.v1");

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("short link expiry is malformed: {0}")]
    InvalidExpiry(String),
}

impl From<core::ShortLink> for ShortLink {
    fn from(link: core::ShortLink) -> Self {
        Self {
            hash: link.hash,
            original_url: link.original_url,
            owner_id: link.owner_id,
            // 0 stands for "no expiry recorded" on the wire.
            expires_at: link.expires_at.map_or(0, |at| at.as_second()),
        }
    }
}

impl TryFrom<ShortLink> for core::ShortLink {
    type Error = ConversionError;

    fn try_from(link: ShortLink) -> Result<Self, Self::Error> {
        let expires_at = match link.expires_at {
            0 => None,
            seconds => Some(Timestamp::from_second(seconds).map_err(|e| {
                ConversionError::InvalidExpiry(format!("invalid unix seconds '{seconds}': {e}"))
            })?),
        };

        Ok(Self {
            hash: link.hash,
            original_url: link.original_url,
            owner_id: link.owner_id,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    #[test]
    fn round_trips_an_expiring_link() {
        let expires_at = Timestamp::now() + SignedDuration::from_hours(1);
        let link = core::ShortLink {
            hash: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            owner_id: "user-1".to_string(),
            expires_at: Some(expires_at),
        };

        let wire = ShortLink::from(link.clone());
        assert_eq!(wire.expires_at, expires_at.as_second());

        let back = core::ShortLink::try_from(wire).expect("conversion should succeed");
        assert_eq!(back.hash, link.hash);
        assert_eq!(back.original_url, link.original_url);
        assert_eq!(back.owner_id, link.owner_id);
        assert_eq!(
            back.expires_at.map(|at| at.as_second()),
            Some(expires_at.as_second())
        );
    }

    #[test]
    fn zero_expiry_maps_to_none() {
        let wire = ShortLink {
            hash: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            owner_id: "user-1".to_string(),
            expires_at: 0,
        };

        let link = core::ShortLink::try_from(wire).expect("conversion should succeed");
        assert!(link.expires_at.is_none());
    }
}
