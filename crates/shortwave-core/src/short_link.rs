use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// Default lifetime of a short link: one year from creation.
pub const DEFAULT_EXPIRY_HORIZON: SignedDuration = SignedDuration::from_hours(24 * 365);

/// A stored short link.
///
/// A `ShortLink` is only ever constructed once its hash has been allocated
/// by the key service; a record is either fully persisted or absent.
/// All fields are immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    /// The unique identifier allocated by the key service. Doubles as the
    /// repository primary key and the redirection path segment.
    pub hash: String,
    /// The destination URL.
    pub original_url: String,
    /// The principal that created the link. Listings are scoped to it.
    pub owner_id: String,
    /// When redirection stops serving the link.
    pub expires_at: Option<Timestamp>,
}

impl ShortLink {
    /// Whether the link has expired as of now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Timestamp::now())
    }

    /// Whether the link has expired as of `now`.
    ///
    /// A link without an expiry is treated as expired: absence of expiry
    /// data must never be read as "never expires".
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        match self.expires_at {
            None => true,
            Some(expires_at) => expires_at <= now,
        }
    }
}
