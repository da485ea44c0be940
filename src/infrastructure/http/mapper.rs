//! Wire-to-domain mapping.

use crate::domain::entities::ShortenedUrl;
use crate::infrastructure::http::dto::AliasResponse;

/// Maps a decoded alias response into the domain entity.
///
/// Pure and total: malformed bodies never reach this point, they are rejected
/// as [`crate::error::ShortenError::DecodeFailure`] during decoding.
pub fn to_entity(dto: AliasResponse) -> ShortenedUrl {
    ShortenedUrl {
        alias: dto.alias,
        original_url: dto.links.self_url,
        short_url: dto.links.short,
    }
}
