//! DTOs for short URL endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::url_service::ALIAS_REGEX;
use crate::domain::entities::Url;

/// Request to create a short URL under a caller-chosen alias.
///
/// Missing fields deserialize as empty strings so they are reported as
/// validation errors rather than JSON rejections.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAliasRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "Alias must be 1-64 characters"))]
    #[validate(regex(
        path = *ALIAS_REGEX,
        message = "Alias can only contain letters, digits, hyphens and underscores"
    ))]
    pub alias: String,

    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    pub destination: String,
}

/// Request to create a short URL with a derived identifier.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    pub destination: String,
}

/// Response returned after a short URL is created.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// List entry. Creation time is not exposed.
#[derive(Debug, Serialize)]
pub struct UrlSummary {
    pub id: String,
    pub destination: String,
}

impl From<Url> for UrlSummary {
    fn from(url: Url) -> Self {
        Self {
            id: url.id,
            destination: url.destination,
        }
    }
}

/// Full representation of a single short URL.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub id: String,
    pub destination: String,
    pub created: DateTime<Utc>,
}

impl From<Url> for UrlResponse {
    fn from(url: Url) -> Self {
        Self {
            id: url.id,
            destination: url.destination,
            created: url.created,
        }
    }
}
