// src/models/linkedin.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters received on the OAuth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Token response relayed verbatim from the provider's token endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// The authenticated member as returned by the provider's identity endpoint.
/// Only the member id is consumed; it seeds the author URN of a share.
#[derive(Debug, Deserialize)]
pub struct LinkedInUser {
    pub id: String,
}

/// Request body for the share endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct ShareRequest {
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,

    /// Share text, capped at the provider's commentary limit.
    #[serde(default)]
    #[validate(length(max = 3000, message = "Message must be 3000 characters or fewer."))]
    pub message: Option<String>,
}

/// UGC post body for the provider's content-publishing endpoint.
/// Field names follow the provider's wire format exactly.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UgcPost {
    pub author: String,
    pub lifecycle_state: String,
    pub specific_content: SpecificContent,
    pub visibility: Visibility,
}

#[derive(Debug, Serialize)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent {
    pub share_commentary: ShareCommentary,
    pub share_media_category: String,
}

#[derive(Debug, Serialize)]
pub struct ShareCommentary {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: String,
}

impl UgcPost {
    /// Builds a published, public-visibility, text-only share authored by
    /// the given member.
    pub fn text_share(member_id: &str, message: &str) -> Self {
        Self {
            author: format!("urn:li:person:{}", member_id),
            lifecycle_state: "PUBLISHED".to_string(),
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary {
                        text: message.to_string(),
                    },
                    share_media_category: "NONE".to_string(),
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC".to_string(),
            },
        }
    }
}
