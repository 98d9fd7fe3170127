// src/models/certificate.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the certificate download endpoint.
///
/// Both fields stay optional at the type level so a missing one maps to the
/// endpoint's fixed 400 message instead of a framework rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct DownloadParams {
    #[validate(length(max = 100, message = "Name must be 100 characters or fewer."))]
    pub name: Option<String>,

    pub percent: Option<String>,
}

/// Response body carrying the public URL of a generated certificate.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
}
