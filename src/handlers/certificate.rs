// src/handlers/certificate.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::certificate::{DownloadParams, DownloadResponse},
    store::CertificateStore,
    utils::pdf::render_certificate,
};

/// Generates a completion certificate and returns its download URL.
///
/// Renders the PDF, writes it into the certificate store under a
/// name-derived file name (overwriting any previous one), and responds
/// with the public URL the file is served from.
pub async fn download(
    State(store): State<CertificateStore>,
    State(config): State<Config>,
    Query(params): Query<DownloadParams>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = params.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let (name, percent) = match (&params.name, &params.percent) {
        (Some(name), Some(percent)) if !name.trim().is_empty() && !percent.trim().is_empty() => {
            (name.trim(), percent.trim())
        }
        _ => {
            return Err(AppError::BadRequest(
                "Name and percent are required.".to_string(),
            ));
        }
    };

    match percent.parse::<f64>() {
        Ok(value) if value.is_finite() => {}
        _ => {
            return Err(AppError::BadRequest(
                "Percent must be a number.".to_string(),
            ));
        }
    }

    let document = render_certificate(name, percent)?;

    let file_name = store.file_name_for(name);
    store.save(&file_name, &document).await?;

    tracing::info!("Issued certificate for {} ({}%)", name, percent);

    let file_url = format!("{}/certificates/{}", config.public_base_url, file_name);
    Ok(Json(DownloadResponse { file_url }))
}
