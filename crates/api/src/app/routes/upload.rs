use axum::{
    extract::Multipart,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use ajaxlab_core::DomainError;

use crate::app::errors;
use crate::context::CurrentIdentity;

pub const FILE_FIELD: &str = "myFile";
pub const DESCRIPTION_FIELD: &str = "description";

/// Accept one file plus a description. Contents are counted, not kept.
pub async fn upload(identity: CurrentIdentity, mut multipart: Multipart) -> Response {
    let mut file: Option<(String, usize)> = None;
    let mut description: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_multipart", e.body_text()),
        };

        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let name = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => file = Some((name, bytes.len())),
                    Err(e) => {
                        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_multipart", e.body_text());
                    }
                }
            }
            Some(DESCRIPTION_FIELD) => match field.text().await {
                Ok(text) => description = Some(text),
                Err(e) => {
                    return errors::json_error(StatusCode::BAD_REQUEST, "invalid_multipart", e.body_text());
                }
            },
            _ => {}
        }
    }

    let Some((file_name, size)) = file else {
        return errors::domain_error_to_response(DomainError::validation(format!("{FILE_FIELD} is required")));
    };
    let Some(description) = description else {
        return errors::domain_error_to_response(DomainError::validation(format!(
            "{DESCRIPTION_FIELD} is required"
        )));
    };

    tracing::info!(
        username = %identity.username(),
        file_name = %file_name,
        size,
        description = %description,
        "upload received"
    );

    format!("Upload received: {file_name}").into_response()
}
