//! Type profile API endpoint.

use axum::Json;
use axum::extract::Path;
use serde::Serialize;
use vibes_catalog::{CardColors, TypeCode, TypeGroup, TypeProfile, profile};

use crate::error::ServerError;

/// Response for GET /api/types/{code}.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TypeResponse {
    profile: &'static TypeProfile,
    group: TypeGroup,
    card_colors: CardColors,
}

impl From<TypeCode> for TypeResponse {
    fn from(code: TypeCode) -> Self {
        let group = code.group();
        Self {
            profile: profile(code),
            group,
            card_colors: group.card_colors(),
        }
    }
}

/// Handle GET /api/types/{code}.
pub(crate) async fn get_type(Path(code): Path<String>) -> Result<Json<TypeResponse>, ServerError> {
    let code: TypeCode = code.parse()?;
    Ok(Json(TypeResponse::from(code)))
}
