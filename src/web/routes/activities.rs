use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::database::activity_store::ActivityStore;
use crate::models::ActivityDirectory;
use crate::services::activities_service::{self, ActivityError};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        match &self {
            ActivityError::ActivityNotFound { activity } => {
                warn!(activity = %activity, "activity not found");
            }
            ActivityError::ParticipantNotFound { activity, email } => {
                warn!(activity = %activity, email = %email, "participant not found");
            }
        }
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

fn error_detail(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorDetail { detail })).into_response()
}

fn invalid_query(rejection: QueryRejection) -> Response {
    error_detail(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

fn invalid_path(rejection: PathRejection) -> Response {
    error_detail(rejection.status(), rejection.body_text())
}

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<ActivityDirectory> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    activity: Result<Path<String>, PathRejection>,
    State(store): State<ActivityStore>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Response {
    let Path(activity) = match activity {
        Ok(p) => p,
        Err(rejection) => return invalid_path(rejection),
    };
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return invalid_query(rejection),
    };

    match activities_service::signup(&store, &activity, &query.email).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn unregister_handler(
    activity: Result<Path<String>, PathRejection>,
    State(store): State<ActivityStore>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Response {
    let Path(activity) = match activity {
        Ok(p) => p,
        Err(rejection) => return invalid_path(rejection),
    };
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return invalid_query(rejection),
    };

    match activities_service::unregister(&store, &activity, &query.email).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => e.into_response(),
    }
}
