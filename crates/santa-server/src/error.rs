use crate::templates;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use santa_core::SantaError;

/// Shown when the visitor lands anywhere but a personal link.
pub const WRONG_LINK_MESSAGE: &str =
    "T'has equivocat de link! Torna a mirar el missatge del WhatsApp.";

const GENERIC_MESSAGE: &str = "Hi ha hagut un error inesperat. Torna-ho a provar més tard.";

// ---------------------------------------------------------------------------
// PageError — every failure becomes a rendered error page
// ---------------------------------------------------------------------------

/// Unified error type for the participant-facing pages.
///
/// Unlike an API, every failure here degrades to the error template with a
/// message in the participants' language; internal detail only goes to the
/// server log.
#[derive(Debug)]
pub struct PageError(pub anyhow::Error);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.downcast_ref::<SantaError>() {
            Some(e) => (status_for(e), user_message(e)),
            None => (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        (status, Html(templates::render_error(message))).into_response()
    }
}

impl<E> From<E> for PageError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

fn status_for(err: &SantaError) -> StatusCode {
    match err {
        SantaError::LinkNotFound(_) | SantaError::AssignmentMissing(_) => StatusCode::NOT_FOUND,
        SantaError::NotInitialized
        | SantaError::AssignmentsNotReady
        | SantaError::ConfigNotFound(_)
        | SantaError::TooFewParticipants(_)
        | SantaError::EmptyName(_)
        | SantaError::MissingPhone(_)
        | SantaError::DuplicateName(_) => StatusCode::BAD_REQUEST,
        SantaError::DataIntegrity(_)
        | SantaError::Notification(_)
        | SantaError::Io(_)
        | SantaError::Yaml(_)
        | SantaError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn user_message(err: &SantaError) -> &'static str {
    match err {
        SantaError::NotInitialized => "El joc encara no ha sigut inicialitzat.",
        SantaError::AssignmentsNotReady => "Les assignacions encara no estan preparades.",
        SantaError::LinkNotFound(_) => "Aquest link no és vàlid. Assegura't de copiar-lo sencer!",
        SantaError::AssignmentMissing(_) => {
            "No hem trobat la teua assignació. Contacta amb l'organitzador."
        }
        SantaError::DataIntegrity(_) => "Hi ha hagut un error buscant les dades.",
        _ => GENERIC_MESSAGE,
    }
}
