use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Perfil de membro não encontrado")]
    ProfileNotFound,

    #[error("Cupom não encontrado")]
    CouponNotFound,

    #[error("Cupom indisponível")]
    CouponNotAvailable,

    #[error("Valor de pagamento inválido")]
    InvalidAmount,

    // O gateway respondeu com erro ou ficou inacessível
    #[error("Erro no gateway de pagamento: {0}")]
    PaymentGateway(String),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::ProfileNotFound => {
                (StatusCode::NOT_FOUND, "Perfil de membro não encontrado.")
            }
            AppError::CouponNotFound => (StatusCode::NOT_FOUND, "Cupom não encontrado."),
            AppError::CouponNotAvailable => (StatusCode::BAD_REQUEST, "Cupom indisponível."),
            AppError::InvalidAmount => (
                StatusCode::BAD_REQUEST,
                "O valor do pagamento deve ser maior que zero.",
            ),
            AppError::PaymentGateway(ref detail) => {
                tracing::error!("Erro no gateway de pagamento: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    "Falha ao comunicar com o gateway de pagamento.",
                )
            }

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente recebe só o genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.",
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condicoes_de_dominio_viram_os_status_corretos() {
        assert_eq!(
            AppError::ProfileNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::CouponNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::CouponNotAvailable.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidAmount.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PaymentGateway("timeout".into())
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn erro_de_infraestrutura_vira_500_generico() {
        let resp = AppError::DatabaseError(sqlx::Error::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
