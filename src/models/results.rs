// src/models/results.rs

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

// Formatos de resultado que os frontends já consomem (herdados do driver
// de documentos da primeira versão do servidor).

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    // Sempre true: o insert já foi confirmado quando a resposta sai.
    // O campo existe porque o resultado do driver original o carregava.
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertResult {
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

// POST /users devolve insertedId nulo quando o e-mail já existe;
// o frontend decide pelo campo, não pelo status HTTP.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub inserted_id: Option<Uuid>,
}

// As duas contagens saem do rows_affected() do Postgres, que conta as
// linhas CASADAS pelo WHERE: um PATCH que regrava valores idênticos ainda
// reporta modifiedCount 1, diferente do driver de documentos original,
// que reportava 0 nesse caso.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserted_id_nulo_aparece_no_json() {
        let resp = CreateUserResponse {
            message: Some("usuário já existe".into()),
            inserted_id: None,
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert!(v["insertedId"].is_null());
        assert_eq!(v["message"], "usuário já existe");
    }

    #[test]
    fn insert_result_e_sempre_confirmado() {
        let v = serde_json::to_value(InsertResult::new(Uuid::new_v4())).unwrap();
        assert_eq!(v["acknowledged"], true);
        assert!(v.get("insertedId").is_some());
    }

    #[test]
    fn contagens_usam_camel_case() {
        let v = serde_json::to_value(DeleteResult { deleted_count: 2 }).unwrap();
        assert_eq!(v["deletedCount"], 2);

        let v = serde_json::to_value(UpdateResult {
            matched_count: 1,
            modified_count: 1,
        })
        .unwrap();
        assert_eq!(v["matchedCount"], 1);
        assert_eq!(v["modifiedCount"], 1);
    }
}
