// src/models/user.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE user_role do banco.
// 'member' é concedido quando o acordo do morador é aceito.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Member,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,

    // O frontend usa a grafia do Firebase ("photoURL")
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,

    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Perfil de membro: junção do usuário com o acordo mais recente.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub name: Option<String>,
    pub email: String,

    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,

    pub agreement_date: DateTime<Utc>,

    #[serde(rename = "floor")]
    pub floor_no: i32,

    #[serde(rename = "block")]
    pub block_name: String,

    #[serde(rename = "room")]
    pub apartment_no: String,

    pub rent: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializa_em_minusculas() {
        assert_eq!(serde_json::to_value(UserRole::Member).unwrap(), "member");
        assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), "admin");
    }

    #[test]
    fn perfil_usa_as_chaves_do_frontend() {
        let profile = MemberProfile {
            name: Some("Maria".into()),
            email: "maria@email.com".into(),
            photo_url: None,
            agreement_date: Utc::now(),
            floor_no: 3,
            block_name: "B".into(),
            apartment_no: "302".into(),
            rent: Decimal::new(85000, 2),
        };
        let v = serde_json::to_value(&profile).unwrap();
        assert!(v.get("photoURL").is_some());
        assert_eq!(v["floor"], 3);
        assert_eq!(v["block"], "B");
        assert_eq!(v["room"], "302");
        assert!(v.get("agreementDate").is_some());
    }
}
