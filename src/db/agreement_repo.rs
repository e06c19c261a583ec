// src/db/agreement_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::agreement::{AgreementCart, AgreementView, CartStatus, MemberAgreement},
};

// Repositório dos três agregados do fluxo de acordo: carrinhos (pedidos
// pendentes), views (aceitos aguardando pagamento) e os detalhes do membro.
#[derive(Clone)]
pub struct AgreementRepository {
    pool: PgPool,
}

impl AgreementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CARRINHOS DE ACORDO (pedidos de aluguel)
    // =========================================================================

    pub async fn create_cart(
        &self,
        email: &str,
        menu_id: &str,
        floor_no: i32,
        block_name: &str,
        apartment_no: &str,
        rent: Decimal,
    ) -> Result<AgreementCart, AppError> {
        let cart = sqlx::query_as::<_, AgreementCart>(
            r#"
            INSERT INTO agreement_carts (email, menu_id, floor_no, block_name, apartment_no, rent)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(menu_id)
        .bind(floor_no)
        .bind(block_name)
        .bind(apartment_no)
        .bind(rent)
        .fetch_one(&self.pool)
        .await?;
        Ok(cart)
    }

    // Lista com filtro opcional por e-mail (as duas variantes do frontend usam a mesma rota)
    pub async fn list_carts(&self, email: Option<&str>) -> Result<Vec<AgreementCart>, AppError> {
        let carts = match email {
            Some(email) => {
                sqlx::query_as::<_, AgreementCart>(
                    "SELECT * FROM agreement_carts WHERE email = $1 ORDER BY created_at DESC",
                )
                .bind(email)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, AgreementCart>(
                    "SELECT * FROM agreement_carts ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(carts)
    }

    pub async fn delete_cart(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM agreement_carts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // GET /agreementDetails/{id}: o frontend busca pelo id do anúncio (menu_id),
    // não pela chave primária do carrinho.
    pub async fn find_cart_by_menu_id(
        &self,
        menu_id: &str,
    ) -> Result<Option<AgreementCart>, AppError> {
        let cart = sqlx::query_as::<_, AgreementCart>(
            "SELECT * FROM agreement_carts WHERE menu_id = $1 LIMIT 1",
        )
        .bind(menu_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(cart)
    }

    // Passo da aceitação; genérico sobre Executor para compor na transação.
    // Última escrita vence no nível da linha: não há guarda de concorrência
    // entre duas aceitações simultâneas do mesmo carrinho.
    pub async fn set_cart_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: CartStatus,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE agreement_carts SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  DETALHES DO MEMBRO
    // =========================================================================

    pub async fn insert_member_agreement<'e, E>(
        &self,
        executor: E,
        email: &str,
        agreement_date: DateTime<Utc>,
        floor_no: i32,
        block_name: &str,
        apartment_no: &str,
        rent: Decimal,
    ) -> Result<MemberAgreement, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let agreement = sqlx::query_as::<_, MemberAgreement>(
            r#"
            INSERT INTO member_agreements (email, agreement_date, floor_no, block_name, apartment_no, rent)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(agreement_date)
        .bind(floor_no)
        .bind(block_name)
        .bind(apartment_no)
        .bind(rent)
        .fetch_one(executor)
        .await?;
        Ok(agreement)
    }

    // =========================================================================
    //  VIEWS DE ACORDO (aguardando pagamento)
    // =========================================================================

    pub async fn create_view(
        &self,
        email: &str,
        floor_no: i32,
        block_name: &str,
        apartment_no: &str,
        rent: Decimal,
    ) -> Result<AgreementView, AppError> {
        let view = sqlx::query_as::<_, AgreementView>(
            r#"
            INSERT INTO agreement_views (email, floor_no, block_name, apartment_no, rent)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(floor_no)
        .bind(block_name)
        .bind(apartment_no)
        .bind(rent)
        .fetch_one(&self.pool)
        .await?;
        Ok(view)
    }

    pub async fn list_views(&self, email: &str) -> Result<Vec<AgreementView>, AppError> {
        let views = sqlx::query_as::<_, AgreementView>(
            "SELECT * FROM agreement_views WHERE email = $1 ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(views)
    }

    pub async fn delete_view(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM agreement_views WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // Limpeza disparada pelo pagamento; roda dentro da transação do serviço.
    pub async fn delete_views_by_email<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM agreement_views WHERE email = $1")
            .bind(email)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    fn rent(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[sqlx::test]
    async fn carrinho_apagado_nao_volta_na_listagem(pool: PgPool) {
        let repo = AgreementRepository::new(pool);

        let first = repo
            .create_cart("maria@email.com", "apt-1", 2, "A", "201", rent("850.00"))
            .await
            .unwrap();
        let second = repo
            .create_cart("maria@email.com", "apt-2", 3, "B", "302", rent("920.00"))
            .await
            .unwrap();

        let deleted = repo.delete_cart(first.id).await.unwrap();
        assert_eq!(deleted, 1);

        // Nem a listagem filtrada nem a completa devolvem o id apagado
        let filtered = repo.list_carts(Some("maria@email.com")).await.unwrap();
        assert!(filtered.iter().all(|c| c.id != first.id));
        assert!(filtered.iter().any(|c| c.id == second.id));

        let all = repo.list_carts(None).await.unwrap();
        assert!(all.iter().all(|c| c.id != first.id));
    }

    #[sqlx::test]
    async fn detalhes_sao_buscados_pelo_menu_id(pool: PgPool) {
        let repo = AgreementRepository::new(pool);

        let cart = repo
            .create_cart("joao@email.com", "apt-7", 1, "A", "103", rent("700.00"))
            .await
            .unwrap();

        let found = repo.find_cart_by_menu_id("apt-7").await.unwrap().unwrap();
        assert_eq!(found.id, cart.id);

        assert!(repo.find_cart_by_menu_id("apt-99").await.unwrap().is_none());
    }
}
