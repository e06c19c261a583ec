// src/services/agreement_service.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AgreementRepository, UserRepository},
    models::{agreement::CartStatus, user::UserRole},
};

#[derive(Clone)]
pub struct AgreementService {
    user_repo: UserRepository,
    agreement_repo: AgreementRepository,
}

impl AgreementService {
    pub fn new(user_repo: UserRepository, agreement_repo: AgreementRepository) -> Self {
        Self {
            user_repo,
            agreement_repo,
        }
    }

    // Aceitação do acordo: três escritas numa ÚNICA transação.
    //   1. atualiza o papel do usuário (por e-mail)
    //   2. atualiza o status do carrinho (por id)
    //   3. insere os detalhes do acordo do membro
    // Falha parcial desfaz tudo. O retorno segue o contrato do frontend:
    // sucesso se a escrita 1 ou a 2 modificou alguma linha.
    //
    // Duas aceitações concorrentes do mesmo carrinho não são serializadas
    // entre si: cada uma é atômica, mas a última a commitar vence no nível
    // da linha, e cada chamada insere seus próprios detalhes de membro.
    #[allow(clippy::too_many_arguments)]
    pub async fn accept_agreement(
        &self,
        pool: &PgPool,
        cart_id: Uuid,
        email: &str,
        role: UserRole,
        status: CartStatus,
        agreement_date: DateTime<Utc>,
        floor_no: i32,
        block_name: &str,
        apartment_no: &str,
        rent: Decimal,
    ) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;

        let user_rows = self.user_repo.set_role(&mut *tx, email, role).await?;

        let cart_rows = self
            .agreement_repo
            .set_cart_status(&mut *tx, cart_id, status)
            .await?;

        self.agreement_repo
            .insert_member_agreement(
                &mut *tx,
                email,
                agreement_date,
                floor_no,
                block_name,
                apartment_no,
                rent,
            )
            .await?;

        tx.commit().await?;

        Ok(user_rows > 0 || cart_rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    fn rent(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    async fn setup(pool: &PgPool) -> (AgreementService, AgreementRepository, Uuid) {
        let user_repo = UserRepository::new(pool.clone());
        let agreement_repo = AgreementRepository::new(pool.clone());

        user_repo
            .create("maria@email.com", Some("Maria"), None, UserRole::User)
            .await
            .unwrap();
        let cart = agreement_repo
            .create_cart("maria@email.com", "apt-1", 3, "B", "302", rent("850.00"))
            .await
            .unwrap();

        (
            AgreementService::new(user_repo, agreement_repo.clone()),
            agreement_repo,
            cart.id,
        )
    }

    #[sqlx::test]
    async fn aceitacao_atualiza_papel_status_e_insere_detalhes(pool: PgPool) {
        let (service, agreement_repo, cart_id) = setup(&pool).await;

        let modified = service
            .accept_agreement(
                &pool,
                cart_id,
                "maria@email.com",
                UserRole::Member,
                CartStatus::Checked,
                chrono::Utc::now(),
                3,
                "B",
                "302",
                rent("850.00"),
            )
            .await
            .unwrap();
        assert!(modified);

        let carts = agreement_repo.list_carts(Some("maria@email.com")).await.unwrap();
        assert_eq!(carts[0].status, CartStatus::Checked);

        let details: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM member_agreements WHERE email = $1")
                .bind("maria@email.com")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(details, 1);
    }

    // Duas aceitações simultâneas do mesmo carrinho: cada uma é atômica,
    // mas não há guarda entre elas. A linha final reflete UMA das duas
    // escritas (última a commitar vence), nunca uma mistura, e cada
    // chamada insere seus próprios detalhes de membro.
    #[sqlx::test]
    async fn aceitacoes_concorrentes_ultima_escrita_vence(pool: PgPool) {
        let (service, agreement_repo, cart_id) = setup(&pool).await;
        let agreement_date = chrono::Utc::now();

        let (first, second) = tokio::join!(
            service.accept_agreement(
                &pool,
                cart_id,
                "maria@email.com",
                UserRole::Member,
                CartStatus::Checked,
                agreement_date,
                3,
                "B",
                "302",
                rent("850.00"),
            ),
            service.accept_agreement(
                &pool,
                cart_id,
                "maria@email.com",
                UserRole::Member,
                CartStatus::Pending,
                agreement_date,
                3,
                "B",
                "302",
                rent("850.00"),
            ),
        );
        assert!(first.unwrap());
        assert!(second.unwrap());

        let carts = agreement_repo.list_carts(Some("maria@email.com")).await.unwrap();
        let status = carts[0].status;
        assert!(status == CartStatus::Checked || status == CartStatus::Pending);

        let details: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM member_agreements WHERE email = $1")
                .bind("maria@email.com")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(details, 2);
    }

    #[sqlx::test]
    async fn aceitacao_sem_correspondencia_nao_reporta_modificacao(pool: PgPool) {
        let (service, _, _) = setup(&pool).await;

        // Carrinho inexistente e e-mail desconhecido: nenhuma das duas
        // primeiras escritas casa uma linha
        let modified = service
            .accept_agreement(
                &pool,
                Uuid::new_v4(),
                "ninguem@email.com",
                UserRole::Member,
                CartStatus::Checked,
                chrono::Utc::now(),
                1,
                "A",
                "101",
                rent("500.00"),
            )
            .await
            .unwrap();
        assert!(!modified);
    }
}
