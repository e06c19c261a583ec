// src/config.rs

use crate::{
    db::{
        AgreementRepository, AnnouncementRepository, ApartmentRepository, CouponRepository,
        PaymentRepository, StatsRepository, UserRepository,
    },
    services::{AgreementService, CouponService, PaymentService, StripeClient},
};
use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,

    pub user_repo: UserRepository,
    pub apartment_repo: ApartmentRepository,
    pub agreement_repo: AgreementRepository,
    pub announcement_repo: AnnouncementRepository,
    pub payment_repo: PaymentRepository,
    pub coupon_repo: CouponRepository,
    pub stats_repo: StatsRepository,

    pub agreement_service: AgreementService,
    pub payment_service: PaymentService,
    pub coupon_service: CouponService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Credenciais obrigatórias são validadas ANTES de tentar conectar;
        // faltando alguma, a aplicação não sobe.
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let stripe_secret_key =
            env::var("STRIPE_SECRET_KEY").context("STRIPE_SECRET_KEY deve ser definida")?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let apartment_repo = ApartmentRepository::new(db_pool.clone());
        let agreement_repo = AgreementRepository::new(db_pool.clone());
        let announcement_repo = AnnouncementRepository::new(db_pool.clone());
        let payment_repo = PaymentRepository::new(db_pool.clone());
        let coupon_repo = CouponRepository::new(db_pool.clone());
        let stats_repo = StatsRepository::new(db_pool.clone());

        let stripe = StripeClient::new(&stripe_secret_key)?;

        let agreement_service = AgreementService::new(user_repo.clone(), agreement_repo.clone());
        let payment_service =
            PaymentService::new(payment_repo.clone(), agreement_repo.clone(), stripe);
        let coupon_service = CouponService::new(coupon_repo.clone());

        Ok(Self {
            db_pool,
            user_repo,
            apartment_repo,
            agreement_repo,
            announcement_repo,
            payment_repo,
            coupon_repo,
            stats_repo,
            agreement_service,
            payment_service,
            coupon_service,
        })
    }
}
