//src/main.rs

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Usuários e perfil de membro
    let user_routes = Router::new()
        .route(
            "/users",
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route("/users/{email}", get(handlers::users::get_user))
        .route("/users/update/{email}", patch(handlers::users::update_user))
        .route(
            "/memberProfile/{email}",
            get(handlers::users::member_profile),
        );

    // Fluxo de acordo: carrinhos, aceitação e views aguardando pagamento.
    // Exatamente UM handler por rota; a aceitação inclui o insert dos
    // detalhes do membro.
    let agreement_routes = Router::new()
        .route(
            "/agreement/{id}",
            patch(handlers::agreements::accept_agreement),
        )
        .route(
            "/agreementCarts",
            post(handlers::agreements::create_cart).get(handlers::agreements::list_carts),
        )
        .route(
            "/agreementCarts/{id}",
            delete(handlers::agreements::delete_cart),
        )
        .route(
            "/agreementDetails/{id}",
            get(handlers::agreements::agreement_details),
        )
        .route(
            "/agreementView",
            post(handlers::agreements::create_view).get(handlers::agreements::list_views),
        )
        .route(
            "/agreementView/{id}",
            delete(handlers::agreements::delete_view),
        );

    let payment_routes = Router::new()
        .route(
            "/create-payment-intent",
            post(handlers::payments::create_payment_intent),
        )
        .route(
            "/payments",
            post(handlers::payments::create_payment).get(handlers::payments::list_payments),
        );

    let coupon_routes = Router::new()
        .route(
            "/coupons",
            get(handlers::coupons::list_coupons).post(handlers::coupons::create_coupon),
        )
        .route(
            "/coupons/{id}",
            put(handlers::coupons::update_coupon).delete(handlers::coupons::delete_coupon),
        )
        .route(
            "/validate-coupon",
            post(handlers::coupons::validate_coupon),
        );

    // Combina tudo no router principal
    let app = Router::new()
        .route(
            "/",
            get(|| async { "Servidor de Gestão de Condomínio está no ar" }),
        )
        .route("/apartmentData", get(handlers::apartments::list_apartments))
        .route(
            "/announcement",
            post(handlers::announcements::create_announcement)
                .get(handlers::announcements::list_announcements),
        )
        .route("/admin-stats", get(handlers::stats::admin_stats))
        .merge(user_routes)
        .merge(agreement_routes)
        .merge(payment_routes)
        .merge(coupon_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // O frontend é servido de outra origem, como no servidor original
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Inicia o servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
