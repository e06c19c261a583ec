// src/docs.rs

use crate::handlers;
use crate::models;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Users ---
        handlers::users::create_user,
        handlers::users::get_user,
        handlers::users::list_users,
        handlers::users::update_user,
        handlers::users::member_profile,

        // --- Apartments ---
        handlers::apartments::list_apartments,

        // --- Agreements ---
        handlers::agreements::accept_agreement,
        handlers::agreements::create_cart,
        handlers::agreements::list_carts,
        handlers::agreements::delete_cart,
        handlers::agreements::agreement_details,
        handlers::agreements::create_view,
        handlers::agreements::list_views,
        handlers::agreements::delete_view,

        // --- Announcements ---
        handlers::announcements::create_announcement,
        handlers::announcements::list_announcements,

        // --- Payments ---
        handlers::payments::create_payment_intent,
        handlers::payments::create_payment,
        handlers::payments::list_payments,

        // --- Coupons ---
        handlers::coupons::list_coupons,
        handlers::coupons::create_coupon,
        handlers::coupons::update_coupon,
        handlers::coupons::delete_coupon,
        handlers::coupons::validate_coupon,

        // --- Admin ---
        handlers::stats::admin_stats,
    ),
    components(
        schemas(
            // --- Users ---
            models::user::UserRole,
            models::user::User,
            models::user::MemberProfile,
            handlers::users::CreateUserPayload,
            handlers::users::UpdateUserPayload,

            // --- Apartments ---
            models::apartment::Apartment,

            // --- Agreements ---
            models::agreement::CartStatus,
            models::agreement::AgreementCart,
            models::agreement::MemberAgreement,
            models::agreement::AgreementView,
            models::agreement::AcceptAgreementResponse,
            handlers::agreements::AcceptAgreementPayload,
            handlers::agreements::CreateCartPayload,
            handlers::agreements::CreateViewPayload,

            // --- Announcements ---
            models::announcement::Announcement,
            handlers::announcements::CreateAnnouncementPayload,

            // --- Payments ---
            models::payment::Payment,
            models::payment::PaymentIntentResponse,
            handlers::payments::PaymentIntentPayload,
            handlers::payments::CreatePaymentPayload,

            // --- Coupons ---
            models::coupon::Coupon,
            models::coupon::CreateCouponResponse,
            models::coupon::ValidateCouponResponse,
            handlers::coupons::CreateCouponPayload,
            handlers::coupons::UpdateCouponPayload,
            handlers::coupons::ValidateCouponPayload,

            // --- Resultados ---
            models::results::InsertResult,
            models::results::CreateUserResponse,
            models::results::UpdateResult,
            models::results::DeleteResult,
            models::stats::AdminStats,
        )
    ),
    tags(
        (name = "Users", description = "Usuários, papéis e perfil de membro"),
        (name = "Apartments", description = "Anúncios de apartamentos"),
        (name = "Agreements", description = "Pedidos de aluguel e aceitação de acordos"),
        (name = "Announcements", description = "Avisos do condomínio"),
        (name = "Payments", description = "Pagamentos e intents do gateway"),
        (name = "Coupons", description = "Cupons de desconto"),
        (name = "Admin", description = "Indicadores do painel do administrador")
    )
)]
pub struct ApiDoc;
