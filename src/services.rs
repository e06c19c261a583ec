pub mod agreement_service;
pub use agreement_service::AgreementService;
pub mod coupon_service;
pub use coupon_service::CouponService;
pub mod payment_service;
pub use payment_service::PaymentService;
pub mod stripe;
pub use stripe::StripeClient;
