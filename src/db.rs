pub mod user_repo;
pub use user_repo::UserRepository;
pub mod apartment_repo;
pub use apartment_repo::ApartmentRepository;
pub mod agreement_repo;
pub use agreement_repo::AgreementRepository;
pub mod announcement_repo;
pub use announcement_repo::AnnouncementRepository;
pub mod payment_repo;
pub use payment_repo::PaymentRepository;
pub mod coupon_repo;
pub use coupon_repo::CouponRepository;
pub mod stats_repo;
pub use stats_repo::StatsRepository;
