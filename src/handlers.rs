pub mod agreements;
pub mod announcements;
pub mod apartments;
pub mod coupons;
pub mod payments;
pub mod stats;
pub mod users;
