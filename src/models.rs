pub mod agreement;
pub mod announcement;
pub mod apartment;
pub mod coupon;
pub mod payment;
pub mod results;
pub mod stats;
pub mod user;
