pub mod admin;
pub mod block;
pub mod reservation;
pub mod week;
