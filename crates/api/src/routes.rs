pub mod admin;
pub mod block;
pub mod health;
pub mod reservation;
pub mod week;
