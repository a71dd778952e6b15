//! Domain types for the dealership inventory.

pub mod car;
pub mod report;
pub mod sale;

pub use car::{Car, CarUpdate, NewCar};
pub use sale::{NewSale, Sale, SaleUpdate, SaleWithCar};
