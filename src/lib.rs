//! Menu Harmonization Engine
//!
//! Turns recognized restaurant menu text into typed menu items and recommends
//! an entree, main course and beverage harmonized with the diner's food
//! preference and allergies, adjusted for Brazilian regional cuisine.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::build_router;
