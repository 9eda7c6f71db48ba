pub mod case_store;
pub mod stripe_service;
