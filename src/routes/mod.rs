pub mod contact;
pub mod payments;
