//! Data collaborators - historical indicators and bilateral trade products

pub mod indicators;
pub mod products;
