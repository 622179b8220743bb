//! The regional simulation - countries, indicators, trade, turn pipeline

pub mod country;
pub mod decisions;
pub mod events;
pub mod game;
pub mod indicators;
pub mod spillover;
pub mod systems;
pub mod trade;
pub mod world;
