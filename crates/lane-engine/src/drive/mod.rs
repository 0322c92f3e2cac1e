//! The car-on-a-road game shared by both demos.

pub mod config;
pub mod game;
pub mod track;
