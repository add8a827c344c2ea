// Service module exports

pub mod board;
pub mod catalog;
pub mod countdown;
pub mod settings;
