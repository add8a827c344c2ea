// Unit tests against the public countdown API

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod board_tests;
mod countdown_tests;
