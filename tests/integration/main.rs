//! Integration tests against per-test in-memory databases

mod common;
mod dao_tests;
mod repository_tests;
