//! Unit tests for showboard.

mod carousel_tests;
mod contact_tests;
mod resolver_tests;
mod watcher_tests;
