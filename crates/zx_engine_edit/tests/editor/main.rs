//! Integration tests for the editor state

mod animation_tests;
mod drawing_tests;
mod helpers;
mod level_tests;
mod project_tests;
