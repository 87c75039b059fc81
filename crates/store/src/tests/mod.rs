mod auth_tests;
mod helpers;
mod write_tests;
