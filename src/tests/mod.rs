mod config_tests;
mod error_tests;
mod formatting_tests;
mod logging_tests;
mod routes_tests;
mod store_tests;
mod theme_tests;
