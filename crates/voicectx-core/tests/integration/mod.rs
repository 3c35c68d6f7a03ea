mod config_tests;
mod session_tests;
mod translation_tests;
