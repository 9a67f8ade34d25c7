mod engine_tests;
mod property_tests;
