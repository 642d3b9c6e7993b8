mod length_validation_tests;
mod smoke_tests;
