pub mod date_validator;
