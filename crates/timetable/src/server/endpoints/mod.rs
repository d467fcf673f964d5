pub mod status;
pub mod week;
