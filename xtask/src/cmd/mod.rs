pub mod check_data;
pub mod preflight;
