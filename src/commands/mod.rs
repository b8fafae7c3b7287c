pub mod config;
pub mod password_gen;
pub mod testpass;
