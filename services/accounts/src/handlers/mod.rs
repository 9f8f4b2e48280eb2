pub mod address;
pub mod health;
pub mod password;
pub mod profile;
pub mod session;
pub mod signup;
