pub mod address;
pub mod login;
pub mod otp;
pub mod password;
pub mod profile;
pub mod signup;
