//! sea-orm entities owned by the accounts service.

pub mod accounts;
pub mod addresses;
pub mod one_time_codes;
