pub mod appointments;
pub mod services;
pub mod shops;
pub mod token_counters;
