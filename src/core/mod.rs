pub mod activity;
pub mod capture;
pub mod session;
pub mod store;
