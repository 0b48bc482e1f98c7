pub mod role_expiry;
