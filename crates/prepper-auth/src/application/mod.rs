pub mod login;
pub mod token_store;
