pub mod account_store;
pub mod account_repo;
#[cfg(test)]
pub mod memory_store;

pub use account_store::AccountStore;
pub use account_repo::AccountRepository;
#[cfg(test)]
pub use memory_store::InMemoryAccountStore;
