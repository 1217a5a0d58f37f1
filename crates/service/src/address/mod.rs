//! Address entries: storage seam, in-memory store and the application service.

pub mod repository;
pub mod memory;
pub mod service;

pub use models::address::{AddressInput, Model as Address};
pub use repository::{AddressRepository, SeaOrmAddressRepository};
pub use memory::InMemoryAddressRepository;
pub use service::AddressService;
