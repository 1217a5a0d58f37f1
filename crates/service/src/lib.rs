//! Service layer for the address book.
//! - Coordinate validation and proximity search live here, above storage.
//! - Storage is reached through the `AddressRepository` trait.

pub mod errors;
pub mod address;
#[cfg(test)]
pub mod test_support;
