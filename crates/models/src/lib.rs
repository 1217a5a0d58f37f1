pub mod errors;
pub mod db;
pub mod geo;
pub mod address;
