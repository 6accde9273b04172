pub mod collections;
pub mod descriptor;
pub mod filter;
pub mod namespace;
