pub mod checksum;
pub mod hash;
