//! [`SiteProvisioner`](super::port::SiteProvisioner) adapters

pub mod spool;

pub use spool::SpoolProvisioner;
