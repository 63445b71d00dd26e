pub mod arp;
pub mod mac;
