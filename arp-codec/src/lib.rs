mod arp;
pub use self::arp::*;

mod error;
pub use self::error::*;
