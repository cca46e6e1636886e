mod myconfig;

pub use self::myconfig::{Config, StarlingConfig};
