mod decode;
mod logs;
mod validate_status;

pub use self::decode::decode;
pub use self::logs::Logger;
pub use self::validate_status::{SUCCESS_STATUS, validate_status};
