mod endpoint;
mod window;

pub use self::endpoint::Endpoint;
pub use self::window::TimeWindow;
