mod executor;

pub use self::executor::HttpExecutor;
