mod api;

pub use self::api::ApiError;
