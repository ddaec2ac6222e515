use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("App store not provisioned: '{0}' was used outside a provisioned session scope")]
    StoreNotProvided(String),

    #[error("App store already provisioned for this session")]
    StoreAlreadyProvided,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type ZooResult<T> = Result<T, ZooError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ZooResult<T>;
    fn with_context<F>(self, f: F) -> ZooResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ZooResult<T> {
        self.map_err(|e| ZooError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ZooResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ZooError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ZooResult<T> {
        self.ok_or_else(|| ZooError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ZooResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ZooError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! zoo_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::ZooError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::ZooError::$error_type(format!($fmt, $($arg)*))
    };
}
