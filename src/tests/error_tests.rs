use crate::error::{ErrorContext, ZooError};
use crate::zoo_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    let zoo_result = result.context("Failed to read config file");
    assert!(zoo_result.is_err());

    match zoo_result {
        Err(ZooError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected ZooError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Animal not found");

    match result {
        Err(ZooError::Unknown(msg)) => assert_eq!(msg, "Animal not found"),
        _ => panic!("Expected ZooError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));

    let zoo_result = result.with_context(|| {
        format!("Failed to write config at path: {}", "/tmp/test.json")
    });

    match zoo_result {
        Err(ZooError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write config at path: /tmp/test.json"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected ZooError::Unknown"),
    }
}

#[test]
fn test_zoo_error_macro() {
    let error = zoo_error!(ConfigError, "No home directory");
    match error {
        ZooError::ConfigError(msg) => assert_eq!(msg, "No home directory"),
        _ => panic!("Expected ZooError::ConfigError"),
    }

    let error = zoo_error!(InvalidInput, "Unknown format: {}", "yaml");
    match error {
        ZooError::InvalidInput(msg) => assert_eq!(msg, "Unknown format: yaml"),
        _ => panic!("Expected ZooError::InvalidInput"),
    }
}

#[test]
fn test_store_not_provided_names_consumer() {
    let error = ZooError::StoreNotProvided("Map".to_string());
    let message = error.to_string();
    assert!(message.contains("'Map'"));
    assert!(message.contains("not provisioned"));
}

#[test]
fn test_io_error_converts() {
    fn read_missing() -> crate::error::ZooResult<String> {
        Ok(std::fs::read_to_string("/definitely/not/here.json")?)
    }
    assert!(matches!(read_missing(), Err(ZooError::IoError(_))));
}
