use std::any::Any;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::panic::Location;
use std::path::PathBuf;
use chrono::Local;
use std::sync::Mutex;

use crate::constants::APP_DIR_NAME;
use crate::error::ZooResult;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

pub fn init_logging() -> ZooResult<PathBuf> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(APP_DIR_NAME)
        .join("logs");

    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("zoo-{}.log", Local::now().format("%Y%m%d-%H%M%S")));

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(log_file.clone());
    }

    log_info(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

pub fn log_panic_info(info: &std::panic::PanicHookInfo) {
    log_error(&panic_message(info.location(), info.payload()));

    let backtrace = std::backtrace::Backtrace::capture();
    log_debug(&format!("Backtrace:\n{}", backtrace));
}

pub fn panic_message(location: Option<&Location>, payload: &(dyn Any + Send)) -> String {
    let mut message = String::from("PANIC: ");

    if let Some(location) = location {
        message.push_str(&format!("at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = payload.downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = payload.downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }
    message
}

fn log_with_level(level: &str, message: &str) {
    let Ok(guard) = LOG_FILE.lock() else { return };
    if let Some(log_file) = guard.as_ref() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
        {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
        }
    }
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}
