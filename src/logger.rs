use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

#[macro_export]
macro_rules! poller_info {
    ($($arg:tt)*) => {
        info!(target: "poller", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! poller_warn {
    ($($arg:tt)*) => {
        warn!(target: "poller", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! poller_error {
    ($($arg:tt)*) => {
        error!(target: "poller", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! client_info {
    ($($arg:tt)*) => {
        info!(target: "client", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! display_info {
    ($($arg:tt)*) => {
        info!(target: "display", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! server_info {
    ($($arg:tt)*) => {
        info!(target: "server", "{}", format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! server_error {
    ($($arg:tt)*) => {
        error!(target: "server", "{}", format_args!($($arg)*));
    };
}

pub fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            // Prepend prefix based on the log target
            let prefix = match record.target() {
                "poller" => "[POLLER]",
                "client" => "[CLIENT]",
                "display" => "[DISPLAY]",
                "server" => "[SERVER]",
                _ => "[GENERAL]",
            };
            writeln!(
                buf,
                "{} [{}] {}",
                prefix,
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();
}
