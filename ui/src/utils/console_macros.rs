/// Macros for properly formatted console logging.
///
/// In the browser these wrap `gloo_console` and prefix each message with the
/// `Date.now()` timestamp. On native targets (unit tests, tooling) the same
/// call sites forward to `tracing`, since the browser console bindings are not
/// callable outside wasm.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($console:ident, $tracing:ident, $message:expr) => {{
        let message: String = $message;
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::$console!(format!("[{}] {}", js_sys::Date::now(), message));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::$tracing!("{}", message);
        }
    }};
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::__console_emit!(info, info, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::__console_emit!(warn, warn, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::__console_emit!(error, error, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::__console_emit!(debug, debug, format!($($arg)*))
    };
}
