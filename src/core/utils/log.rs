//! Console logging
//!
//! In the browser messages go to the devtools console through `web_sys`.
//! Native builds (tests, tools) have no JS console to talk to, so the macro
//! only type-checks its arguments there.
//!
//! Usage:
//! ```rust
//! use ballpit_engine::console_log;
//!
//! let balls = 3;
//! console_log!("spawned {} balls", balls);
//! ```

/// `format!`-style logging to the JS console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::write(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
pub fn write(message: &str) {
    web_sys::console::log_1(&message.into());
}
