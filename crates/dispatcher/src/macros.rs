//! Logging macros
//!
//! Both macros capture the full call site (file, line, column and enclosing
//! function) and discard the dispatch result: logging is best-effort and
//! never interrupts the caller. The `#[track_caller]` methods on
//! [`Dispatcher`](crate::Dispatcher) return the result but render the
//! function as `<unknown>`; pair [`Dispatcher::dispatch_at`](crate::Dispatcher::dispatch_at)
//! with [`call_site!`](crate::contracts::call_site) to get both.

/// Log through the process-wide dispatcher
///
/// # Usage
/// ```ignore
/// clog!("cache warmed");                                   // default profile
/// clog!("disk full", ChannelProfile::ERROR);               // a profile
/// clog!("reset", ChannelSet::from(Channel::LogFile), Flag::ForceOverwrite);
/// ```
#[macro_export]
macro_rules! clog {
    ($message:expr $(,)?) => {{
        let __dispatcher = $crate::global::dispatcher();
        let _ = __dispatcher.dispatch_at(
            $message,
            __dispatcher.default_destination(),
            $crate::contracts::call_site!(),
        );
    }};
    ($message:expr, $destination:expr $(,)?) => {{
        let _ = $crate::global::dispatcher().dispatch_at(
            $message,
            $destination,
            $crate::contracts::call_site!(),
        );
    }};
    ($message:expr, $channels:expr, $flags:expr $(,)?) => {{
        let _ = $crate::global::dispatcher().dispatch_at(
            $message,
            $crate::contracts::Destination::new(
                ::core::convert::Into::into($channels),
                ::core::convert::Into::into($flags),
            ),
            $crate::contracts::call_site!(),
        );
    }};
}

/// Log through an explicit dispatcher
///
/// # Usage
/// ```ignore
/// clog_to!(dispatcher, "cache warmed");
/// clog_to!(dispatcher, "disk full", ChannelProfile::ERROR);
/// ```
#[macro_export]
macro_rules! clog_to {
    ($dispatcher:expr, $message:expr $(,)?) => {{
        let __dispatcher = &$dispatcher;
        let _ = __dispatcher.dispatch_at(
            $message,
            __dispatcher.default_destination(),
            $crate::contracts::call_site!(),
        );
    }};
    ($dispatcher:expr, $message:expr, $destination:expr $(,)?) => {{
        let _ = $dispatcher.dispatch_at($message, $destination, $crate::contracts::call_site!());
    }};
    ($dispatcher:expr, $message:expr, $channels:expr, $flags:expr $(,)?) => {{
        let _ = $dispatcher.dispatch_at(
            $message,
            $crate::contracts::Destination::new(
                ::core::convert::Into::into($channels),
                ::core::convert::Into::into($flags),
            ),
            $crate::contracts::call_site!(),
        );
    }};
}
