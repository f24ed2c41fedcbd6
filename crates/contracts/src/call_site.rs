//! CallSite - source location of a logging call

use std::fmt;
use std::panic::Location;

/// Rendered in place of the function name when it cannot be captured
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// Source file, line, column and enclosing function of a logging call.
///
/// Never supplied by hand in normal use: the [`call_site!`](crate::call_site)
/// macro captures all four fields, and [`CallSite::caller`] captures the
/// location of a `#[track_caller]` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
    function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, column: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            column,
            function,
        }
    }

    /// Capture the location of the caller.
    ///
    /// `Location` carries no function name, so the function is rendered as
    /// [`UNKNOWN_FUNCTION`] unless set with [`CallSite::with_function`].
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(
            location.file(),
            location.line(),
            location.column(),
            UNKNOWN_FUNCTION,
        )
    }

    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = function;
        self
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn function(&self) -> &'static str {
        self.function
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}:{})", self.file, self.line, self.column)
    }
}

#[doc(hidden)]
pub fn __type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Strip the probe item and closure frames from a probe's type name
#[doc(hidden)]
pub fn __function_name(probe_type_name: &'static str) -> &'static str {
    let mut name = probe_type_name
        .strip_suffix("::__probe")
        .unwrap_or(probe_type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Capture the [`CallSite`] of the macro invocation, including the path of
/// the enclosing function.
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __probe() {}
        $crate::CallSite::new(
            file!(),
            line!(),
            column!(),
            $crate::__function_name($crate::__type_name_of(__probe)),
        )
    }};
}
