//! Record formatting
//!
//! Pure rendering of a message into a [`FormattedRecord`]. The only input
//! that is not passed explicitly is the wall clock, and only in [`format`].

use chrono::{DateTime, Local};

use contracts::{CallSite, ContractError, FormatKind, FormattedRecord};

/// chrono pattern for `YYYY-MM-DD_HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%F_%T";

/// Render a timestamp the way records carry it
pub fn timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render a record.
///
/// Trailing line breaks of `message` are dropped so the record always ends
/// with exactly one blank line.
pub fn render(
    kind: FormatKind,
    at: &DateTime<Local>,
    call_site: &CallSite,
    message: &str,
) -> FormattedRecord {
    let message = message.trim_end_matches(['\r', '\n']);
    let rendered = match kind {
        FormatKind::Error => format!(
            "{}\nFile: {}({}:{})\n{}: {}\n\n",
            timestamp(at),
            call_site.file(),
            call_site.line(),
            call_site.column(),
            call_site.function(),
            message
        ),
    };
    FormattedRecord::from_rendered(rendered)
}

/// Render `message` as of now, stamped with the caller's location
#[track_caller]
pub fn format(message: &str, kind: FormatKind) -> FormattedRecord {
    render(kind, &Local::now(), &CallSite::caller(), message)
}

/// Render with a kind given by its numeric code
///
/// # Errors
/// [`ContractError::InvalidFormatKind`] for an unrecognized code.
pub fn format_code(
    message: &str,
    code: u32,
    at: &DateTime<Local>,
    call_site: &CallSite,
) -> Result<FormattedRecord, ContractError> {
    let kind = FormatKind::try_from(code)?;
    Ok(render(kind, at, call_site, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn site() -> CallSite {
        CallSite::new("src/main.rs", 42, 9, "app::run")
    }

    #[test]
    fn test_render_layout() {
        let record = render(FormatKind::Error, &fixed_time(), &site(), "disk almost full");
        assert_eq!(
            record.as_str(),
            "2024-03-09_14:05:07\nFile: src/main.rs(42:9)\napp::run: disk almost full\n\n"
        );
    }

    #[test]
    fn test_render_multiline_message() {
        let record = render(FormatKind::Error, &fixed_time(), &site(), "line one\nline two");
        assert!(record.as_str().ends_with("app::run: line one\nline two\n\n"));
        assert!(!record.as_str().ends_with("\n\n\n"));
    }

    #[test]
    fn test_render_trailing_newlines_collapse() {
        for message in ["done\n", "done\n\n\n", "done\r\n"] {
            let record = render(FormatKind::Error, &fixed_time(), &site(), message);
            assert!(record.as_str().ends_with("app::run: done\n\n"), "{message:?}");
            assert!(!record.as_str().ends_with("\n\n\n"), "{message:?}");
        }
    }

    #[test]
    fn test_render_empty_message() {
        let record = render(FormatKind::Error, &fixed_time(), &site(), "");
        assert!(record.as_str().ends_with("app::run: \n\n"));
    }

    #[test]
    fn test_format_captures_caller() {
        let record = format("hello", FormatKind::Error);
        assert!(record.as_str().contains("format.rs("));
        assert!(record.as_str().ends_with(": hello\n\n"));
    }

    #[test]
    fn test_format_code() {
        let record = format_code("x", 1, &fixed_time(), &site()).unwrap();
        assert_eq!(record, render(FormatKind::Error, &fixed_time(), &site(), "x"));

        let err = format_code("x", 7, &fixed_time(), &site()).unwrap_err();
        assert!(matches!(err, ContractError::InvalidFormatKind { .. }));
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(timestamp(&fixed_time()), "2024-03-09_14:05:07");
    }
}
