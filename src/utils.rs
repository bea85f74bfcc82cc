/// Utility functions used throughout the application
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use unicode_width::UnicodeWidthStr;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("shoptui-debug.log");
    path
}

/// Append a line to the debug log (no-op unless --debug was passed)
pub fn log_debug(msg: &str) {
    if !crate::DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Truncate or pad a string to exactly `width` terminal columns
///
/// Truncation appends "…" when anything was cut; padding uses spaces.
/// Width is measured in display columns, so CJK names line up too.
pub fn fit_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let display_width = UnicodeWidthStr::width(s);
    if display_width <= width {
        return format!("{}{}", s, " ".repeat(width - display_width));
    }

    // Cut down to width - 1 columns and append the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthStr::width(ch.to_string().as_str());
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    let out_width = UnicodeWidthStr::width(out.as_str());
    format!("{}{}", out, " ".repeat(width.saturating_sub(out_width)))
}
