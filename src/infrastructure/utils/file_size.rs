const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human readable size, e.g. `1536` -> `"1.5 KB"`.
///
/// Uses the largest unit up to GB with at most two decimals. Zero is the one
/// singular case and renders as `"0 Byte"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Byte".to_string();
    }

    let exponent = unit_exponent(bytes);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[exponent])
}

/// `floor(log_1024(bytes))`, clamped to the GB unit.
fn unit_exponent(bytes: u64) -> usize {
    let mut exponent = 0;
    let mut remaining = bytes;
    while remaining >= 1024 && exponent < UNITS.len() - 1 {
        remaining /= 1024;
        exponent += 1;
    }
    exponent
}
