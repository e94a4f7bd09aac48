//! Synchronized-lyrics (LRC) parsing and position lookup.
//!
//! Line-oriented text; each usable line starts with a `[MM:SS.xx]` or
//! `[MM:SS.xxx]` tag. Lines without a recognizable timestamp are
//! ignored rather than rejected, so mixed metadata/lyric files parse
//! to whatever timed lines they contain.

/// One timed lyric line.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricLine {
    /// Offset from the start of the track, in seconds.
    pub time: f64,
    pub text: String,
}

/// Parse LRC text into timed lines, sorted ascending by timestamp.
///
/// A line counts only if it opens with a parsable timestamp tag and has
/// text left after stripping every bracket tag.
pub fn parse_lrc(text: &str) -> Vec<LyricLine> {
    let mut lines: Vec<LyricLine> = Vec::new();
    for line in text.lines() {
        let Some(time) = leading_timestamp(line) else {
            continue;
        };
        let text = strip_tags(line);
        if !text.is_empty() {
            lines.push(LyricLine { time, text });
        }
    }
    lines.sort_by(|a, b| a.time.total_cmp(&b.time));
    lines
}

/// Index of the line active at playback position `time`: the last line
/// whose timestamp is at or before it, `None` before the first line.
pub fn active_line(lines: &[LyricLine], time: f64) -> Option<usize> {
    let mut active = None;
    for (i, line) in lines.iter().enumerate() {
        if line.time <= time {
            active = Some(i);
        } else {
            break;
        }
    }
    active
}

/// Format a second count as `M:SS` for display.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

fn leading_timestamp(line: &str) -> Option<f64> {
    let rest = line.trim_start().strip_prefix('[')?;
    let end = rest.find(']')?;
    parse_timestamp(&rest[..end])
}

/// `MM:SS.xx` (hundredths) or `MM:SS.xxx` (milliseconds).
fn parse_timestamp(tag: &str) -> Option<f64> {
    let (minutes, rest) = tag.split_once(':')?;
    let (seconds, fraction) = rest.split_once('.')?;

    if minutes.len() != 2 || seconds.len() != 2 || !(2..=3).contains(&fraction.len()) {
        return None;
    }
    if !all_digits(minutes) || !all_digits(seconds) || !all_digits(fraction) {
        return None;
    }

    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    let fraction_value: u32 = fraction.parse().ok()?;
    let denominator = if fraction.len() == 2 { 100.0 } else { 1000.0 };

    Some(f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(fraction_value) / denominator)
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Remove every `[...]` tag group and trim the remainder.
fn strip_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        match rest[start..].find(']') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                // Unterminated tag: keep the text as-is.
                out.push_str(&rest[start..]);
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}
