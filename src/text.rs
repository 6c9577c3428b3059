pub const LINE_SEPARATOR: &str = "\n";

/// Join lines with a single [LINE_SEPARATOR] between them
///
/// No separator is added before the first or after the last line.
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i != 0 {
            joined.push_str(LINE_SEPARATOR);
        }
        joined.push_str(line.as_ref());
    }
    joined
}

/// Split text into lines, tolerating `\r\n` terminators
///
/// A trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

pub(crate) fn with_new_line(text: &str, append_new_line: bool) -> String {
    if append_new_line {
        format!("{text}{LINE_SEPARATOR}")
    } else {
        text.to_owned()
    }
}
