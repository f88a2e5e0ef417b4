use unicode_width::UnicodeWidthStr;

/// Hard-wrap `s` to the given display width, honoring wide characters.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        if c == '\n' {
            result.push(c);
            current_line_width = 0;
            continue;
        }

        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));

        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }

        result.push(c);
    }

    result
}

pub fn truncate_text(s: &str, height: usize) -> String {
    if height == 0 {
        return String::from("");
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > height {
        if height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}
