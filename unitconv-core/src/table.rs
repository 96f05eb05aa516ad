//! Boxed plain-text tables
//!
//! ```text
//! +---------------------+----------+
//! |      Timestamp      | Category |
//! +---------------------+----------+
//! | 2024-05-01 12:00:00 |  Length  |
//! +---------------------+----------+
//! ```

/// Render `rows` under `headers`, every cell centred.
///
/// Rows shorter than the header are padded with empty cells; extra cells
/// are dropped.
pub fn render<R, C, S>(headers: &[&str], rows: R) -> String
where
    R: IntoIterator<Item = C>,
    C: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let columns = headers.len();
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            let mut cells: Vec<String> = row
                .into_iter()
                .take(columns)
                .map(|c| c.as_ref().to_string())
                .collect();
            cells.resize(columns, String::new());
            cells
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = border_line(&widths);
    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&row_line(headers.iter().copied(), &widths));
    out.push_str(&border);
    for row in &rows {
        out.push_str(&row_line(row.iter().map(String::as_str), &widths));
    }
    out.push_str(&border);
    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.zip(widths) {
        line.push(' ');
        line.push_str(&centre(cell, *width));
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn centre(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_row() {
        let table = render(&["Name", "Value"], [["meters", "1.0"]]);
        let expected = "\
+--------+-------+
|  Name  | Value |
+--------+-------+
| meters |  1.0  |
+--------+-------+
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_headers_only() {
        let rows: Vec<Vec<String>> = Vec::new();
        let table = render(&["A", "Bee"], rows);
        assert_eq!(table, "+---+-----+\n| A | Bee |\n+---+-----+\n+---+-----+\n");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = render(&["A", "B"], [vec!["x"]]);
        assert!(table.contains("| x |   |"));
    }

    #[test]
    fn test_width_counts_chars() {
        let table = render(&["T"], [["°C"]]);
        assert!(table.starts_with("+----+\n"));
    }
}
