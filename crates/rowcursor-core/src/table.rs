//! Markup table rendering.
//!
//! Output layout:
//!
//! ```text
//! <table>
//! <tr><th>id</th> <th>name</th> </tr>
//! <tr><td>1</td> <td>Alice</td> </tr>
//! </table>
//! ```
//!
//! Each `</tr>` is followed by a space before the newline. Every header and
//! cell is escaped before insertion.

use std::borrow::Cow;

use crate::{Row, TableConfig};

/// Escapes `&`, `<`, `>`, `"` and `'` for safe insertion into markup.
pub fn escape_markup(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Incremental table builder. The header comes from the first row pushed.
#[derive(Debug)]
pub struct TableRenderer<'a> {
    config: &'a TableConfig,
    output: String,
    rows: usize,
}

impl<'a> TableRenderer<'a> {
    /// Starts a new table.
    pub fn new(config: &'a TableConfig) -> Self {
        let mut output = String::from("<table");
        if let Some(class) = &config.table_class {
            output.push_str(" class=\"");
            output.push_str(&escape_markup(class));
            output.push('"');
        }
        output.push_str(">\n");

        Self {
            config,
            output,
            rows: 0,
        }
    }

    /// Appends one record, emitting the header first if this is the first.
    pub fn push_row(&mut self, row: &Row) {
        if self.rows == 0 {
            self.output.push_str("<tr>");
            for name in row.column_names() {
                self.push_cell("th", name);
            }
            self.output.push_str("</tr> \n");
        }

        self.output.push_str("<tr>");
        for value in row.values() {
            self.push_cell("td", &value.to_string());
        }
        self.output.push_str("</tr> \n");
        self.rows += 1;
    }

    fn push_cell(&mut self, tag: &str, text: &str) {
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push('>');
        self.output.push_str(&escape_markup(text));
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push_str("> ");
    }

    /// Finishes the table, or returns the empty message if no rows were
    /// pushed.
    pub fn finish(mut self) -> String {
        if self.rows == 0 {
            return self.config.empty_message.clone();
        }
        self.output.push_str("</table>\n");
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("plain"), "plain");
        assert!(matches!(escape_markup("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape_markup(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_layout() {
        let config = TableConfig::default();
        let mut table = TableRenderer::new(&config);
        table.push_row(&Row::new().with("id", 1).with("name", "Alice"));
        table.push_row(&Row::new().with("id", 2).with("name", Value::Null));

        assert_eq!(
            table.finish(),
            "<table>\n\
             <tr><th>id</th> <th>name</th> </tr> \n\
             <tr><td>1</td> <td>Alice</td> </tr> \n\
             <tr><td>2</td> <td></td> </tr> \n\
             </table>\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let config = TableConfig::default().empty_message("nothing here");
        let table = TableRenderer::new(&config);
        assert_eq!(table.finish(), "nothing here");
    }

    #[test]
    fn test_render_class_attribute_escaped() {
        let config = TableConfig::default().table_class("a\"b");
        let mut table = TableRenderer::new(&config);
        table.push_row(&Row::new().with("x", 1));
        assert!(table.finish().starts_with("<table class=\"a&quot;b\">\n"));
    }

    #[test]
    fn test_render_escapes_headers() {
        let config = TableConfig::default();
        let mut table = TableRenderer::new(&config);
        table.push_row(&Row::new().with("<b>", "x&y"));
        let html = table.finish();
        assert!(html.contains("<th>&lt;b&gt;</th>"));
        assert!(html.contains("<td>x&amp;y</td>"));
    }
}
