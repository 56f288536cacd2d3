use crate::schema::SourceSchema;

/// One row of a source file, with fields addressed by column name
#[derive(Debug, Clone)]
pub struct Record<'a> {
    /// 1-based line number within the source text
    pub line: usize,
    schema: &'static SourceSchema,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    pub fn new(line: usize, schema: &'static SourceSchema, fields: Vec<&'a str>) -> Self {
        Self {
            line,
            schema,
            fields,
        }
    }

    /// Name of the source this row came from
    pub fn source(&self) -> &'static str {
        self.schema.name
    }

    /// Field at a raw position; out of range reads as empty
    pub fn raw(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or("")
    }

    /// Field for a declared column; missing columns read as empty
    pub fn text(&self, column: &str) -> &'a str {
        debug_assert!(
            self.schema.position(column).is_some(),
            "{} has no column {}",
            self.schema.name,
            column
        );
        self.schema
            .position(column)
            .map(|index| self.raw(index))
            .unwrap_or("")
    }

    pub fn number(&self, column: &str) -> Option<f64> {
        parse_number(self.text(column))
    }

    pub fn flag(&self, column: &str) -> bool {
        parse_flag(self.text(column))
    }

    /// The row's own identifier
    pub fn wiki_link(&self) -> &'a str {
        self.text("wiki_link")
    }

    /// Rows without an identifier produce no entity
    pub fn is_blank(&self) -> bool {
        self.wiki_link().trim().is_empty()
    }

    /// Fields past the declared columns
    pub fn tail(&self) -> &[&'a str] {
        self.fields
            .get(self.schema.columns.len()..)
            .unwrap_or(&[])
    }
}

/// Split raw text into rows of fields. Every line yields a row, including
/// blank ones; there is no quoting or escaping.
pub fn split_rows(text: &str, delimiter: char) -> Vec<Vec<&str>> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| line.split(delimiter).collect())
        .collect()
}

/// Parse a source text into records for the given schema
pub fn parse_records<'a>(text: &'a str, schema: &'static SourceSchema) -> Vec<Record<'a>> {
    split_rows(text, schema.delimiter)
        .into_iter()
        .enumerate()
        .map(|(i, fields)| Record::new(i + 1, schema, fields))
        .collect()
}

/// Permissive numeric parse: anything that is not a finite number is unknown
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Truthy unless empty, `0` or `false`
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{HYPERLANES, REGIONS, SYSTEMS};

    #[test]
    fn test_split_rows_keeps_trailing_empty_line() {
        let rows = split_rows("Core|core\nRim|rim\n", '|');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Core", "core"]);
        assert_eq!(rows[2], vec![""]);
    }

    #[test]
    fn test_split_rows_strips_carriage_returns() {
        let rows = split_rows("Core|core\r\nRim|rim", '|');
        assert_eq!(rows[0], vec!["Core", "core"]);
        assert_eq!(rows[1], vec!["Rim", "rim"]);
    }

    #[test]
    fn test_short_row_reads_missing_fields_as_empty() {
        let records = parse_records("Sol|sol|||", &SYSTEMS);
        let row = &records[0];

        assert_eq!(row.text("name"), "Sol");
        assert_eq!(row.text("region"), "");
        assert_eq!(row.number("priority"), None);
        assert_eq!(row.raw(42), "");
    }

    #[test]
    fn test_blank_row_detection() {
        let records = parse_records("Core|core\n", &REGIONS);
        assert!(!records[0].is_blank());
        assert!(records[1].is_blank());
        assert_eq!(records[1].line, 2);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number(" -3.5 "), Some(-3.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("unknown"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(parse_flag("true"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("FALSE"));
    }

    #[test]
    fn test_hyperlane_tail() {
        let records = parse_records("Spine,spine,1,5,,core,alpha", &HYPERLANES);
        let row = &records[0];

        assert!(row.flag("loop"));
        assert_eq!(row.number("priority"), Some(5.0));
        assert_eq!(row.tail(), &["core", "alpha"]);
    }

    #[test]
    fn test_tail_of_short_row_is_empty() {
        let records = parse_records("Spine,spine", &HYPERLANES);
        assert!(records[0].tail().is_empty());
    }
}
