//! Formula text for generated codes and dropdown sources.
//!
//! Everything here returns formula text as stored in the workbook, without
//! the leading `=`. Rows are 1-based and data starts at row 2.

/// Quotes a sheet name for use in a reference (`'Sub Categories'!A1`).
pub fn quote_sheet(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// Code for simple lookup sheets: `CAT001`, `CAT002`, ... counting only rows
/// with a name, blank when the name is blank.
pub fn prefixed_code(prefix: &str, row: u32) -> String {
    format!(r#"IF(B{row}<>"","{prefix}"&TEXT(COUNTIF(B$2:B{row},"<>"),"000"),"")"#)
}

/// Sub-category code: the parent's code followed by the number of
/// sub-categories under the same parent so far (`CAT001-002`).
pub fn child_code(parent_sheet: &str, last_row: u32, row: u32) -> String {
    let parent = quote_sheet(parent_sheet);
    format!(
        r#"IF(AND(B{row}<>"",D{row}<>""),INDEX({parent}!$A$2:$A${last_row},MATCH(D{row},{parent}!$B$2:$B${last_row},0))&"-"&TEXT(COUNTIF(D$2:D{row},D{row}),"000"),"")"#
    )
}

/// Product SKU: the settings prefix followed by a per-supplier running
/// number, padded so prefix and number together have the configured length.
///
/// When the supplier has a start code (suppliers column G) numbering begins
/// there, otherwise at 1.
pub fn sku(settings_sheet: &str, suppliers_sheet: &str, row: u32) -> String {
    let settings = quote_sheet(settings_sheet);
    let start_code = format!(
        "VLOOKUP(F{row},{}!$B:$G,6,FALSE)",
        quote_sheet(suppliers_sheet)
    );
    let count = format!("COUNTIF(F$2:F{row},F{row})");
    format!(
        r#"IF(AND(B{row}<>"",F{row}<>""),{settings}!$B$2&TEXT(IF({start_code}="",{count},VALUE({start_code})+{count}-1),REPT("0",{settings}!$B$3-LEN({settings}!$B$2))),"")"#
    )
}

/// Sample SKU on the settings sheet, built from the prefix in B2 and the
/// total length in B3.
pub const SKU_EXAMPLE: &str = r#"B2&REPT("0",B3-LEN(B2)-1)&"1""#;

/// Literal dropdown list: `"Active,Inactive"`.
pub fn literal_list(options: &[&str]) -> String {
    format!("\"{}\"", options.join(","))
}

/// Dropdown fed by the non-blank part of another sheet's name column.
pub fn name_column_list(source_sheet: &str) -> String {
    let source = quote_sheet(source_sheet);
    format!("OFFSET({source}!$B$2,0,0,COUNTA({source}!B:B)-1)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_sheet() {
        assert_eq!(quote_sheet("Colors"), "'Colors'");
        assert_eq!(quote_sheet("Bob's"), "'Bob''s'");
    }

    #[test]
    fn test_prefixed_code() {
        assert_eq!(
            prefixed_code("COL", 5),
            r#"IF(B5<>"","COL"&TEXT(COUNTIF(B$2:B5,"<>"),"000"),"")"#
        );
    }

    #[test]
    fn test_child_code() {
        assert_eq!(
            child_code("Main Categories", 1000, 7),
            concat!(
                r#"IF(AND(B7<>"",D7<>""),"#,
                r#"INDEX('Main Categories'!$A$2:$A$1000,MATCH(D7,'Main Categories'!$B$2:$B$1000,0))"#,
                r#"&"-"&TEXT(COUNTIF(D$2:D7,D7),"000"),"")"#
            )
        );
    }

    #[test]
    fn test_sku() {
        assert_eq!(
            sku("Settings", "Suppliers", 3),
            concat!(
                r#"IF(AND(B3<>"",F3<>""),'Settings'!$B$2&TEXT("#,
                r#"IF(VLOOKUP(F3,'Suppliers'!$B:$G,6,FALSE)="",COUNTIF(F$2:F3,F3),"#,
                r#"VALUE(VLOOKUP(F3,'Suppliers'!$B:$G,6,FALSE))+COUNTIF(F$2:F3,F3)-1),"#,
                r#"REPT("0",'Settings'!$B$3-LEN('Settings'!$B$2))),"")"#
            )
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(literal_list(&["Update", "Delete", "Add"]), r#""Update,Delete,Add""#);
        assert_eq!(
            name_column_list("ספקים"),
            "OFFSET('ספקים'!$B$2,0,0,COUNTA('ספקים'!B:B)-1)"
        );
    }
}
