use crate::error::{Error, Result};
use crate::layout::WorkbookLayout;
use std::path::Path;
use tracing::debug;
use umya_spreadsheet::Spreadsheet;

pub fn open_workbook(path: &Path) -> Result<Spreadsheet> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    umya_spreadsheet::reader::xlsx::read(path).map_err(|e| Error::InvalidExcel {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

/// What a written sheet looks like from the outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub name: String,
    pub protected: bool,
    pub validations: usize,
}

pub fn summarize(book: &Spreadsheet) -> Vec<SheetSummary> {
    book.get_sheet_collection()
        .iter()
        .map(|sheet| SheetSummary {
            name: sheet.get_name().to_string(),
            protected: sheet.get_sheet_protection().is_some(),
            validations: sheet
                .get_data_validations()
                .map(|v| v.get_data_validation_list().len())
                .unwrap_or(0),
        })
        .collect()
}

/// Re-reads `path` and verifies its sheets match `layout` by name and order.
pub fn check(path: &Path, layout: &WorkbookLayout) -> Result<Vec<SheetSummary>> {
    let book = open_workbook(path)?;
    let summary = summarize(&book);

    let found: Vec<&str> = summary.iter().map(|s| s.name.as_str()).collect();
    let expected = layout.sheet_names();
    if found != expected {
        return Err(Error::LayoutMismatch {
            path: path.to_path_buf(),
            expected: expected.join(", "),
            found: found.join(", "),
        });
    }

    for sheet in &summary {
        debug!(
            sheet = %sheet.name,
            protected = sheet.protected,
            validations = sheet.validations,
            "checked sheet"
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::i18n::Language;
    use crate::template;

    fn config_in(dir: &Path) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: dir.to_path_buf(),
            logo_path: dir.join("no-logo.jpg"),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_missing_file() {
        let err = open_workbook(Path::new("does/not/exist.xlsx")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_garbage_is_invalid_excel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");
        std::fs::write(&path, b"not a zip").unwrap();
        let err = open_workbook(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidExcel { .. }));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_check_generated_template() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let path = template::generate(Language::He, &config).unwrap();
        let expected = template::build(Language::He, &config).layout;

        let summary = check(&path, &expected).unwrap();
        assert_eq!(summary.len(), 9);
        assert!(summary.iter().all(|s| s.protected));
        assert_eq!(summary[0].validations, 0);
        assert_eq!(summary[1].validations, 0);
        // sub-categories and products carry lookups on top of status/action
        let counts: Vec<_> = summary[2..].iter().map(|s| s.validations).collect();
        assert_eq!(counts, vec![2, 3, 2, 2, 2, 2, 8]);
    }

    #[test]
    fn test_check_detects_other_language() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let path = template::generate(Language::En, &config).unwrap();
        let hebrew = template::build(Language::He, &config).layout;

        let err = check(&path, &hebrew).unwrap_err();
        assert!(matches!(err, Error::LayoutMismatch { .. }));
        assert!(err.to_string().contains("Instructions"));
    }

    #[test]
    fn test_regeneration_reads_back_the_same() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let path = template::generate(Language::En, &config).unwrap();
        let first = summarize(&open_workbook(&path).unwrap());
        template::generate(Language::En, &config).unwrap();
        let second = summarize(&open_workbook(&path).unwrap());
        assert_eq!(first, second);

        let book = open_workbook(&path).unwrap();
        let products = book.get_sheet_by_name("Products").unwrap();
        assert_eq!(
            products.get_cell((1, 2)).unwrap().get_formula(),
            crate::formulas::sku("Settings", "Suppliers", 2)
        );
    }
}
