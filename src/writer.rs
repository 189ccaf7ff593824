use crate::error::{Error, Result};
use crate::layout::{column_letter, CellContent, ImageLayout, SheetLayout, WorkbookLayout};
use crate::protection::{legacy_hash, SheetLock, WorkbookLock};
use crate::styles::StyleRegistry;
use image::ImageReader;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};
use umya_spreadsheet::structs::drawing::spreadsheet::MarkerType;
use umya_spreadsheet::structs::{
    Color, Comment, DataValidation, DataValidationValues, DataValidations, Image,
    SequenceOfReferences, SheetProtection, Spreadsheet, Style, WorkbookProtection, Worksheet,
};

/// Renders a workbook plan into an in-memory spreadsheet.
pub fn render(layout: &WorkbookLayout, styles: &StyleRegistry) -> Result<Spreadsheet> {
    let mut book = umya_spreadsheet::new_file();
    let cache = StyleCache::new(styles);

    for (index, plan) in layout.sheets.iter().enumerate() {
        let sheet = if index == 0 {
            let sheet = book
                .get_sheet_mut(&0)
                .ok_or_else(|| Error::SheetNotFound("0".to_string()))?;
            sheet.set_name(plan.name.clone());
            sheet
        } else {
            book.new_sheet(plan.name.clone())
                .map_err(|e| Error::Workbook(format!("{}: {}", plan.name, e)))?
        };
        render_sheet(sheet, plan, &cache)?;
        debug!(sheet = %plan.name, cells = plan.cells.len(), "rendered sheet");
    }

    if let Some(lock) = &layout.lock {
        book.set_workbook_protection(workbook_protection(lock));
    }

    Ok(book)
}

/// Writes `book` to `path`, creating missing parent directories.
pub fn save(book: &Spreadsheet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    umya_spreadsheet::writer::xlsx::write(book, path).map_err(|e| Error::WriteXlsx {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    info!(path = %path.display(), "template written");
    Ok(())
}

/// Registry styles converted once, cloned per cell.
struct StyleCache {
    base: HashMap<&'static str, Style>,
}

impl StyleCache {
    fn new(registry: &StyleRegistry) -> Self {
        let base = registry
            .iter()
            .map(|named| (named.name, named.to_style()))
            .collect();
        Self { base }
    }

    fn style(&self, name: &str, locked: bool) -> Result<Style> {
        let mut style = self
            .base
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownStyle(name.to_string()))?;
        style.get_protection_mut().set_locked(locked);
        Ok(style)
    }
}

fn render_sheet(sheet: &mut Worksheet, plan: &SheetLayout, cache: &StyleCache) -> Result<()> {
    let mut tab = Color::default();
    tab.set_argb(format!("FF{}", plan.tab_color));
    sheet.set_tab_color(tab);

    for (col, width) in &plan.column_widths {
        sheet
            .get_column_dimension_mut(&column_letter(*col))
            .set_width(*width);
    }
    for (row, height) in &plan.row_heights {
        sheet.get_row_dimension_mut(row).set_height(*height);
    }

    for ((row, col), cell_plan) in &plan.cells {
        let style = cache.style(cell_plan.style, cell_plan.locked)?;
        let cell = sheet.get_cell_mut((*col, *row));
        match &cell_plan.content {
            CellContent::Empty => {}
            CellContent::Text(text) => {
                cell.set_value(text.clone());
            }
            CellContent::Number(n) => {
                cell.set_value_number(*n);
            }
            CellContent::Formula(formula) => {
                cell.set_formula(formula.clone());
            }
        }
        cell.set_style(style);
    }

    for range in &plan.merges {
        sheet.add_merge_cells(range.clone());
    }

    if let Some(image_plan) = &plan.image {
        match logo_image(image_plan) {
            Ok(image) => {
                sheet.add_image(image);
            }
            Err(details) => {
                warn!(path = %image_plan.path.display(), %details, "logo unusable, skipping");
            }
        }
    }

    for note in &plan.notes {
        let mut comment = Comment::default();
        comment.new_comment(note.cell.as_str());
        comment.set_author(note.author.clone());
        comment.set_text_string(note.text.clone());
        sheet.add_comments(comment);
    }

    if !plan.validations.is_empty() {
        let mut validations = DataValidations::default();
        for v in &plan.validations {
            let mut refs = SequenceOfReferences::default();
            refs.set_sqref(v.range.clone());

            let mut validation = DataValidation::default();
            validation
                .set_type(DataValidationValues::List)
                .set_allow_blank(v.allow_blank)
                .set_show_error_message(true)
                .set_error_title(v.error_title.clone())
                .set_error_message(v.error_message.clone())
                .set_formula1(v.source.clone())
                .set_sequence_of_references(refs);
            validations.add_data_validation_list(validation);
        }
        sheet.set_data_validations(validations);
    }

    if let Some(lock) = &plan.lock {
        sheet.set_sheet_protection(sheet_protection(lock));
    }

    Ok(())
}

/// Loads the logo bytes and makes sure they decode as an image before
/// handing them to the workbook.
fn logo_image(plan: &ImageLayout) -> std::result::Result<Image, String> {
    let bytes = std::fs::read(&plan.path).map_err(|e| e.to_string())?;
    let (width, height) = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())?;
    debug!(width, height, "logo decoded");

    let file_name = plan
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("logo.jpg");
    let mut marker = MarkerType::default();
    marker.set_coordinate(plan.anchor.clone());
    let mut image = Image::default();
    image.new_image_with_dimensions(plan.height, plan.width, file_name, bytes, marker);
    Ok(image)
}

fn workbook_protection(lock: &WorkbookLock) -> WorkbookProtection {
    let mut protection = WorkbookProtection::default();
    protection
        .set_lock_structure(lock.lock_structure)
        .set_lock_windows(lock.lock_windows);
    if let Some(password) = &lock.password {
        protection.set_workbook_password_raw(legacy_hash(password));
    }
    protection
}

// OOXML flags mark actions as protected, so each permission is inverted.
fn sheet_protection(lock: &SheetLock) -> SheetProtection {
    let p = &lock.permissions;
    let mut protection = SheetProtection::default();
    protection
        .set_sheet(true)
        .set_objects(!p.edit_objects)
        .set_scenarios(!p.edit_scenarios)
        .set_format_cells(!p.format_cells)
        .set_format_columns(!p.format_columns)
        .set_format_rows(!p.format_rows)
        .set_insert_columns(!p.insert_columns)
        .set_insert_rows(!p.insert_rows)
        .set_delete_columns(!p.delete_columns)
        .set_delete_rows(!p.delete_rows)
        .set_sort(!p.sort)
        .set_auto_filter(!p.auto_filter)
        .set_select_locked_cells(!p.select_locked_cells)
        .set_select_unlocked_cells(!p.select_unlocked_cells);
    if let Some(password) = &lock.password {
        protection.set_password_raw(legacy_hash(password));
    }
    protection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::i18n::Language;
    use crate::template;

    fn rendered(lang: Language) -> Spreadsheet {
        let config = GeneratorConfig {
            logo_path: "missing.jpg".into(),
            ..GeneratorConfig::default()
        };
        let t = template::build(lang, &config);
        render(&t.layout, &t.styles).unwrap()
    }

    #[test]
    fn test_render_sheet_names_in_order() {
        let book = rendered(Language::En);
        let names: Vec<_> = book
            .get_sheet_collection()
            .iter()
            .map(|s| s.get_name().to_string())
            .collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Instructions");
        assert_eq!(names[8], "Products");
    }

    #[test]
    fn test_render_cells() {
        let book = rendered(Language::En);
        let colors = book.get_sheet_by_name("Colors").unwrap();
        assert_eq!(colors.get_cell((2, 1)).unwrap().get_value(), "Name");
        assert_eq!(
            colors.get_cell((1, 2)).unwrap().get_formula(),
            r#"IF(B2<>"","COL"&TEXT(COUNTIF(B$2:B2,"<>"),"000"),"")"#
        );

        let settings = book.get_sheet_by_name("Settings").unwrap();
        assert_eq!(settings.get_cell((2, 2)).unwrap().get_value(), "HY");
        assert_eq!(settings.get_comments().len(), 2);
    }

    #[test]
    fn test_render_validations_and_protection() {
        let book = rendered(Language::He);
        let products = book.get_sheet_by_name("מוצרים").unwrap();
        let validations = products.get_data_validations().unwrap();
        assert_eq!(validations.get_data_validation_list().len(), 8);
        assert!(products.get_sheet_protection().is_some());
    }

    #[test]
    fn test_unknown_style_is_an_error() {
        let mut layout = WorkbookLayout::default();
        let mut sheet = SheetLayout::new("S", "000000");
        sheet.set_cell(1, 1, CellContent::Empty, "no_such_style", true);
        layout.sheets.push(sheet);

        let err = render(&layout, &StyleRegistry::new()).unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(ref name) if name == "no_such_style"));
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.xlsx");
        save(&rendered(Language::En), &path).unwrap();
        assert!(path.is_file());
    }

    fn render_with_logo(logo: &Path) -> Spreadsheet {
        let config = GeneratorConfig {
            logo_path: logo.to_path_buf(),
            ..GeneratorConfig::default()
        };
        let t = template::build(Language::En, &config);
        render(&t.layout, &t.styles).unwrap()
    }

    #[test]
    fn test_logo_is_rendered_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("logo.png");
        image::RgbImage::new(4, 4).save(&logo).unwrap();

        let book = render_with_logo(&logo);
        let sheet = book.get_sheet_by_name("Instructions").unwrap();
        assert_eq!(sheet.get_image_collection().len(), 1);

        let path = dir.path().join("with_logo.xlsx");
        save(&book, &path).unwrap();
        let reread = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
        let sheet = reread.get_sheet_by_name("Instructions").unwrap();
        assert_eq!(sheet.get_image_collection().len(), 1);
    }

    #[test]
    fn test_corrupt_logo_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("logo.jpg");
        std::fs::write(&logo, b"not really a jpeg").unwrap();

        let book = render_with_logo(&logo);
        let sheet = book.get_sheet_by_name("Instructions").unwrap();
        assert!(sheet.get_image_collection().is_empty());
        // the rest of the sheet is still there
        assert_eq!(sheet.get_cell((2, 114)).unwrap().get_value(), "support@flexipi.com");

        let path = dir.path().join("corrupt_logo.xlsx");
        save(&book, &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_workbook_protection_survives_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locked.xlsx");
        save(&rendered(Language::He), &path).unwrap();

        let book = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
        let protection = book.get_workbook_protection().unwrap();
        assert!(*protection.get_lock_structure());
        assert!(*protection.get_lock_windows());
        assert_eq!(protection.get_workbook_password_raw(), "F6FE");
    }
}
