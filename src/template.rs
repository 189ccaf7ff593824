//! Builds the catalog template layout for one language.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::formulas;
use crate::i18n::{Language, Translation};
use crate::instructions;
use crate::layout::{
    cell_ref, column_range, CellContent, ImageLayout, ListValidation, NoteLayout, SheetLayout,
    WorkbookLayout,
};
use crate::protection::{SheetLock, SheetPermissions, WorkbookLock};
use crate::sheets::{CodeRule, SheetRole, SheetSpec, DATA_SHEETS};
use crate::styles::{self, StyleRegistry};
use crate::writer;
use std::path::PathBuf;
use tracing::{debug, info};

const FIRST_DATA_ROW: u32 = 2;
const NOTE_AUTHOR: &str = "System";
const LOGO_WIDTH: u32 = 799;
const LOGO_HEIGHT: u32 = 134;

/// Everything needed to render one template file.
#[derive(Debug)]
pub struct Template {
    pub styles: StyleRegistry,
    pub layout: WorkbookLayout,
}

pub fn build(language: Language, config: &GeneratorConfig) -> Template {
    let t = language.translation();
    debug!(lang = t.language.code(), direction = ?t.direction, "building template");
    let styles = styles::palette(t.direction);

    let mut sheets = vec![instructions_sheet(t, config), settings_sheet(t, config)];
    for spec in &DATA_SHEETS {
        sheets.push(data_sheet(t, config, spec));
    }

    Template {
        styles,
        layout: WorkbookLayout {
            sheets,
            lock: Some(WorkbookLock {
                password: Some(config.sheet_password.clone()),
                lock_structure: true,
                lock_windows: true,
            }),
        },
    }
}

/// Builds, renders and writes the template for `language`.
///
/// Any existing file at the output path is overwritten.
pub fn generate(language: Language, config: &GeneratorConfig) -> Result<PathBuf> {
    let path = config.output_path(language);
    info!(lang = language.code(), path = %path.display(), "generating template");

    let template = build(language, config);
    let book = writer::render(&template.layout, &template.styles)?;
    writer::save(&book, &path)?;
    Ok(path)
}

/// Generates every supported language in turn.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    Language::ALL
        .into_iter()
        .map(|language| generate(language, config))
        .collect()
}

fn data_entry_lock(config: &GeneratorConfig) -> SheetLock {
    SheetLock {
        password: Some(config.sheet_password.clone()),
        permissions: SheetPermissions::DATA_ENTRY,
    }
}

fn instructions_sheet(t: &Translation, config: &GeneratorConfig) -> SheetLayout {
    let mut sheet = SheetLayout::new(t.sheets.instructions, "0000FF");
    sheet.column_widths = vec![(1, 6.0), (2, 94.0)];
    sheet.row_heights = vec![(1, 100.0), (2, 20.0), (3, 30.0)];

    // Row 1 is the logo banner.
    for col in 1..=2 {
        sheet.set_cell(1, col, CellContent::Empty, styles::BANNER, true);
    }
    if config.logo_path.is_file() {
        sheet.merges.push("A1:B1".to_string());
        sheet.image = Some(ImageLayout {
            path: config.logo_path.clone(),
            anchor: "A1".to_string(),
            width: LOGO_WIDTH,
            height: LOGO_HEIGHT,
        });
    } else {
        debug!(path = %config.logo_path.display(), "logo not found, skipping");
    }

    for line in instructions::layout_lines(t.instructions, t.direction, config) {
        if line.row == 1 {
            continue;
        }
        sheet.set_cell(line.row, 1, text_or_empty(line.marker), line.style, true);
        sheet.set_cell(line.row, 2, text_or_empty(line.content), line.style, true);
    }

    sheet.lock = Some(SheetLock {
        password: None,
        permissions: SheetPermissions::READ_ONLY,
    });
    sheet
}

fn text_or_empty(text: String) -> CellContent {
    if text.is_empty() {
        CellContent::Empty
    } else {
        CellContent::Text(text)
    }
}

fn settings_sheet(t: &Translation, config: &GeneratorConfig) -> SheetLayout {
    let s = &t.settings;
    let mut sheet = SheetLayout::new(t.sheets.settings, "FF0000");
    sheet.column_widths = vec![(1, 20.0), (2, 20.0)];

    let rows = [
        (s.title, CellContent::Empty),
        (s.prefix, CellContent::Text("HY".to_string())),
        (s.length, CellContent::Number(6.0)),
        (s.example, CellContent::Formula(formulas::SKU_EXAMPLE.to_string())),
    ];
    for (row, (label, value)) in (1u32..).zip(rows) {
        let style = if row == 1 {
            styles::SETTINGS_HEADER
        } else {
            styles::SETTINGS_VALUE
        };
        // only the prefix and the length are editable
        let editable = row == 2 || row == 3;
        sheet.set_cell(row, 1, CellContent::Text(label.to_string()), style, true);
        sheet.set_cell(row, 2, value, style, !editable);
    }

    sheet.notes = vec![
        NoteLayout {
            cell: cell_ref(2, 2),
            author: NOTE_AUTHOR.to_string(),
            text: s.prefix_note.to_string(),
        },
        NoteLayout {
            cell: cell_ref(2, 3),
            author: NOTE_AUTHOR.to_string(),
            text: s.length_note.to_string(),
        },
    ];
    sheet.lock = Some(data_entry_lock(config));
    sheet
}

fn data_sheet(t: &Translation, config: &GeneratorConfig, spec: &SheetSpec) -> SheetLayout {
    let name = t.sheets.data(spec.role);
    let mut sheet = SheetLayout::new(name, spec.tab_color);
    sheet.row_heights = vec![(1, 30.0)];
    sheet.column_widths = (1u32..).zip(spec.widths.iter().copied()).collect();

    for (col, field) in (1u32..).zip(spec.fields) {
        let label = t.headers.label(*field).to_string();
        sheet.set_cell(1, col, CellContent::Text(label), styles::HEADER, true);
    }

    let columns = spec.column_count();
    for row in FIRST_DATA_ROW..=config.last_row {
        sheet.set_cell(
            row,
            1,
            CellContent::Formula(code_formula(t, config, spec.role, row)),
            styles::CELL,
            spec.lock_first_column,
        );
        for col in 2..=columns {
            sheet.set_cell(row, col, CellContent::Empty, styles::CELL, false);
        }
    }

    sheet.validations = list_validations(t, config, spec);
    sheet.lock = Some(data_entry_lock(config));

    debug!(
        sheet = name,
        columns,
        rows = config.last_row,
        validations = sheet.validations.len(),
        "data sheet laid out"
    );
    sheet
}

fn code_formula(t: &Translation, config: &GeneratorConfig, role: SheetRole, row: u32) -> String {
    match role.code_rule() {
        CodeRule::Prefixed(prefix) => formulas::prefixed_code(prefix, row),
        CodeRule::ChildOfParent => {
            formulas::child_code(t.sheets.main_categories, config.last_row, row)
        }
        CodeRule::Sku => formulas::sku(t.sheets.settings, t.sheets.suppliers, row),
    }
}

fn list_validations(
    t: &Translation,
    config: &GeneratorConfig,
    spec: &SheetSpec,
) -> Vec<ListValidation> {
    let v = &t.validations;
    let columns = spec.column_count();
    let validation = |col: u32, source: String, allow_blank: bool| ListValidation {
        range: column_range(col, FIRST_DATA_ROW, config.last_row),
        source,
        allow_blank,
        error_title: v.error_title.to_string(),
        error_message: v.error_message.to_string(),
    };

    let mut out = vec![
        validation(columns - 1, formulas::literal_list(v.status), false),
        validation(columns, formulas::literal_list(v.action), true),
    ];
    for (col, source) in spec.role.lookups() {
        out.push(validation(
            *col,
            formulas::name_column_list(t.sheets.data(*source)),
            true,
        ));
    }
    out
}
