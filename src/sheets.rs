//! Static description of the seven data-entry sheets.

/// A data-entry sheet of the catalog template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetRole {
    MainCategories,
    SubCategories,
    Colors,
    Sizes,
    Materials,
    Suppliers,
    Products,
}

/// A column of a data sheet. Header labels come from the translation bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Code,
    Name,
    Description,
    Status,
    Action,
    MainCategory,
    SubCategory,
    Contact,
    Email,
    Phone,
    Address,
    StartCode,
    Sku,
    Supplier,
    Colors,
    Sizes,
    Materials,
    UnitsPerPack,
    PackingInstructions,
    UnitsPerCarton,
    PricePerUnit,
}

/// How column A of a data sheet is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRule {
    /// Fixed three-letter prefix plus a running count of named rows.
    Prefixed(&'static str),
    /// Parent category code plus a count of siblings under the same parent.
    ChildOfParent,
    /// Settings prefix plus a per-supplier running number.
    Sku,
}

#[derive(Debug, Clone, Copy)]
pub struct SheetSpec {
    pub role: SheetRole,
    pub fields: &'static [Field],
    pub widths: &'static [f64],
    pub tab_color: &'static str,
    /// Whether the generated code column is locked once the sheet is protected.
    pub lock_first_column: bool,
}

impl SheetSpec {
    pub fn column_count(&self) -> u32 {
        self.fields.len() as u32
    }
}

const SIMPLE_FIELDS: &[Field] = &[
    Field::Code,
    Field::Name,
    Field::Description,
    Field::Status,
    Field::Action,
];
const SIMPLE_WIDTHS: &[f64] = &[15.0, 30.0, 40.0, 15.0, 15.0];

/// Data sheets in workbook order.
pub const DATA_SHEETS: [SheetSpec; 7] = [
    SheetSpec {
        role: SheetRole::MainCategories,
        fields: SIMPLE_FIELDS,
        widths: SIMPLE_WIDTHS,
        tab_color: "70AD47",
        lock_first_column: true,
    },
    SheetSpec {
        role: SheetRole::SubCategories,
        fields: &[
            Field::Code,
            Field::Name,
            Field::Description,
            Field::MainCategory,
            Field::Status,
            Field::Action,
        ],
        widths: &[15.0, 30.0, 40.0, 30.0, 15.0, 15.0],
        tab_color: "5B9BD5",
        lock_first_column: true,
    },
    SheetSpec {
        role: SheetRole::Colors,
        fields: SIMPLE_FIELDS,
        widths: SIMPLE_WIDTHS,
        tab_color: "C00000",
        lock_first_column: true,
    },
    SheetSpec {
        role: SheetRole::Sizes,
        fields: SIMPLE_FIELDS,
        widths: SIMPLE_WIDTHS,
        tab_color: "ED7D31",
        lock_first_column: true,
    },
    SheetSpec {
        role: SheetRole::Materials,
        fields: SIMPLE_FIELDS,
        widths: SIMPLE_WIDTHS,
        tab_color: "FFC000",
        lock_first_column: true,
    },
    SheetSpec {
        role: SheetRole::Suppliers,
        fields: &[
            Field::Code,
            Field::Name,
            Field::Contact,
            Field::Email,
            Field::Phone,
            Field::Address,
            Field::StartCode,
            Field::Status,
            Field::Action,
        ],
        widths: &[15.0, 30.0, 30.0, 40.0, 20.0, 50.0, 15.0, 15.0, 15.0],
        tab_color: "7030A0",
        lock_first_column: true,
    },
    SheetSpec {
        role: SheetRole::Products,
        fields: &[
            Field::Sku,
            Field::Name,
            Field::Description,
            Field::MainCategory,
            Field::SubCategory,
            Field::Supplier,
            Field::Colors,
            Field::Sizes,
            Field::Materials,
            Field::UnitsPerPack,
            Field::PackingInstructions,
            Field::UnitsPerCarton,
            Field::PricePerUnit,
            Field::Status,
            Field::Action,
        ],
        widths: &[
            15.0, 30.0, 40.0, 20.0, 20.0, 20.0, 30.0, 30.0, 20.0, 15.0, 40.0, 15.0, 15.0, 15.0,
            15.0,
        ],
        tab_color: "00B050",
        // SKU may be typed by hand to override the generated one.
        lock_first_column: false,
    },
];

impl SheetRole {
    pub fn code_rule(self) -> CodeRule {
        match self {
            SheetRole::MainCategories => CodeRule::Prefixed("CAT"),
            SheetRole::SubCategories => CodeRule::ChildOfParent,
            SheetRole::Colors => CodeRule::Prefixed("COL"),
            SheetRole::Sizes => CodeRule::Prefixed("SIZ"),
            SheetRole::Materials => CodeRule::Prefixed("MAT"),
            SheetRole::Suppliers => CodeRule::Prefixed("SUP"),
            SheetRole::Products => CodeRule::Sku,
        }
    }

    /// Columns whose dropdown is fed by another sheet's name column.
    pub fn lookups(self) -> &'static [(u32, SheetRole)] {
        match self {
            SheetRole::SubCategories => &[(4, SheetRole::MainCategories)],
            SheetRole::Products => &[
                (4, SheetRole::MainCategories),
                (5, SheetRole::SubCategories),
                (6, SheetRole::Suppliers),
                (7, SheetRole::Colors),
                (8, SheetRole::Sizes),
                (9, SheetRole::Materials),
            ],
            _ => &[],
        }
    }
}
