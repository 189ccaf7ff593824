//! Named cell styles and the registry that holds them.
//!
//! Styles are described as plain data first so the layout can refer to them
//! by name; they only become `umya_spreadsheet::Style` values when a sheet is
//! rendered.

use crate::i18n::Direction;
use indexmap::IndexMap;
use umya_spreadsheet::{
    Border, HorizontalAlignmentValues, PatternValues, Style, VerticalAlignmentValues,
};

pub const HEADER: &str = "header_style";
pub const CELL: &str = "cell_style";
pub const INSTRUCTION_HEADER: &str = "instruction_header_style";
pub const INSTRUCTION_CELL: &str = "instruction_cell_style";
pub const SETTINGS_HEADER: &str = "settings_header_style";
pub const SETTINGS_VALUE: &str = "settings_value_style";
pub const BANNER: &str = "banner_style";

const FONT_NAME: &str = "Arial";
const BLACK: &str = "000000";
const WHITE: &str = "FFFFFF";

/// Accent used for a block of the instructions sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Main,
    Settings,
    MainCategories,
    SubCategories,
    Colors,
    Sizes,
    Materials,
    Suppliers,
    Products,
    Notes,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Main,
        Section::Settings,
        Section::MainCategories,
        Section::SubCategories,
        Section::Colors,
        Section::Sizes,
        Section::Materials,
        Section::Suppliers,
        Section::Products,
        Section::Notes,
    ];

    pub fn style_name(self) -> &'static str {
        match self {
            Section::Main => "section_main_style",
            Section::Settings => "section_settings_style",
            Section::MainCategories => "section_main_categories_style",
            Section::SubCategories => "section_sub_categories_style",
            Section::Colors => "section_colors_style",
            Section::Sizes => "section_sizes_style",
            Section::Materials => "section_materials_style",
            Section::Suppliers => "section_suppliers_style",
            Section::Products => "section_products_style",
            Section::Notes => "section_notes_style",
        }
    }

    /// Fill color; matches the tab color of the sheet the section describes.
    pub fn fill(self) -> &'static str {
        match self {
            Section::Main => "4472C4",
            Section::Settings => "FF0000",
            Section::MainCategories => "70AD47",
            Section::SubCategories => "5B9BD5",
            Section::Colors => "C00000",
            Section::Sizes => "ED7D31",
            Section::Materials => "FFC000",
            Section::Suppliers => "7030A0",
            Section::Products => "00B050",
            Section::Notes => "808080",
        }
    }

    fn text_color(self) -> &'static str {
        // light fills
        match self {
            Section::Sizes | Section::Materials => BLACK,
            _ => WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderWeight {
    Thin,
    Medium,
}

impl BorderWeight {
    fn as_str(self) -> &'static str {
        match self {
            BorderWeight::Thin => "thin",
            BorderWeight::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl From<Direction> for HAlign {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Rtl => HAlign::Right,
            Direction::Ltr => HAlign::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f64,
    pub bold: bool,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Borders {
    pub left: BorderWeight,
    pub right: BorderWeight,
    pub top: BorderWeight,
    pub bottom: BorderWeight,
}

impl Borders {
    pub const fn all(weight: BorderWeight) -> Self {
        Self {
            left: weight,
            right: weight,
            top: weight,
            bottom: weight,
        }
    }
}

/// A reusable bundle of font, fill, border and alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedStyle {
    pub name: &'static str,
    pub font: FontSpec,
    /// Solid fill color, RGB hex.
    pub fill: Option<&'static str>,
    pub borders: Borders,
    pub horizontal: HAlign,
}

impl NamedStyle {
    pub fn to_style(&self) -> Style {
        let mut style = Style::default();

        let font = style.get_font_mut();
        font.set_name(FONT_NAME);
        font.set_size(self.font.size);
        font.set_bold(self.font.bold);
        font.get_color_mut().set_argb(argb(self.font.color));

        if let Some(fill) = self.fill {
            style
                .get_fill_mut()
                .get_pattern_fill_mut()
                .set_pattern_type(PatternValues::Solid)
                .get_foreground_color_mut()
                .set_argb(argb(fill));
        }

        let borders = style.get_borders_mut();
        set_border(borders.get_left_border_mut(), self.borders.left);
        set_border(borders.get_right_border_mut(), self.borders.right);
        set_border(borders.get_top_border_mut(), self.borders.top);
        set_border(borders.get_bottom_border_mut(), self.borders.bottom);

        let alignment = style.get_alignment_mut();
        alignment.set_horizontal(match self.horizontal {
            HAlign::Left => HorizontalAlignmentValues::Left,
            HAlign::Center => HorizontalAlignmentValues::Center,
            HAlign::Right => HorizontalAlignmentValues::Right,
        });
        alignment.set_vertical(VerticalAlignmentValues::Center);
        alignment.set_wrap_text(true);

        style
    }
}

fn set_border(border: &mut Border, weight: BorderWeight) {
    border.set_border_style(weight.as_str());
    border.get_color_mut().set_argb(argb(BLACK));
}

fn argb(rgb: &str) -> String {
    format!("FF{rgb}")
}

/// Styles keyed by name, in registration order.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: IndexMap<&'static str, NamedStyle>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `style` unless a style with the same name exists.
    /// Returns whether it was added.
    pub fn register(&mut self, style: NamedStyle) -> bool {
        if self.styles.contains_key(style.name) {
            return false;
        }
        self.styles.insert(style.name, style);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedStyle> {
        self.styles.values()
    }
}

#[cfg(test)]
impl StyleRegistry {
    pub fn get(&self, name: &str) -> Option<&NamedStyle> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }
}

/// The full palette for one text direction.
pub fn palette(direction: Direction) -> StyleRegistry {
    let align = HAlign::from(direction);
    let thin = Borders::all(BorderWeight::Thin);
    let plain = FontSpec {
        size: 11.0,
        bold: false,
        color: BLACK,
    };

    let mut registry = StyleRegistry::new();
    registry.register(NamedStyle {
        name: HEADER,
        font: FontSpec {
            size: 11.0,
            bold: true,
            color: WHITE,
        },
        fill: Some("2E7D32"),
        borders: Borders::all(BorderWeight::Medium),
        horizontal: HAlign::Center,
    });
    registry.register(NamedStyle {
        name: CELL,
        font: plain,
        fill: None,
        borders: thin,
        horizontal: align,
    });
    registry.register(NamedStyle {
        name: INSTRUCTION_HEADER,
        font: FontSpec {
            size: 14.0,
            bold: true,
            color: WHITE,
        },
        fill: Some("4472C4"),
        borders: Borders {
            bottom: BorderWeight::Medium,
            ..thin
        },
        horizontal: align,
    });
    registry.register(NamedStyle {
        name: INSTRUCTION_CELL,
        font: plain,
        fill: None,
        borders: thin,
        horizontal: align,
    });
    for section in Section::ALL {
        registry.register(NamedStyle {
            name: section.style_name(),
            font: FontSpec {
                size: 12.0,
                bold: true,
                color: section.text_color(),
            },
            fill: Some(section.fill()),
            borders: thin,
            horizontal: align,
        });
    }
    registry.register(NamedStyle {
        name: SETTINGS_HEADER,
        font: FontSpec {
            size: 12.0,
            bold: true,
            color: WHITE,
        },
        fill: Some("FF0000"),
        borders: thin,
        horizontal: align,
    });
    registry.register(NamedStyle {
        name: SETTINGS_VALUE,
        font: plain,
        fill: None,
        borders: thin,
        horizontal: align,
    });
    registry.register(NamedStyle {
        name: BANNER,
        font: plain,
        fill: Some(WHITE),
        borders: thin,
        horizontal: HAlign::Center,
    });
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = palette(Direction::Ltr);
        let before = registry.len();
        let mut changed = registry.get(CELL).unwrap().clone();
        changed.font.size = 30.0;

        assert!(!registry.register(changed));
        assert_eq!(registry.len(), before);
        assert_eq!(registry.get(CELL).unwrap().font.size, 11.0);
    }

    #[test]
    fn test_palette_contents() {
        let registry = palette(Direction::Rtl);
        for section in Section::ALL {
            assert!(registry.contains(section.style_name()));
        }
        for name in [
            HEADER,
            CELL,
            INSTRUCTION_HEADER,
            INSTRUCTION_CELL,
            SETTINGS_HEADER,
            SETTINGS_VALUE,
            BANNER,
        ] {
            assert!(registry.contains(name), "{name}");
        }
        assert_eq!(registry.len(), 17);
        // first registered comes first
        assert_eq!(registry.iter().next().unwrap().name, HEADER);
    }

    #[test]
    fn test_alignment_follows_direction() {
        let rtl = palette(Direction::Rtl);
        let ltr = palette(Direction::Ltr);
        assert_eq!(rtl.get(CELL).unwrap().horizontal, HAlign::Right);
        assert_eq!(ltr.get(CELL).unwrap().horizontal, HAlign::Left);
        assert_eq!(rtl.get(HEADER).unwrap().horizontal, HAlign::Center);
    }

    #[test]
    fn test_light_sections_use_dark_text() {
        let registry = palette(Direction::Ltr);
        let sizes = registry.get(Section::Sizes.style_name()).unwrap();
        let colors = registry.get(Section::Colors.style_name()).unwrap();
        assert_eq!(sizes.font.color, BLACK);
        assert_eq!(colors.font.color, WHITE);
    }

    #[test]
    fn test_to_style_sets_fill_and_font() {
        let registry = palette(Direction::Ltr);
        let style = registry.get(HEADER).unwrap().to_style();
        let font = style.get_font().unwrap();
        assert!(*font.get_bold());
        assert_eq!(font.get_name(), FONT_NAME);
        let fg = style
            .get_fill()
            .and_then(|f| f.get_pattern_fill())
            .and_then(|p| p.get_foreground_color())
            .map(|c| c.get_argb().to_string());
        assert_eq!(fg.as_deref(), Some("FF2E7D32"));
    }
}
