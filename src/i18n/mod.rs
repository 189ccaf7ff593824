//! Translation bundles for the supported template languages.

mod en;
mod he;

use crate::error::{Error, Result};
use crate::instructions::InstructionLine;
use crate::sheets::{Field, SheetRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    He,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::He, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| Error::UnsupportedLanguage {
                code: code.to_string(),
                supported: Self::ALL.map(Language::code).join(", "),
            })
    }

    pub fn translation(self) -> &'static Translation {
        match self {
            Language::He => &he::HE,
            Language::En => &en::EN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

#[derive(Debug)]
pub struct SheetNames {
    pub instructions: &'static str,
    pub settings: &'static str,
    pub main_categories: &'static str,
    pub sub_categories: &'static str,
    pub colors: &'static str,
    pub sizes: &'static str,
    pub materials: &'static str,
    pub suppliers: &'static str,
    pub products: &'static str,
}

impl SheetNames {
    pub fn data(&self, role: SheetRole) -> &'static str {
        match role {
            SheetRole::MainCategories => self.main_categories,
            SheetRole::SubCategories => self.sub_categories,
            SheetRole::Colors => self.colors,
            SheetRole::Sizes => self.sizes,
            SheetRole::Materials => self.materials,
            SheetRole::Suppliers => self.suppliers,
            SheetRole::Products => self.products,
        }
    }
}

#[derive(Debug)]
pub struct Headers {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub action: &'static str,
    pub main_category: &'static str,
    pub sub_category: &'static str,
    pub contact: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub start_code: &'static str,
    pub sku: &'static str,
    pub supplier: &'static str,
    pub colors: &'static str,
    pub sizes: &'static str,
    pub materials: &'static str,
    pub units_per_pack: &'static str,
    pub packing_instructions: &'static str,
    pub units_per_carton: &'static str,
    pub price_per_unit: &'static str,
}

impl Headers {
    pub fn label(&self, field: Field) -> &'static str {
        match field {
            Field::Code => self.code,
            Field::Name => self.name,
            Field::Description => self.description,
            Field::Status => self.status,
            Field::Action => self.action,
            Field::MainCategory => self.main_category,
            Field::SubCategory => self.sub_category,
            Field::Contact => self.contact,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Address => self.address,
            Field::StartCode => self.start_code,
            Field::Sku => self.sku,
            Field::Supplier => self.supplier,
            Field::Colors => self.colors,
            Field::Sizes => self.sizes,
            Field::Materials => self.materials,
            Field::UnitsPerPack => self.units_per_pack,
            Field::PackingInstructions => self.packing_instructions,
            Field::UnitsPerCarton => self.units_per_carton,
            Field::PricePerUnit => self.price_per_unit,
        }
    }
}

#[derive(Debug)]
pub struct ValidationText {
    pub status: &'static [&'static str],
    pub action: &'static [&'static str],
    pub error_title: &'static str,
    pub error_message: &'static str,
}

#[derive(Debug)]
pub struct SettingsText {
    pub title: &'static str,
    pub prefix: &'static str,
    pub length: &'static str,
    pub example: &'static str,
    pub prefix_note: &'static str,
    pub length_note: &'static str,
}

#[derive(Debug)]
pub struct Translation {
    pub language: Language,
    pub direction: Direction,
    pub sheets: SheetNames,
    pub headers: Headers,
    pub validations: ValidationText,
    pub settings: SettingsText,
    pub instructions: &'static [InstructionLine],
}
