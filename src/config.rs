use crate::i18n::Language;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Fixed parameters of a template run.
///
/// The defaults are the values the published templates are built with; the
/// command line only overrides where files are read from and written to.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Product name used in the output file name.
    pub product: String,
    /// Template version shown on the instructions sheet and in the file name.
    pub version: String,
    /// Date of the last template update.
    pub release_date: NaiveDate,
    /// Password guarding every sheet except the instructions.
    pub sheet_password: String,
    pub support_email: String,
    pub output_dir: PathBuf,
    /// Optional logo for the instructions sheet. Skipped when absent.
    pub logo_path: PathBuf,
    /// Last pre-filled data row (inclusive). Row 1 holds the headers.
    pub last_row: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            product: "FlexiPI".to_string(),
            version: "1.0.0".to_string(),
            release_date: NaiveDate::from_ymd_opt(2025, 3, 30).unwrap_or_default(),
            sheet_password: "FlexiPI@2025#System".to_string(),
            support_email: "support@flexipi.com".to_string(),
            output_dir: Path::new("public").join("templates"),
            logo_path: Path::new("public")
                .join("images")
                .join("placeholder-logo.jpg"),
            last_row: 1000,
        }
    }
}

impl GeneratorConfig {
    /// Release date as printed on the instructions sheet.
    pub fn display_date(&self) -> String {
        self.release_date.format("%d/%m/%Y").to_string()
    }

    pub fn file_name(&self, lang: Language) -> String {
        format!(
            "{}_Template_v{}_{}_{}.xlsx",
            self.product,
            self.version,
            self.release_date.format("%d_%m_%Y"),
            lang.code()
        )
    }

    pub fn output_path(&self, lang: Language) -> PathBuf {
        self.output_dir.join(self.file_name(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_depends_on_language() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.file_name(Language::He),
            "FlexiPI_Template_v1.0.0_30_03_2025_he.xlsx"
        );
        assert_eq!(
            config.output_path(Language::En),
            Path::new("public/templates/FlexiPI_Template_v1.0.0_30_03_2025_en.xlsx")
        );
    }

    #[test]
    fn test_display_date() {
        assert_eq!(GeneratorConfig::default().display_date(), "30/03/2025");
    }
}
