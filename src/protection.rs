//! Sheet protection settings.

/// What a user may still do on a protected sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetPermissions {
    pub format_cells: bool,
    pub format_columns: bool,
    pub format_rows: bool,
    pub insert_columns: bool,
    pub delete_columns: bool,
    pub insert_rows: bool,
    pub delete_rows: bool,
    pub sort: bool,
    pub auto_filter: bool,
    pub select_locked_cells: bool,
    pub select_unlocked_cells: bool,
    pub edit_objects: bool,
    pub edit_scenarios: bool,
}

impl SheetPermissions {
    /// Data entry: rows may be added, removed, sorted and filtered, but the
    /// column structure and formatting stay fixed.
    pub const DATA_ENTRY: SheetPermissions = SheetPermissions {
        format_cells: false,
        format_columns: false,
        format_rows: false,
        insert_columns: false,
        delete_columns: false,
        insert_rows: true,
        delete_rows: true,
        sort: true,
        auto_filter: true,
        select_locked_cells: true,
        select_unlocked_cells: true,
        edit_objects: false,
        edit_scenarios: false,
    };

    /// Read only, selection allowed.
    pub const READ_ONLY: SheetPermissions = SheetPermissions {
        format_cells: false,
        format_columns: false,
        format_rows: false,
        insert_columns: false,
        delete_columns: false,
        insert_rows: false,
        delete_rows: false,
        sort: false,
        auto_filter: false,
        select_locked_cells: true,
        select_unlocked_cells: true,
        edit_objects: false,
        edit_scenarios: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLock {
    pub password: Option<String>,
    pub permissions: SheetPermissions,
}

/// Workbook-level lock: sheets cannot be added, removed, renamed or
/// reordered, and the window layout is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookLock {
    pub password: Option<String>,
    pub lock_structure: bool,
    pub lock_windows: bool,
}

/// Legacy 16-bit sheet password hash, as hex.
///
/// This is the `password` attribute of `<sheetProtection>`; it only keeps
/// honest users out.
pub fn legacy_hash(password: &str) -> String {
    let mut hash: u16 = 0;

    for ch in password.chars().rev() {
        hash = rotate(hash) ^ ch as u16;
    }
    hash = rotate(hash);

    hash ^= password.chars().count() as u16;
    hash ^= 0xCE4B;

    format!("{:04X}", hash)
}

// 15-bit rotate left
fn rotate(hash: u16) -> u16 {
    ((hash >> 14) & 0x01) | ((hash << 1) & 0x7FFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_hash() {
        assert_eq!(legacy_hash("password"), "83AF");
        assert_eq!(legacy_hash(""), "CE4B");
        assert_eq!(legacy_hash("FlexiPI@2025#System"), "F6FE");
    }

    #[test]
    fn test_data_entry_permissions() {
        let p = SheetPermissions::DATA_ENTRY;
        assert!(!p.format_cells && !p.format_columns && !p.format_rows);
        assert!(!p.insert_columns && !p.delete_columns);
        assert!(p.insert_rows && p.delete_rows && p.sort && p.auto_filter);
        assert!(p.select_locked_cells);
    }
}
