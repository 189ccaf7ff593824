use super::{Direction, Headers, Language, SettingsText, SheetNames, Translation, ValidationText};
use crate::instructions::{
    blank, note, section, support_email, title, updated, version, InstructionLine,
};
use crate::styles::Section;

pub(super) static EN: Translation = Translation {
    language: Language::En,
    direction: Direction::Ltr,
    sheets: SheetNames {
        instructions: "Instructions",
        settings: "Settings",
        main_categories: "Main Categories",
        sub_categories: "Sub Categories",
        colors: "Colors",
        sizes: "Sizes",
        materials: "Materials",
        suppliers: "Suppliers",
        products: "Products",
    },
    headers: Headers {
        code: "Code",
        name: "Name",
        description: "Description",
        status: "Status",
        action: "Action",
        main_category: "Main Category",
        sub_category: "Sub Category",
        contact: "Contact",
        email: "Email",
        phone: "Phone",
        address: "Address",
        start_code: "Start Code",
        sku: "SKU",
        supplier: "Supplier",
        colors: "Colors",
        sizes: "Sizes",
        materials: "Materials",
        units_per_pack: "Units Per Pack",
        packing_instructions: "Packing Instructions",
        units_per_carton: "Units Per Carton",
        price_per_unit: "Price Per Unit",
    },
    validations: ValidationText {
        status: &["Active", "Inactive"],
        action: &["Update", "Delete", "Add"],
        error_title: "Error",
        error_message: "Please select a value from the list",
    },
    settings: SettingsText {
        title: "SKU Settings",
        prefix: "Prefix",
        length: "Number of Characters",
        example: "Example",
        prefix_note: "The SKU prefix can be changed as needed",
        length_note: "The total number of SKU characters can be changed",
    },
    instructions: LINES,
};

const LINES: &[InstructionLine] = &[
    blank(),
    blank(),
    blank(),
    title("FlexiPI Template Usage Instructions"),
    blank(),
    version("Version: "),
    updated("Last Updated: "),
    section(Section::Main, "All Rights Reserved © FlexiPI"),
    blank(),
    section(Section::Main, "File Structure:"),
    section(Section::Main, "The file contains the following sheets:"),
    section(Section::Main, "1. Instructions - Current sheet"),
    section(Section::Settings, "2. Settings - System settings like SKU structure"),
    section(Section::MainCategories, "3. Main Categories - Manage main product categories"),
    section(Section::SubCategories, "4. Sub Categories - Manage sub-categories"),
    section(Section::Colors, "5. Colors - Manage available colors"),
    section(Section::Sizes, "6. Sizes - Manage available sizes"),
    section(Section::Materials, "7. Materials - Manage available materials"),
    section(Section::Suppliers, "8. Suppliers - Manage supplier details"),
    section(Section::Products, "9. Products - Manage inventory items"),
    blank(),
    note("General Instructions:"),
    note("1. Fill in the data in the following order:"),
    note("a. Main Categories"),
    note("b. Sub Categories"),
    note("c. Colors"),
    note("d. Sizes"),
    note("e. Materials"),
    note("f. Suppliers"),
    note("g. Products"),
    blank(),
    note("2. Code and SKU columns are locked and auto-filled (SKU can also be entered manually)"),
    note("3. In fields with dropdown lists, select only from the list"),
    note("4. Do not modify the file structure or add/delete columns"),
    note("5. You can add data rows as needed"),
    blank(),
    note("Field Details for Each Sheet:"),
    blank(),
    section(Section::MainCategories, "Main Categories:"),
    note("- Code: Auto-generated (CAT001, CAT002, ...)"),
    note("- Name: Category name (e.g., \"Kitchen Utensils\", \"Furniture\")"),
    note("- Description: Detailed category description"),
    note("- Status: Active/Inactive"),
    note("- Action: Update/Delete/Add"),
    blank(),
    section(Section::SubCategories, "Sub Categories:"),
    note("- Code: Auto-generated (CAT001-001, CAT001-002, ...)"),
    note("- Name: Sub-category name (e.g., \"Cutlery\", \"Chairs\")"),
    note("- Description: Detailed sub-category description"),
    note("- Main Category: Select from dropdown"),
    note("- Status: Active/Inactive"),
    note("- Action: Update/Delete/Add"),
    blank(),
    section(Section::Colors, "Colors:"),
    note("- Code: Auto-generated (COL001, COL002, ...)"),
    note("- Name: Color name (e.g., \"Red\", \"Blue\")"),
    note("- Description: Detailed description or color code"),
    note("- Status: Active/Inactive"),
    note("- Action: Update/Delete/Add"),
    blank(),
    section(Section::Sizes, "Sizes:"),
    note("- Code: Auto-generated (SIZ001, SIZ002, ...)"),
    note("- Name: Size (e.g., \"S\", \"M\", \"L\", \"XL\")"),
    note("- Description: Exact size specifications"),
    note("- Status: Active/Inactive"),
    note("- Action: Update/Delete/Add"),
    blank(),
    section(Section::Materials, "Materials:"),
    note("- Code: Auto-generated (MAT001, MAT002, ...)"),
    note("- Name: Material name (e.g., \"Oak Wood\", \"Plastic\")"),
    note("- Description: Technical specifications"),
    note("- Status: Active/Inactive"),
    note("- Action: Update/Delete/Add"),
    blank(),
    section(Section::Suppliers, "Suppliers:"),
    note("- Code: Auto-generated (SUP001, SUP002, ...)"),
    note("- Name: Company name"),
    note("- Contact: Contact person name"),
    note("- Email: Email address"),
    note("- Phone: Phone number"),
    note("- Address: Full address"),
    note("- Start Code: Starting number for the supplier's product numbering (optional)"),
    note("- Status: Active/Inactive"),
    note("- Action: Update/Delete/Add"),
    blank(),
    section(Section::Products, "Products:"),
    note("- SKU: Editable or auto-generated based on settings"),
    note("- Name: Product name"),
    note("- Description: Detailed product description"),
    note("- Main Category: Select from list"),
    note("- Sub Category: Select from list"),
    note("- Supplier: Select from list"),
    note("- Colors: Select from list"),
    note("- Sizes: Select from list"),
    note("- Materials: Select from list"),
    note("- Units Per Pack: Number of units"),
    note("- Packing Instructions: Special instructions"),
    note("- Units Per Carton: Number of units"),
    note("- Price Per Unit: Price in USD"),
    note("- Status: Active/Inactive"),
    note("- Action: Update/Delete/Add"),
    blank(),
    note("Important Notes:"),
    note("1. Ensure all required fields are filled"),
    note("2. When adding a new product, verify all selected values (categories, colors, etc.) exist and are active"),
    note("3. Enter prices as numbers only, without special characters"),
    note("4. Specify the action type in the \"Action\" column for any changes"),
    note("5. Do not delete existing rows, mark them as \"Inactive\" instead"),
    note("6. Start Code in Suppliers: Allows starting product numbering from a specific number for each supplier"),
    note("7. Important: Entering a manual SKU will break the automatic numbering sequence for that supplier"),
    blank(),
    note("Support:"),
    note("For technical support or questions, contact:"),
    support_email(),
];
