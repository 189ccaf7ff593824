use super::{Direction, Headers, Language, SettingsText, SheetNames, Translation, ValidationText};
use crate::instructions::{
    blank, note, section, support_email, title, updated, version, InstructionLine,
};
use crate::styles::Section;

pub(super) static HE: Translation = Translation {
    language: Language::He,
    direction: Direction::Rtl,
    sheets: SheetNames {
        instructions: "הנחיות",
        settings: "הגדרות",
        main_categories: "קטגוריות ראשיות",
        sub_categories: "קטגוריות משנה",
        colors: "צבעים",
        sizes: "מידות",
        materials: "חומרים",
        suppliers: "ספקים",
        products: "מוצרים",
    },
    headers: Headers {
        code: "קוד",
        name: "שם",
        description: "תיאור",
        status: "סטטוס",
        action: "פעולה",
        main_category: "קטגוריה ראשית",
        sub_category: "קטגוריית משנה",
        contact: "איש קשר",
        email: "אימייל",
        phone: "טלפון",
        address: "כתובת",
        start_code: "קוד התחלתי",
        sku: "מק\"ט",
        supplier: "ספק",
        colors: "צבעים",
        sizes: "מידות",
        materials: "חומרים",
        units_per_pack: "כמות באריזה",
        packing_instructions: "הוראות אריזה",
        units_per_carton: "כמות בקרטון",
        price_per_unit: "מחיר ליחידה",
    },
    validations: ValidationText {
        status: &["פעיל", "לא פעיל"],
        action: &["עדכון", "מחיקה", "הוספה"],
        error_title: "שגיאה",
        error_message: "יש לבחור ערך מהרשימה בלבד",
    },
    settings: SettingsText {
        title: "הגדרות מק\"ט",
        prefix: "קידומת",
        length: "כמות תווים",
        example: "דוגמה",
        prefix_note: "ניתן לשנות את קידומת המק\"ט לפי הצורך",
        length_note: "ניתן לשנות את מספר התווים הכולל של המק\"ט",
    },
    instructions: LINES,
};

const LINES: &[InstructionLine] = &[
    blank(),
    blank(),
    blank(),
    title("הנחיות שימוש בקובץ טמפלייט לניהול הזמנות FlexiPI"),
    blank(),
    version("גרסה: "),
    updated("תאריך עדכון אחרון: "),
    section(Section::Main, "כל הזכויות שמורות © FlexiPI"),
    blank(),
    section(Section::Main, "מבנה הקובץ:"),
    section(Section::Main, "הקובץ מכיל את הגיליונות הבאים:"),
    section(Section::Main, "הנחיות - הגיליון הנוכחי .1"),
    section(Section::Settings, "הגדרות - הגדרות מערכת כגון מבנה מק\"ט .2"),
    section(Section::MainCategories, "קטגוריות ראשיות - ניהול קטגוריות ראשיות של מוצרים .3"),
    section(Section::SubCategories, "קטגוריות משנה - ניהול תתי-קטגוריות .4"),
    section(Section::Colors, "צבעים - ניהול צבעים זמינים .5"),
    section(Section::Sizes, "מידות - ניהול מידות זמינות .6"),
    section(Section::Materials, "חומרים - ניהול חומרים זמינים .7"),
    section(Section::Suppliers, "ספקים - ניהול פרטי ספקים .8"),
    section(Section::Products, "מוצרים - ניהול פריטי המלאי .9"),
    blank(),
    note("הנחיות כלליות:"),
    note("יש למלא את הנתונים בסדר הבא: .1"),
    note("קטגוריות ראשיות .א"),
    note("קטגוריות משנה .ב"),
    note("צבעים .ג"),
    note("מידות .ד"),
    note("חומרים .ה"),
    note("ספקים .ו"),
    note("מוצרים .ז"),
    blank(),
    note("עמודות הקוד והמק\"ט נעולות ומתמלאות אוטומטית (מק\"ט בלבד ניתן להזין גם ידנית) .2"),
    note("בשדות עם רשימה נפתחת יש לבחור מהרשימה בלבד .3"),
    note("אין לשנות את מבנה הקובץ או להוסיף/למחוק עמודות .4"),
    note("ניתן להוסיף שורות נתונים ככל שנדרש .5"),
    blank(),
    note("פירוט השדות בכל גיליון:"),
    blank(),
    section(Section::MainCategories, "קטגוריות ראשיות:"),
    note("קוד: נוצר אוטומטית (CAT001, CAT002, ...) -"),
    note("שם: שם הקטגוריה (לדוגמה: \"כלי מטבח\", \"ריהוט\") -"),
    note("תיאור: תיאור מפורט של הקטגוריה -"),
    note("סטטוס: פעיל/לא פעיל -"),
    note("פעולה: עדכון/מחיקה/הוספה -"),
    blank(),
    section(Section::SubCategories, "קטגוריות משנה:"),
    note("קוד: נוצר אוטומטית (CAT001-001, CAT001-002, ...) -"),
    note("שם: שם תת-הקטגוריה (לדוגמה: \"סכו\"ם\", \"כיסאות\") -"),
    note("תיאור: תיאור מפורט של תת-הקטגוריה -"),
    note("קטגוריה ראשית: בחירה מרשימה נפתחת -"),
    note("סטטוס: פעיל/לא פעיל -"),
    note("פעולה: עדכון/מחיקה/הוספה -"),
    blank(),
    section(Section::Colors, "צבעים:"),
    note("קוד: נוצר אוטומטית (COL001, COL002, ...) -"),
    note("שם: שם הצבע (לדוגמה: \"אדום\", \"כחול\") -"),
    note("תיאור: תיאור מפורט או קוד צבע -"),
    note("סטטוס: פעיל/לא פעיל -"),
    note("פעולה: עדכון/מחיקה/הוספה -"),
    blank(),
    section(Section::Sizes, "מידות:"),
    note("קוד: נוצר אוטומטית (SIZ001, SIZ002, ...) -"),
    note("שם: המידה (לדוגמה: \"S\", \"M\", \"L\", \"XL\") -"),
    note("תיאור: פירוט מדויק של המידה -"),
    note("סטטוס: פעיל/לא פעיל -"),
    note("פעולה: עדכון/מחיקה/הוספה -"),
    blank(),
    section(Section::Materials, "חומרים:"),
    note("קוד: נוצר אוטומטית (MAT001, MAT002, ...) -"),
    note("שם: שם החומר (לדוגמה: \"עץ אלון\", \"פלסטיק\") -"),
    note("תיאור: מפרט טכני של החומר -"),
    note("סטטוס: פעיל/לא פעיל -"),
    note("פעולה: עדכון/מחיקה/הוספה -"),
    blank(),
    section(Section::Suppliers, "ספקים:"),
    note("קוד: נוצר אוטומטית (SUP001, SUP002, ...) -"),
    note("שם: שם החברה -"),
    note("איש קשר: שם איש הקשר -"),
    note("אימייל: כתובת דוא\"ל -"),
    note("טלפון: מספר טלפון -"),
    note("כתובת: כתובת מלאה -"),
    note("קוד התחלתי: מספר התחלתי לקידוד מוצרי הספק (אופציונלי) -"),
    note("סטטוס: פעיל/לא פעיל -"),
    note("פעולה: עדכון/מחיקה/הוספה -"),
    blank(),
    section(Section::Products, "מוצרים:"),
    note("מק\"ט: נוצר אוטומטית או ידנית -"),
    note("שם: שם המוצר -"),
    note("תיאור: תיאור מפורט של המוצר -"),
    note("קטגוריה ראשית: בחירה מרשימה -"),
    note("קטגוריית משנה: בחירה מרשימה -"),
    note("ספק: בחירה מרשימה -"),
    note("צבעים: בחירה מרשימה -"),
    note("מידות: בחירה מרשימה -"),
    note("חומרים: בחירה מרשימה -"),
    note("כמות באריזה: מספר יחידות -"),
    note("הוראות אריזה: הנחיות מיוחדות -"),
    note("כמות בקרטון: מספר יחידות -"),
    note("מחיר ליחידה: מחיר ב-USD -"),
    note("סטטוס: פעיל/לא פעיל -"),
    note("פעולה: עדכון/מחיקה/הוספה -"),
    blank(),
    note("הערות חשובות:"),
    note("יש לוודא שכל השדות החובה מלאים .1"),
    note("בעת הוספת מוצר חדש, יש לוודא שכל הערכים הנבחרים (קטגוריות, צבעים וכו') קיימים ופעילים .2"),
    note("מחירים יש להזין במספרים בלבד, ללא סימנים מיוחדים .3"),
    note("בכל שינוי יש לציין את סוג הפעולה בעמודת \"פעולה\" .4"),
    note("אין למחוק שורות קיימות, אלא רק לסמן אותן כ\"לא פעיל\" .5"),
    note("קוד התחלתי בספקים: מאפשר להתחיל את מספור המוצרים ממספר מסוים עבור כל ספק .6"),
    note("חשוב: הזנת מק\"ט ידני תשבור את רצף המספור האוטומטי עבור אותו ספק .7"),
    blank(),
    note("תמיכה:"),
    note("במקרה של תקלה או שאלה, ניתן לפנות לתמיכה הטכנית:"),
    support_email(),
];
