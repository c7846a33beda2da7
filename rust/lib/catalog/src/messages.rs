//! Localized message templates for toasts, alerts and prompts.
//!
//! Messages are addressed by path (`toast/added`,
//! `error/validation/empty_name`) and rendered for the current locale.
//! Templates use `{name}` placeholders filled from `(key, value)` params.
//!
//! ```ignore
//! let messages = Messages::new("ar");
//! assert_eq!(
//!     messages.render("toast/added", &[("title", "نوع وقود")]),
//!     "تمت إضافة نوع وقود جديد بنجاح",
//! );
//! ```

use showroom_core::ValidationError;

const AR: usize = 0;
const EN: usize = 1;

/// `[ar, en]` per path.
const TABLE: &[(&str, [&str; 2])] = &[
    // Toasts
    ("toast/added", ["تمت إضافة {title} جديد بنجاح", "{title} added successfully"]),
    ("toast/updated", ["تم تحديث {title} بنجاح", "{title} updated successfully"]),
    ("toast/deleted", ["تم حذف {title} بنجاح", "{title} deleted successfully"]),
    ("toast/reordered", ["تم تحديث الترتيب بنجاح", "Order updated successfully"]),
    // Delete confirmation
    ("prompt/delete/title", ["حذف {title}", "Delete {title}"]),
    ("prompt/delete/body", ["هل أنت متأكد من حذف \"{name}\"؟", "Are you sure you want to delete \"{name}\"?"]),
    ("prompt/delete/confirm", ["حذف", "Delete"]),
    ("prompt/delete/cancel", ["إلغاء", "Cancel"]),
    // Validation alerts
    ("error/validation/empty_name", ["يرجى إدخال الاسم", "Please enter a name"]),
    ("error/validation/missing_parent", ["يرجى اختيار العنصر الرئيسي", "Please choose a parent"]),
    ("error/validation/unknown_parent", ["العنصر الرئيسي المحدد غير موجود", "The selected parent no longer exists"]),
    ("error/validation/empty_selection", ["يرجى اختيار عنصر واحد على الأقل", "Please select at least one item"]),
    ("error/validation/malformed_color", ["رمز اللون غير صالح، استخدم الصيغة #RRGGBB", "Invalid color code, use #RRGGBB"]),
];

fn locale_index(locale: &str) -> usize {
    if locale == "ar" || locale.starts_with("ar-") {
        AR
    } else {
        EN
    }
}

/// Text of the delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub title: String,
    pub body: String,
    pub confirm: String,
    pub cancel: String,
}

/// Message catalog bound to one locale.
#[derive(Debug, Clone)]
pub struct Messages {
    locale: String,
}

impl Messages {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Template text for a path. Unknown paths come back as-is.
    pub fn get(&self, path: &str) -> String {
        let idx = locale_index(&self.locale);
        TABLE
            .iter()
            .find(|(key, _)| *key == path)
            .map(|(_, texts)| texts[idx].to_string())
            .unwrap_or_else(|| path.to_string())
    }

    /// Template text with `{key}` placeholders replaced.
    pub fn render(&self, path: &str, params: &[(&str, &str)]) -> String {
        params
            .iter()
            .fold(self.get(path), |text, (key, value)| {
                text.replace(&format!("{{{}}}", key), value)
            })
    }

    pub fn added(&self, title: &str) -> String {
        self.render("toast/added", &[("title", title)])
    }

    pub fn updated(&self, title: &str) -> String {
        self.render("toast/updated", &[("title", title)])
    }

    pub fn deleted(&self, title: &str) -> String {
        self.render("toast/deleted", &[("title", title)])
    }

    pub fn reordered(&self) -> String {
        self.get("toast/reordered")
    }

    /// Dialog asking to delete the record `name` of entity type `title`.
    pub fn delete_prompt(&self, title: &str, name: &str) -> DeletePrompt {
        DeletePrompt {
            title: self.render("prompt/delete/title", &[("title", title)]),
            body: self.render("prompt/delete/body", &[("name", name)]),
            confirm: self.get("prompt/delete/confirm"),
            cancel: self.get("prompt/delete/cancel"),
        }
    }

    /// Alert text for a failed validation rule.
    pub fn validation(&self, error: &ValidationError) -> String {
        self.get(&format!("error/validation/{}", error.message_key()))
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new("ar")
    }
}
