//! Static localization table.
//!
//! Display strings per locale for navigation labels, role names and the
//! shell messages the session core renders. Hebrew is the product default
//! and is laid out right-to-left.

use depot_core::{Page, Role};
use serde::{Deserialize, Serialize};

/// Supported display locales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Hebrew (right-to-left)
    #[default]
    Hebrew,
    /// English
    English,
}

/// Shell messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    /// Shown while bootstrapping
    Loading,
    /// Shown while a login is being completed
    Preparing,
    /// Error screen heading
    ErrorTitle,
    /// Retry button
    Retry,
    /// Fallback login failure message
    LoginFailed,
    /// Fallback startup failure message
    InitFailed,
}

impl Locale {
    /// Whether text in this locale is laid out right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Hebrew)
    }

    /// Look up a shell message
    pub fn text(&self, text: Text) -> &'static str {
        match (self, text) {
            (Locale::Hebrew, Text::Loading) => "טוען...",
            (Locale::Hebrew, Text::Preparing) => "מכין את המערכת...",
            (Locale::Hebrew, Text::ErrorTitle) => "⚠️ שגיאה",
            (Locale::Hebrew, Text::Retry) => "נסה שוב",
            (Locale::Hebrew, Text::LoginFailed) => "שגיאה בהתחברות",
            (Locale::Hebrew, Text::InitFailed) => "אתחול המערכת נכשל",
            (Locale::English, Text::Loading) => "Loading...",
            (Locale::English, Text::Preparing) => "Preparing the system...",
            (Locale::English, Text::ErrorTitle) => "⚠️ Error",
            (Locale::English, Text::Retry) => "Try again",
            (Locale::English, Text::LoginFailed) => "Login failed",
            (Locale::English, Text::InitFailed) => "Failed to initialize app",
        }
    }

    /// Navigation label for a page
    pub fn page_label(&self, page: Page) -> &'static str {
        match self {
            Locale::Hebrew => match page {
                Page::Dashboard => "לוח בקרה",
                Page::Orders => "הזמנות",
                Page::Tasks => "משימות",
                Page::Settings => "הגדרות",
                Page::Products => "מוצרים",
                Page::Deliveries => "משלוחים",
                Page::Route => "מסלול",
                Page::Customers => "לקוחות",
                Page::Reports => "דוחות",
                Page::Users => "משתמשים",
                Page::Chat => "קבוצות צ'אט",
                Page::Channels => "ערוצים",
                Page::Demo => "דמו",
            },
            Locale::English => match page {
                Page::Dashboard => "Dashboard",
                Page::Orders => "Orders",
                Page::Tasks => "Tasks",
                Page::Settings => "Settings",
                Page::Products => "Products",
                Page::Deliveries => "Deliveries",
                Page::Route => "Route",
                Page::Customers => "Customers",
                Page::Reports => "Reports",
                Page::Users => "Users",
                Page::Chat => "Group chats",
                Page::Channels => "Channels",
                Page::Demo => "Demo",
            },
        }
    }

    /// "Under construction" message for a page without an implementation
    pub fn under_construction(&self, page: Page) -> String {
        let label = self.page_label(page);
        match self {
            Locale::Hebrew => format!("עמוד {label} - בפיתוח"),
            Locale::English => format!("{label} page - under development"),
        }
    }

    /// Display name for a role
    pub fn role_name(&self, role: Role) -> &'static str {
        match self {
            Locale::Hebrew => match role {
                Role::Manager => "מנהל",
                Role::Dispatcher => "מוקדן",
                Role::Driver => "נהג",
                Role::Warehouse => "עובד מחסן",
                Role::Sales => "איש מכירות",
                Role::CustomerService => "שירות לקוחות",
                Role::User => "משתמש",
            },
            Locale::English => match role {
                Role::Manager => "Manager",
                Role::Dispatcher => "Dispatcher",
                Role::Driver => "Driver",
                Role::Warehouse => "Warehouse worker",
                Role::Sales => "Sales representative",
                Role::CustomerService => "Customer service",
                Role::User => "User",
            },
        }
    }
}

/// Icon shown next to a role name
pub fn role_icon(role: Role) -> &'static str {
    match role {
        Role::Manager => "👔",
        Role::Dispatcher => "📋",
        Role::Driver => "🚚",
        Role::Warehouse => "📦",
        Role::Sales => "💼",
        Role::CustomerService => "🎧",
        Role::User => "👤",
    }
}

/// Format a whole-shekel amount with thousands grouping, e.g. `₪1,250`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-₪{grouped}")
    } else {
        format!("₪{grouped}")
    }
}
