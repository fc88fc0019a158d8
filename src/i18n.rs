//! Arabic UI strings.
//!
//! Notices are shown through blocking alerts; labels feed the page chrome.

pub const CONFIG_MISSING: &str = "خطأ في التكوين: عنوان API غير محدد.";
pub const LOAD_FAILED: &str = "فشل تحميل بيانات التطبيق. يرجى المحاولة مرة أخرى.";
pub const REFRESH_SUCCEEDED: &str = "تم تحديث البيانات بنجاح";
pub const REFRESH_FAILED: &str = "فشل في تحديث البيانات.";

pub const NAV_DASHBOARD: &str = "لوحة التحكم";
pub const NAV_ORDERS: &str = "الطلبات";
pub const LOGOUT: &str = "تسجيل الخروج";
pub const REFRESH: &str = "تحديث البيانات";
pub const LOADING: &str = "جاري التحميل...";

pub const TOTAL_ORDERS: &str = "إجمالي الطلبات";
pub const TODAY_ORDERS: &str = "طلبات اليوم";
pub const PENDING_ORDERS: &str = "الطلبات المعلقة";
pub const CONFIRMED_ORDERS: &str = "الطلبات المؤكدة";

/// Language pack loaded by the orders table widget.
pub const TABLE_LANGUAGE_URL: &str = "//cdn.datatables.net/plug-ins/1.10.25/i18n/Arabic.json";
