//! User-facing notification texts.

pub const MISSING_FIELDS: &str = "يرجى تعبئة جميع الحقول المطلوبة.";
pub const MISSING_SERVICE: &str = "يرجى اختيار نوع الخدمة.";
pub const SENT: &str = "تم إرسال طلبك بنجاح. سنعاود التواصل معك قريباً.";
pub const FAILED: &str = "حدث خطأ أثناء الإرسال. حاول مرة أخرى.";
