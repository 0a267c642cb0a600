use crate::models::{Category, DestructiveAction, Language};

/// Display strings for one language.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub select_category: &'static str,
    pub current_count: &'static str,
    pub count_button: &'static str,
    pub count_hint: &'static str,
    pub reset_counter: &'static str,
    pub clear_all: &'static str,
    pub statistics: &'static str,
    pub total_all: &'static str,
    pub current_session: &'static str,
    pub most_used: &'static str,
    pub times: &'static str,
    pub saved_totals: &'static str,
    pub session: &'static str,
    pub current_streak: &'static str,
    pub longest_streak: &'static str,
    pub daily_average: &'static str,
    pub weekly_average: &'static str,
    pub best_day: &'static str,
    pub reset_message: &'static str,
    pub clear_message: &'static str,
    pub language: &'static str,
    pub load_error: &'static str,
    categories: [&'static str; 6],
}

impl Strings {
    pub fn category(&self, category: Category) -> &'static str {
        self.categories[category as usize]
    }
}

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::Ar => &AR,
        Language::En => &EN,
        Language::Th => &TH,
    }
}

pub fn category_label(language: Language, category: Category) -> &'static str {
    strings(language).category(category)
}

impl DestructiveAction {
    /// Question shown before the action is applied.
    pub fn prompt(&self, language: Language) -> String {
        let strings = strings(language);
        match self {
            DestructiveAction::ResetCurrent(category) => {
                let mark = if language.is_rtl() { '؟' } else { '?' };
                format!("{} {}{mark}", strings.reset_message, strings.category(*category))
            }
            DestructiveAction::ClearAll => strings.clear_message.to_string(),
        }
    }
}

static AR: Strings = Strings {
    title: "ADHKAR - أذكار",
    subtitle: "احفظ أورادك اليومية بسهولة",
    select_category: "اختر نوع الذكر",
    current_count: "العدد الحالي",
    count_button: "سَبِّح",
    count_hint: "اضغط للعد",
    reset_counter: "إعادة تعيين العداد",
    clear_all: "مسح جميع البيانات",
    statistics: "الإحصائيات",
    total_all: "إجمالي جميع الأذكار",
    current_session: "الجلسة الحالية",
    most_used: "الأكثر استخداماً",
    times: "مرة",
    saved_totals: "إجمالي الأذكار المحفوظة",
    session: "جلسة حالية",
    current_streak: "السلسلة الحالية",
    longest_streak: "أطول سلسلة",
    daily_average: "المعدل اليومي",
    weekly_average: "المعدل الأسبوعي",
    best_day: "أفضل يوم",
    reset_message: "هل تريد إعادة تعيين العداد الحالي لـ",
    clear_message: "هل أنت متأكد من مسح جميع البيانات المحفوظة؟ لا يمكن التراجع عن هذا الإجراء.",
    language: "اللغة",
    load_error: "حدث خطأ أثناء تحميل البيانات المحفوظة",
    categories: [
        "سبحان الله",
        "الحمد لله",
        "الله أكبر",
        "لا إله إلا الله",
        "أستغفر الله",
        "لا حول ولا قوة إلا بالله",
    ],
};

static EN: Strings = Strings {
    title: "ADHKAR",
    subtitle: "Keep track of your daily prayers",
    select_category: "Select Dhikr Type",
    current_count: "Current Count",
    count_button: "Count",
    count_hint: "Tap to count",
    reset_counter: "Reset Counter",
    clear_all: "Clear All Data",
    statistics: "Statistics",
    total_all: "Total All Dhikr",
    current_session: "Current Session",
    most_used: "Most Used",
    times: "times",
    saved_totals: "Saved Totals",
    session: "current session",
    current_streak: "Current Streak",
    longest_streak: "Longest Streak",
    daily_average: "Daily Average",
    weekly_average: "Weekly Average",
    best_day: "Best Day",
    reset_message: "Do you want to reset the current counter for",
    clear_message: "Are you sure you want to clear all saved data? This action cannot be undone.",
    language: "Language",
    load_error: "An error occurred while loading saved data",
    categories: [
        "Subhan Allah (Glory be to Allah)",
        "Alhamdulillah (Praise be to Allah)",
        "Allahu Akbar (Allah is Greatest)",
        "La ilaha illallah (No god but Allah)",
        "Astaghfirullah (I seek forgiveness)",
        "La hawla wala quwwata illa billah",
    ],
};

static TH: Strings = Strings {
    title: "ADHKAR - อัซการ์",
    subtitle: "บันทึกการภาวนาประจำวันของคุณ",
    select_category: "เลือกประเภทซิกร์",
    current_count: "จำนวนปัจจุบัน",
    count_button: "นับ",
    count_hint: "แตะเพื่อนับ",
    reset_counter: "รีเซ็ตตัวนับ",
    clear_all: "ลบข้อมูลทั้งหมด",
    statistics: "สถิติ",
    total_all: "ซิกร์ทั้งหมด",
    current_session: "เซสชันปัจจุบัน",
    most_used: "ใช้มากที่สุด",
    times: "ครั้ง",
    saved_totals: "ข้อมูลที่บันทึก",
    session: "เซสชันปัจจุบัน",
    current_streak: "ต่อเนื่องปัจจุบัน",
    longest_streak: "ต่อเนื่องยาวที่สุด",
    daily_average: "เฉลี่ยต่อวัน",
    weekly_average: "เฉลี่ยต่อสัปดาห์",
    best_day: "วันที่ดีที่สุด",
    reset_message: "คุณต้องการรีเซ็ตตัวนับปัจจุบันสำหรับ",
    clear_message: "คุณแน่ใจหรือไม่ว่าต้องการลบข้อมูลที่บันทึกทั้งหมด? การดำเนินการนี้ไม่สามารถย้อนกลับได้",
    language: "ภาษา",
    load_error: "เกิดข้อผิดพลาดขณะโหลดข้อมูลที่บันทึกไว้",
    categories: [
        "ซุบฮานัลลอฮ์ (พระเจ้าทรงบริสุทธิ์)",
        "อัลฮัมดุลิลลาฮ์ (สรรเสริญพระเจ้า)",
        "อัลลอฮุอักบัร (พระเจ้ายิ่งใหญ่ที่สุด)",
        "ลาอิลาฮะอิลลัลลอฮ์ (ไม่มีพระเจ้านอกจากอัลลอฮ์)",
        "อัสตัฆฟิรุลลอฮ์ (ขอการอภัย)",
        "ลาเฮาละวะลากุ๊วะตะอิลลาบิลลาฮ์",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_labels_every_category() {
        for language in Language::ALL {
            for category in Category::ALL {
                assert!(!category_label(language, category).is_empty());
            }
        }
    }

    #[test]
    fn labels_follow_enumeration_order() {
        assert_eq!(
            category_label(Language::En, Category::LaHawla),
            "La hawla wala quwwata illa billah"
        );
        assert_eq!(category_label(Language::Ar, Category::SubhanAllah), "سبحان الله");
    }

    #[test]
    fn prompts_are_localized() {
        let reset = DestructiveAction::ResetCurrent(Category::AllahuAkbar).prompt(Language::En);
        assert_eq!(
            reset,
            "Do you want to reset the current counter for Allahu Akbar (Allah is Greatest)?"
        );
        let reset = DestructiveAction::ResetCurrent(Category::AllahuAkbar).prompt(Language::Ar);
        assert!(reset.ends_with("الله أكبر؟"));
        assert_eq!(
            DestructiveAction::ClearAll.prompt(Language::Th),
            strings(Language::Th).clear_message
        );
    }
}
