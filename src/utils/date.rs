use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // e.g. "2023年04月15日", possibly followed by "頃" or "発売予定"
    static ref SALES_DATE: Regex = Regex::new(r"([0-9]{4})年([0-9]{2})月([0-9]{2})日")
        .expect("sales date pattern");
}

// Reformats the first localized sales date found in `sales_date` as YYYY-MM-DD.
// The digits are carried over as-is, no calendar validation.
pub(crate) fn normalize_sales_date(sales_date: &str) -> Option<String> {
    SALES_DATE.captures(sales_date).map(|caps| {
        format!("{}-{}-{}", &caps[1], &caps[2], &caps[3])
    })
}
