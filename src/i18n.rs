// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和希伯来文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::domain::Quantity;

/// 支持的语言
pub const SUPPORTED_LOCALES: &[&str] = &["en", "he"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "he"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 是否为支持的语言
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use housing_pipeline::i18n::t;
/// let msg = t("validate.passed");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 按指定语言翻译（不读取/修改全局 locale）
pub fn t_in(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use housing_pipeline::i18n::t_with_args;
/// let msg = t_with_args("validate.total_years", &[("count", "16")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 千分位格式化（整数不带小数位，其余保留两位）
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let abs = value.abs();
    let (int_part, frac_part) = if abs.fract() == 0.0 {
        (format!("{:.0}", abs), None)
    } else {
        let fixed = format!("{:.2}", abs);
        match fixed.split_once('.') {
            Some((i, f)) => (i.to_string(), Some(f.to_string())),
            None => (fixed, None),
        }
    };

    let grouped = group_digits(&int_part);
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// 格式化校验数值（整数按原值输出，不经 f64）
pub fn format_quantity(value: Quantity) -> String {
    match value {
        Quantity::Int(i) => {
            let sign = if i < 0 { "-" } else { "" };
            format!("{}{}", sign, group_digits(&i.unsigned_abs().to_string()))
        }
        Quantity::Float(f) => format_number(f),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
