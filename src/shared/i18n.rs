//! Minimal message localization.
//!
//! A [`Trans`] is resolved per request from `Accept-Language` and handed to the
//! mutating template prompt operations. It only changes the wording of messages
//! returned to the caller, never an outcome.

/// Supported response languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    ZhCn,
}

impl Locale {
    /// Parse a single language tag such as `en-US`, `zh`, or `zh-Hans-CN`
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::ZhCn),
            _ => None,
        }
    }

    /// Pick the supported language with the highest q-value from an `Accept-Language` header.
    /// Ties keep header order.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut best: Option<(Self, f32)> = None;

        for entry in header.split(',') {
            let mut parts = entry.split(';');
            let Some(locale) = parts.next().and_then(Locale::parse) else {
                continue;
            };

            let quality = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            if quality <= 0.0 {
                continue;
            }
            if best.map_or(true, |(_, q)| quality > q) {
                best = Some((locale, quality));
            }
        }

        best.map(|(locale, _)| locale)
    }
}

/// Messages surfaced by template prompt operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    TemplatePromptNotFound,
    TemplatePromptForbidden,
}

/// Translator bound to one locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trans {
    pub locale: Locale,
}

impl Trans {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn text(&self, key: MessageKey) -> &'static str {
        match (self.locale, key) {
            (Locale::En, MessageKey::TemplatePromptNotFound) => "Template prompt not found",
            (Locale::En, MessageKey::TemplatePromptForbidden) => {
                "No permission to modify this template prompt"
            }
            (Locale::ZhCn, MessageKey::TemplatePromptNotFound) => "模板提示词不存在",
            (Locale::ZhCn, MessageKey::TemplatePromptForbidden) => "无权操作该模板提示词",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("zh-CN"), Some(Locale::ZhCn));
        assert_eq!(Locale::parse("zh_Hans"), Some(Locale::ZhCn));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_accept_language_prefers_highest_quality() {
        assert_eq!(
            Locale::from_accept_language("en;q=0.5, zh-CN;q=0.9"),
            Some(Locale::ZhCn)
        );
        assert_eq!(
            Locale::from_accept_language("fr-FR, en-GB;q=0.8"),
            Some(Locale::En)
        );
        assert_eq!(Locale::from_accept_language("zh;q=0, de"), None);
        assert_eq!(Locale::from_accept_language(""), None);
    }

    #[test]
    fn test_text_follows_locale() {
        let en = Trans::new(Locale::En);
        let zh = Trans::new(Locale::ZhCn);
        assert_eq!(
            en.text(MessageKey::TemplatePromptNotFound),
            "Template prompt not found"
        );
        assert_eq!(zh.text(MessageKey::TemplatePromptNotFound), "模板提示词不存在");
        assert_eq!(Trans::default().locale, Locale::En);
    }
}
