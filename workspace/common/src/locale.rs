//! Localization table for the dashboard.
//!
//! Every supported [`Language`] maps to exactly one static [`LocaleBundle`]; the
//! lookup is an exhaustive `match`, so a new language cannot be added without a
//! bundle. Bundles only carry presentation: numbers always come from the
//! forecasting side unchanged.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Result;
use crate::indicator::Indicator;
use crate::selector::{ChartStyle, Language};

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Layout direction of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Digit glyphs used when printing years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NumeralSystem {
    Western,
    ArabicIndic,
}

impl NumeralSystem {
    /// Formats a year digit by digit; digit order is the decimal order, only glyphs change.
    pub fn format_year(self, year: i32) -> String {
        match self {
            NumeralSystem::Western => year.to_string(),
            NumeralSystem::ArabicIndic => year
                .to_string()
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(digit) => ARABIC_INDIC_DIGITS[digit as usize],
                    None => c,
                })
                .collect(),
        }
    }

    /// Inverse of [`NumeralSystem::format_year`].
    pub fn parse_year(self, label: &str) -> Option<i32> {
        match self {
            NumeralSystem::Western => label.parse().ok(),
            NumeralSystem::ArabicIndic => {
                let ascii: Option<String> = label
                    .chars()
                    .map(|c| match ARABIC_INDIC_DIGITS.iter().position(|&g| g == c) {
                        Some(digit) => char::from_digit(digit as u32, 10),
                        None if c == '-' => Some(c),
                        None => None,
                    })
                    .collect();
                ascii?.parse().ok()
            }
        }
    }
}

/// Complete set of display strings for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleBundle {
    pub language: Language,
    pub direction: TextDirection,
    pub background_color: &'static str,
    pub main_title: &'static str,
    pub slider_label: &'static str,
    pub x_axis_title: &'static str,
    pub legend_historical: &'static str,
    pub legend_forecast: &'static str,
    pub numerals: NumeralSystem,
    /// Indexed by [`Indicator::index`]
    indicator_titles: [&'static str; 4],
    /// Indexed like [`ChartStyle::ALL`]
    style_labels: [&'static str; 3],
}

static ENGLISH: LocaleBundle = LocaleBundle {
    language: Language::En,
    direction: TextDirection::Ltr,
    background_color: "#f9f9f9",
    main_title: "Economic Indicators Forecast for Oman",
    slider_label: "Adjust the Forecast Period:",
    x_axis_title: "Year",
    legend_historical: "Historical",
    legend_forecast: "Forecast",
    numerals: NumeralSystem::Western,
    indicator_titles: [
        "GDP",
        "GDP per Capita",
        "Inflation",
        "Adjusted Net National Income",
    ],
    style_labels: ["Line", "Bar", "Scatter"],
};

static ARABIC: LocaleBundle = LocaleBundle {
    language: Language::Ar,
    direction: TextDirection::Rtl,
    background_color: "#f9f9f9",
    main_title: "لوحة توقعات المؤشرات الاقتصادية في عمان",
    slider_label: "تغيير عدد سنوات التوقع:",
    x_axis_title: "السنة",
    legend_historical: "تاريخي",
    legend_forecast: "توقع",
    numerals: NumeralSystem::ArabicIndic,
    indicator_titles: [
        "الناتج المحلي الإجمالي",
        "نصيب الفرد من الناتج المحلي الإجمالي",
        "التضخم",
        "الدخل القومي الصافي المعدل",
    ],
    style_labels: ["خط", "شريط", "منتشر"],
};

/// Looks up the bundle for a language.
pub fn resolve(language: Language) -> &'static LocaleBundle {
    match language {
        Language::En => &ENGLISH,
        Language::Ar => &ARABIC,
    }
}

impl LocaleBundle {
    /// Resolves a raw language token such as `"AR"`.
    pub fn for_token(token: &str) -> Result<&'static LocaleBundle> {
        Ok(resolve(token.parse()?))
    }

    pub fn indicator_title(&self, indicator: Indicator) -> &'static str {
        self.indicator_titles[indicator.index()]
    }

    pub fn style_label(&self, style: ChartStyle) -> &'static str {
        let position = ChartStyle::ALL
            .iter()
            .position(|candidate| *candidate == style)
            .unwrap_or_default();
        self.style_labels[position]
    }

    /// Dropdown entries: localized label, language-independent value.
    pub fn style_options(&self) -> Vec<StyleOption> {
        ChartStyle::ALL
            .into_iter()
            .map(|style| StyleOption {
                label: self.style_label(style).to_string(),
                value: style,
            })
            .collect()
    }

    pub fn format_year(&self, year: i32) -> String {
        self.numerals.format_year(year)
    }
}

/// One chart style dropdown entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StyleOption {
    pub label: String,
    pub value: ChartStyle,
}

/// Page container style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
    pub direction: TextDirection,
    pub background_color: String,
}

/// Language-dependent page chrome: everything the dashboard shows besides the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LayoutSpec {
    pub main_title: String,
    pub layout_style: LayoutStyle,
    pub slider_label: String,
    pub style_options: Vec<StyleOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_year_formatting() {
        assert_eq!(NumeralSystem::ArabicIndic.format_year(2024), "٢٠٢٤");
        assert_eq!(NumeralSystem::ArabicIndic.format_year(2021), "٢٠٢١");
        assert_eq!(NumeralSystem::Western.format_year(2024), "2024");
    }

    #[test]
    fn test_arabic_round_trip_for_supported_years() {
        for year in 1900..=2100 {
            let label = NumeralSystem::ArabicIndic.format_year(year);
            assert!(label.chars().all(|c| ARABIC_INDIC_DIGITS.contains(&c)));
            assert_eq!(NumeralSystem::ArabicIndic.parse_year(&label), Some(year));
        }
    }

    #[test]
    fn test_parse_rejects_mixed_glyphs() {
        assert_eq!(NumeralSystem::ArabicIndic.parse_year("٢0٢٤"), None);
    }

    #[test]
    fn test_bundles_are_complete() {
        for language in Language::ALL {
            let bundle = resolve(language);
            assert_eq!(bundle.language, language);
            for text in [
                bundle.background_color,
                bundle.main_title,
                bundle.slider_label,
                bundle.x_axis_title,
                bundle.legend_historical,
                bundle.legend_forecast,
            ] {
                assert!(!text.is_empty());
            }
            for indicator in Indicator::ALL {
                assert!(!bundle.indicator_title(indicator).is_empty());
            }
            assert_eq!(bundle.style_options().len(), ChartStyle::ALL.len());
        }
    }

    #[test]
    fn test_bundles_differ_only_in_presentation() {
        let en = resolve(Language::En);
        let ar = resolve(Language::Ar);
        assert_eq!(en.direction, TextDirection::Ltr);
        assert_eq!(ar.direction, TextDirection::Rtl);
        assert_eq!(en.background_color, ar.background_color);

        let en_values: Vec<ChartStyle> = en.style_options().into_iter().map(|o| o.value).collect();
        let ar_values: Vec<ChartStyle> = ar.style_options().into_iter().map(|o| o.value).collect();
        assert_eq!(en_values, ar_values);
    }

    #[test]
    fn test_english_titles() {
        let titles: Vec<&str> = Indicator::ALL
            .iter()
            .map(|i| resolve(Language::En).indicator_title(*i))
            .collect();
        assert_eq!(
            titles,
            ["GDP", "GDP per Capita", "Inflation", "Adjusted Net National Income"]
        );
    }

    #[test]
    fn test_for_token() {
        assert_eq!(LocaleBundle::for_token("AR").unwrap().language, Language::Ar);
        assert!(LocaleBundle::for_token("FR").is_err());
    }
}
