//! Display strings for both flows.
//!
//! Korean is the default and matches the strings the backend itself emits
//! (risk factors and recommendations arrive already localized).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::assessment::form::{Field, FormError};
use crate::assessment::render::{GaugeKind, Tier};

/// UI language.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Korean.
    #[default]
    Ko,
    /// English.
    En,
}

/// Static string table for one locale.
#[derive(Debug)]
pub struct Strings {
    /// Assessment window title.
    pub app_title: &'static str,
    /// Dashboard window title.
    pub dashboard_title: &'static str,
    /// Landing heading.
    pub landing_heading: &'static str,
    /// Landing body text.
    pub landing_body: &'static str,
    /// Landing call to action.
    pub landing_start: &'static str,
    /// Form heading.
    pub form_heading: &'static str,
    /// Submit control label.
    pub submit: &'static str,
    /// Radio label for smokers.
    pub smoker_yes: &'static str,
    /// Radio label for non-smokers.
    pub smoker_no: &'static str,
    /// Form key hints.
    pub form_hint: &'static str,
    /// Loading screen message.
    pub loading: &'static str,
    /// Risk factor section heading.
    pub factors_heading: &'static str,
    /// Recommendation section heading.
    pub recommendations_heading: &'static str,
    /// Fallback item when no risk factor was found.
    pub no_factors: &'static str,
    /// Restart hint on the result screen.
    pub restart_hint: &'static str,
    /// Fixed message of the blocking submission-failure alert.
    pub analysis_failed: &'static str,
    /// Alert dismiss hint.
    pub alert_hint: &'static str,
    /// Card title: total users.
    pub total_users: &'static str,
    /// Card title: average risk score.
    pub avg_risk_score: &'static str,
    /// Card title: average age.
    pub avg_age: &'static str,
    /// Unit suffix for user counts.
    pub users_unit: &'static str,
    /// Unit suffix for scores.
    pub score_unit: &'static str,
    /// Unit suffix for ages.
    pub age_unit: &'static str,
    /// Age chart title.
    pub age_chart: &'static str,
    /// Age chart series name.
    pub age_series: &'static str,
    /// Smoker chart title.
    pub smoker_chart: &'static str,
    /// Non-smoker slice label.
    pub non_smokers: &'static str,
    /// Smoker slice label.
    pub smokers: &'static str,
    /// Correlation chart title.
    pub correlation_chart: &'static str,
    /// Correlation series name.
    pub correlation_series: &'static str,
    /// Correlation x-axis title.
    pub bmi_axis: &'static str,
    /// Correlation y-axis title.
    pub risk_axis: &'static str,
}

const KO: Strings = Strings {
    app_title: "건강 위험도 자가진단",
    dashboard_title: "이용자 통계 대시보드",
    landing_heading: "🩺 나의 건강 위험도는?",
    landing_body: "간단한 건강 정보를 입력하면 대사증후군, 고혈압, 당뇨 위험도를 분석해 드립니다.",
    landing_start: "[Enter] 시작하기",
    form_heading: "건강 정보 입력",
    submit: "분석하기",
    smoker_yes: "예",
    smoker_no: "아니오",
    form_hint: "[Tab/↑↓] 이동  [←→/Space] 흡연 여부 선택  [Enter] 분석하기",
    loading: "건강 데이터를 분석하고 있습니다...",
    factors_heading: "주요 위험 요인",
    recommendations_heading: "맞춤 건강 가이드",
    no_factors: "특별한 위험 요인이 발견되지 않았습니다.",
    restart_hint: "[r] 다시 분석하기  [q] 종료",
    analysis_failed: "분석 중 오류가 발생했습니다.",
    alert_hint: "아무 키나 눌러 닫기",
    total_users: "총 이용자 수",
    avg_risk_score: "평균 종합 위험도",
    avg_age: "평균 연령",
    users_unit: "명",
    score_unit: "점",
    age_unit: "세",
    age_chart: "연령대 분포",
    age_series: "이용자 수",
    smoker_chart: "흡연자 비율",
    non_smokers: "비흡연자",
    smokers: "흡연자",
    correlation_chart: "BMI와 위험도 관계",
    correlation_series: "이용자",
    bmi_axis: "BMI 지수",
    risk_axis: "종합 위험도 점수",
};

const EN: Strings = Strings {
    app_title: "Health Risk Self-Check",
    dashboard_title: "User Statistics Dashboard",
    landing_heading: "🩺 How healthy are you?",
    landing_body: "Enter a few health metrics to get your metabolic syndrome, hypertension and diabetes risk.",
    landing_start: "[Enter] Start",
    form_heading: "Your health metrics",
    submit: "Analyze",
    smoker_yes: "Yes",
    smoker_no: "No",
    form_hint: "[Tab/↑↓] move  [←→/Space] choose smoking  [Enter] analyze",
    loading: "Analyzing your health data...",
    factors_heading: "Key risk factors",
    recommendations_heading: "Personal guidance",
    no_factors: "No particular risk factors were found.",
    restart_hint: "[r] Start over  [q] Quit",
    analysis_failed: "An error occurred during analysis.",
    alert_hint: "Press any key to close",
    total_users: "Total users",
    avg_risk_score: "Average risk score",
    avg_age: "Average age",
    users_unit: "people",
    score_unit: "points",
    age_unit: "years",
    age_chart: "Age distribution",
    age_series: "Users",
    smoker_chart: "Smokers",
    non_smokers: "Non-smokers",
    smokers: "Smokers",
    correlation_chart: "BMI vs. risk",
    correlation_series: "User",
    bmi_axis: "BMI index",
    risk_axis: "overall risk score",
};

impl Locale {
    /// The string table for this locale.
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Ko => &KO,
            Self::En => &EN,
        }
    }

    /// Result screen heading for `name`.
    pub fn result_title(self, name: &str) -> String {
        match self {
            Self::Ko => format!("📊 {name}님의 분석 결과 리포트"),
            Self::En => format!("📊 Analysis report for {name}"),
        }
    }

    /// Banner text for a tier, glyph included.
    pub fn tier_label(self, tier: Tier) -> String {
        let word = match (self, tier) {
            (Self::Ko, Tier::Danger) => "위험",
            (Self::Ko, Tier::Warning) => "주의",
            (Self::Ko, Tier::Safe) => "양호",
            (Self::En, Tier::Danger) => "Danger",
            (Self::En, Tier::Warning) => "Caution",
            (Self::En, Tier::Safe) => "Good",
        };
        format!("{} {}", tier.glyph(), word)
    }

    /// Gauge caption.
    pub fn gauge_name(self, kind: GaugeKind) -> &'static str {
        match (self, kind) {
            (Self::Ko, GaugeKind::Metabolic) => "대사증후군",
            (Self::Ko, GaugeKind::Hypertension) => "고혈압",
            (Self::Ko, GaugeKind::Diabetes) => "당뇨",
            (Self::En, GaugeKind::Metabolic) => "Metabolic syndrome",
            (Self::En, GaugeKind::Hypertension) => "Hypertension",
            (Self::En, GaugeKind::Diabetes) => "Diabetes",
        }
    }

    /// Form field caption.
    pub fn field_label(self, field: Field) -> &'static str {
        match (self, field) {
            (Self::Ko, Field::Name) => "이름",
            (Self::Ko, Field::Age) => "나이 (세)",
            (Self::Ko, Field::Bmi) => "BMI 지수",
            (Self::Ko, Field::SystolicBp) => "수축기 혈압 (mmHg)",
            (Self::Ko, Field::BloodSugar) => "공복 혈당 (mg/dL)",
            (Self::Ko, Field::Smoker) => "흡연 여부",
            (Self::Ko, Field::Submit) => KO.submit,
            (Self::En, Field::Name) => "Name",
            (Self::En, Field::Age) => "Age (years)",
            (Self::En, Field::Bmi) => "BMI",
            (Self::En, Field::SystolicBp) => "Systolic BP (mmHg)",
            (Self::En, Field::BloodSugar) => "Fasting blood sugar (mg/dL)",
            (Self::En, Field::Smoker) => "Smoker",
            (Self::En, Field::Submit) => EN.submit,
        }
    }

    /// Inline validation message under the form.
    pub fn form_error(self, err: &FormError) -> String {
        let label = self.field_label(err.field());
        match (self, err) {
            (Self::Ko, FormError::Missing { .. }) => format!("'{label}' 항목을 입력해 주세요."),
            (Self::Ko, FormError::NotANumber { .. }) => {
                format!("'{label}' 항목에는 숫자를 입력해 주세요.")
            }
            (Self::En, FormError::Missing { .. }) => format!("Please fill in '{label}'."),
            (Self::En, FormError::NotANumber { .. }) => {
                format!("'{label}' must be a number.")
            }
        }
    }

    /// `"{n} 명"`.
    pub fn users(self, n: u64) -> String {
        format!("{n} {}", self.strings().users_unit)
    }

    /// `"{score:.1} 점"`.
    pub fn score(self, score: f64) -> String {
        format!("{score:.1} {}", self.strings().score_unit)
    }

    /// `"{age:.1} 세"`.
    pub fn age(self, age: f64) -> String {
        format!("{age:.1} {}", self.strings().age_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_korean() {
        assert_eq!(Locale::default(), Locale::Ko);
    }

    #[test]
    fn test_result_title_interpolates_name() {
        assert_eq!(Locale::Ko.result_title("Kim"), "📊 Kim님의 분석 결과 리포트");
        assert_eq!(Locale::En.result_title("Kim"), "📊 Analysis report for Kim");
    }

    #[test]
    fn test_tier_label_includes_glyph() {
        assert_eq!(Locale::Ko.tier_label(Tier::Danger), "🚨 위험");
        assert_eq!(Locale::Ko.tier_label(Tier::Warning), "⚠️ 주의");
        assert_eq!(Locale::Ko.tier_label(Tier::Safe), "✅ 양호");
    }

    #[test]
    fn test_summary_units() {
        assert_eq!(Locale::Ko.users(12), "12 명");
        assert_eq!(Locale::Ko.score(41.26), "41.3 점");
        assert_eq!(Locale::Ko.age(38.0), "38.0 세");
        assert_eq!(Locale::En.users(3), "3 people");
    }

    #[test]
    fn test_locale_parses_lowercase() {
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
