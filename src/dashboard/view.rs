//! Dashboard view model.
//!
//! Pure conversion from a [`DashboardSummary`] to what the widgets draw.
//! Nothing here touches the terminal.

use crate::locale::Locale;
use crate::model::DashboardSummary;

/// Parts of the dashboard, each with a stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardPart {
    /// Total users card.
    TotalUsers,
    /// Average metabolic score card.
    AvgRiskScore,
    /// Average age card.
    AvgAge,
    /// Age bar chart.
    AgeChart,
    /// Smoker proportion chart.
    SmokerChart,
    /// BMI versus risk scatter.
    CorrelationChart,
}

impl DashboardPart {
    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::TotalUsers => "total-users",
            Self::AvgRiskScore => "avg-risk-score",
            Self::AvgAge => "avg-age",
            Self::AgeChart => "age-distribution-chart",
            Self::SmokerChart => "smoker-distribution-chart",
            Self::CorrelationChart => "correlation-chart",
        }
    }
}

/// The three headline figures, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCards {
    /// `"{n} 명"`.
    pub total_users: String,
    /// `"{x:.1} 점"`.
    pub avg_risk_score: String,
    /// `"{x:.1} 세"`.
    pub avg_age: String,
}

/// Categorical bar chart data.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Series name; not drawn while the legend is hidden.
    pub label: String,
    /// One category per bar.
    pub categories: Vec<String>,
    /// Bar heights, parallel to `categories`.
    pub values: Vec<f64>,
    /// Lower bound of the value axis.
    pub y_min: f64,
    /// Whether a legend is drawn.
    pub show_legend: bool,
}

impl BarSeries {
    /// `(category, height)` pairs as the bar widget takes them.
    ///
    /// Heights are rounded to whole units. Negative or non-finite values
    /// draw an empty bar. Extra categories or values without a partner are
    /// dropped.
    pub fn bars(&self) -> Vec<(String, u64)> {
        self.categories
            .iter()
            .zip(&self.values)
            .map(|(label, value)| (label.clone(), bar_height(*value)))
            .collect()
    }
}

fn bar_height(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// Fill colour of a proportion slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceColor {
    /// Non-smokers.
    Green,
    /// Smokers.
    Red,
}

/// One slice of a proportion chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    /// Legend label.
    pub label: String,
    /// Absolute count.
    pub value: u64,
    /// Fill colour.
    pub color: SliceColor,
}

/// Two-slice proportion chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProportionChart {
    /// Non-smokers first, then smokers.
    pub slices: [Slice; 2],
}

impl ProportionChart {
    /// Sum of both slices.
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Fraction of the total held by slice `index`, in `0.0..=1.0`.
    ///
    /// `0.0` when the total is zero or `index` is out of range.
    pub fn share(&self, index: usize) -> f64 {
        let total = self.total();
        match self.slices.get(index) {
            Some(slice) if total > 0 => slice.value as f64 / total as f64,
            _ => 0.0,
        }
    }
}

/// Scatter plot data with titled axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    /// Series name.
    pub series: String,
    /// X axis title.
    pub x_title: String,
    /// Y axis title.
    pub y_title: String,
    /// `(x, y)` points.
    pub points: Vec<(f64, f64)>,
}

impl ScatterChart {
    /// X range padded by one unit on each side; `[0, 1]` with no points.
    pub fn x_bounds(&self) -> [f64; 2] {
        match finite_range(self.points.iter().map(|p| p.0)) {
            Some((lo, hi)) => [(lo - 1.0).floor(), (hi + 1.0).ceil()],
            None => [0.0, 1.0],
        }
    }

    /// Y range from zero to at least 100.
    pub fn y_bounds(&self) -> [f64; 2] {
        let hi = finite_range(self.points.iter().map(|p| p.1)).map_or(0.0, |(_, hi)| hi);
        [0.0, hi.max(100.0).ceil()]
    }
}

fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Everything the dashboard screen draws.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Headline figures.
    pub cards: SummaryCards,
    /// Users per age bracket.
    pub age: BarSeries,
    /// Smoker split.
    pub smokers: ProportionChart,
    /// BMI against metabolic score.
    pub correlation: ScatterChart,
}

impl DashboardView {
    /// Builds the view for `summary` in `locale`.
    pub fn from_summary(summary: &DashboardSummary, locale: Locale) -> Self {
        let s = locale.strings();
        Self {
            cards: SummaryCards {
                total_users: locale.users(summary.total_users),
                avg_risk_score: locale.score(summary.avg_metabolic_score),
                avg_age: locale.age(summary.avg_age),
            },
            age: BarSeries {
                label: s.age_series.to_string(),
                categories: summary.age_dist.labels.clone(),
                values: summary.age_dist.data.clone(),
                y_min: 0.0,
                show_legend: false,
            },
            smokers: ProportionChart {
                slices: [
                    Slice {
                        label: s.non_smokers.to_string(),
                        value: summary.smoker_dist.non_smokers,
                        color: SliceColor::Green,
                    },
                    Slice {
                        label: s.smokers.to_string(),
                        value: summary.smoker_dist.smokers,
                        color: SliceColor::Red,
                    },
                ],
            },
            correlation: ScatterChart {
                series: s.correlation_series.to_string(),
                x_title: s.bmi_axis.to_string(),
                y_title: s.risk_axis.to_string(),
                points: summary.risk_correlation.points(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AgeDistribution, RiskCorrelation, SmokerDistribution};

    fn summary() -> DashboardSummary {
        DashboardSummary {
            total_users: 15,
            avg_metabolic_score: 44.44,
            avg_age: 38.26,
            age_dist: AgeDistribution {
                labels: vec!["20s".into(), "30s".into()],
                data: vec![5.0, 10.0],
            },
            smoker_dist: SmokerDistribution {
                non_smokers: 9,
                smokers: 3,
            },
            risk_correlation: RiskCorrelation {
                bmi: vec![22.0, 30.5],
                metabolic_score: vec![20.0, 80.0],
            },
        }
    }

    #[test]
    fn test_cards_formatted_korean() {
        let view = DashboardView::from_summary(&summary(), Locale::Ko);
        assert_eq!(view.cards.total_users, "15 명");
        assert_eq!(view.cards.avg_risk_score, "44.4 점");
        assert_eq!(view.cards.avg_age, "38.3 세");
    }

    #[test]
    fn test_age_bars_match_data_and_start_at_zero() {
        let view = DashboardView::from_summary(&summary(), Locale::Ko);
        assert_eq!(
            view.age.bars(),
            vec![("20s".to_string(), 5), ("30s".to_string(), 10)]
        );
        assert_eq!(view.age.y_min, 0.0);
        assert!(!view.age.show_legend);
    }

    #[test]
    fn test_bar_heights_never_negative() {
        let bars = BarSeries {
            label: String::new(),
            categories: vec!["a".into(), "b".into(), "c".into()],
            values: vec![-3.0, f64::NAN, 2.6],
            y_min: 0.0,
            show_legend: false,
        };
        let heights: Vec<u64> = bars.bars().into_iter().map(|(_, h)| h).collect();
        assert_eq!(heights, vec![0, 0, 3]);
    }

    #[test]
    fn test_bars_stop_at_shorter_list() {
        let bars = BarSeries {
            label: String::new(),
            categories: vec!["a".into(), "b".into()],
            values: vec![1.0],
            y_min: 0.0,
            show_legend: false,
        };
        assert_eq!(bars.bars().len(), 1);
    }

    #[test]
    fn test_smoker_slices_fixed_labels_and_colours() {
        let view = DashboardView::from_summary(&summary(), Locale::Ko);
        let [non, smk] = &view.smokers.slices;
        assert_eq!(non.label, "비흡연자");
        assert_eq!(non.color, SliceColor::Green);
        assert_eq!(smk.label, "흡연자");
        assert_eq!(smk.color, SliceColor::Red);
        assert!((view.smokers.share(0) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_share_with_zero_total_is_zero() {
        let mut view = DashboardView::from_summary(&summary(), Locale::En);
        view.smokers.slices[0].value = 0;
        view.smokers.slices[1].value = 0;
        assert_eq!(view.smokers.share(0), 0.0);
        assert_eq!(view.smokers.share(5), 0.0);
    }

    #[test]
    fn test_scatter_axes_and_points() {
        let view = DashboardView::from_summary(&summary(), Locale::Ko);
        assert_eq!(view.correlation.x_title, "BMI 지수");
        assert_eq!(view.correlation.y_title, "종합 위험도 점수");
        assert_eq!(view.correlation.points, vec![(22.0, 20.0), (30.5, 80.0)]);
        assert_eq!(view.correlation.x_bounds(), [21.0, 32.0]);
        assert_eq!(view.correlation.y_bounds(), [0.0, 100.0]);
    }

    #[test]
    fn test_scatter_bounds_without_points() {
        let chart = ScatterChart {
            series: String::new(),
            x_title: String::new(),
            y_title: String::new(),
            points: Vec::new(),
        };
        assert_eq!(chart.x_bounds(), [0.0, 1.0]);
        assert_eq!(chart.y_bounds(), [0.0, 100.0]);
    }

    #[test]
    fn test_part_ids() {
        assert_eq!(DashboardPart::TotalUsers.id(), "total-users");
        assert_eq!(DashboardPart::SmokerChart.id(), "smoker-distribution-chart");
    }
}
