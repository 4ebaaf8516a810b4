//! # Result Renderer
//!
//! ## Responsibility
//! Projects an [`AssessmentResult`] onto the result screen's view model: the
//! title, the overall status banner, three gauges, the risk-factor list and
//! the recommendation list.
//!
//! ## Guarantees
//! - Deterministic: the same result and name always yield the same view
//! - Banner and gauges share one tier function (thresholds 40 and 70)
//! - Every render replaces prior list content; nothing accumulates across
//!   assessments
//! - Gauge widths change one rendered frame after labels and colours
//!
//! ## NOT Responsible For
//! - Drawing (that belongs to `tui::widgets::result`)
//! - Choosing when to show the result screen (that belongs to the flow)

use crate::deferred::Deferred;
use crate::locale::Locale;
use crate::model::AssessmentResult;

/// Lower bound of the warning tier.
pub const WARNING_THRESHOLD: f64 = 40.0;

/// Lower bound of the danger tier.
pub const DANGER_THRESHOLD: f64 = 70.0;

/// Prefix of every risk-factor item.
pub const BULLET: &str = "• ";

/// Risk band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// `score < 40`.
    Safe,
    /// `40 <= score < 70`.
    Warning,
    /// `score >= 70`.
    Danger,
}

impl Tier {
    /// Classifies a score. Lower bounds are inclusive.
    pub fn classify(score: f64) -> Tier {
        if score >= DANGER_THRESHOLD {
            Tier::Danger
        } else if score >= WARNING_THRESHOLD {
            Tier::Warning
        } else {
            Tier::Safe
        }
    }

    /// Banner glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Danger => "🚨",
            Self::Warning => "⚠️",
            Self::Safe => "✅",
        }
    }

    /// Style class name, as used by the web template.
    pub fn class(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Safe => "safe",
        }
    }
}

/// Which score a gauge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeKind {
    /// `scores.metabolic`.
    Metabolic,
    /// `scores.hypertension`.
    Hypertension,
    /// `scores.diabetes`.
    Diabetes,
}

impl GaugeKind {
    /// Gauges in display order.
    pub const ALL: [GaugeKind; 3] = [
        GaugeKind::Metabolic,
        GaugeKind::Hypertension,
        GaugeKind::Diabetes,
    ];

    /// Score key; the template binds `{id}-gauge` and `{id}-score`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Metabolic => "metabolic",
            Self::Hypertension => "hypertension",
            Self::Diabetes => "diabetes",
        }
    }

    /// Identifier of the fill bar.
    pub fn gauge_id(self) -> &'static str {
        match self {
            Self::Metabolic => "metabolic-gauge",
            Self::Hypertension => "hypertension-gauge",
            Self::Diabetes => "diabetes-gauge",
        }
    }

    fn score(self, result: &AssessmentResult) -> f64 {
        match self {
            Self::Metabolic => result.scores.metabolic,
            Self::Hypertension => result.scores.hypertension,
            Self::Diabetes => result.scores.diabetes,
        }
    }
}

/// Non-gauge parts of the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultSection {
    /// Report heading.
    Title,
    /// Tier banner.
    OverallStatus,
    /// Bulleted risk factors.
    RiskFactors,
    /// Recommendation list.
    Recommendations,
}

impl ResultSection {
    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Title => "result-title",
            Self::OverallStatus => "overall-status",
            Self::RiskFactors => "risk-factors",
            Self::Recommendations => "recommendations",
        }
    }
}

/// Gauge label text: one decimal place and a percent unit.
pub fn gauge_label(score: f64) -> String {
    format!("{score:.1} %")
}

/// Fill width in percent of the track, clamped to `0..=100`.
///
/// Non-finite scores draw an empty bar.
pub fn fill_width(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// One labelled fill bar.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    /// Which score this gauge shows.
    pub kind: GaugeKind,
    /// Text label; empty before the first render.
    pub label: String,
    /// Colour band.
    pub tier: Tier,
    /// Fill width in percent, applied one frame after label and tier.
    pub width: Deferred<f64>,
}

impl GaugeView {
    /// An empty gauge.
    pub fn new(kind: GaugeKind) -> Self {
        Self {
            kind,
            label: String::new(),
            tier: Tier::Safe,
            width: Deferred::new(0.0),
        }
    }

    /// Sets label and colour now and schedules the width change.
    pub fn update(&mut self, score: f64) {
        self.label = gauge_label(score);
        self.tier = Tier::classify(score);
        self.width.schedule(fill_width(score));
    }
}

/// Overall status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    /// Colour band.
    pub tier: Tier,
    /// Glyph and label.
    pub text: String,
}

/// A run of recommendation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Unstyled text.
    Plain(String),
    /// Text that was wrapped in `**`.
    Emphasis(String),
}

/// Splits `text` on `**…**` spans.
///
/// Spans match left to right and non-greedily and do not cross a line
/// break. An unmatched `**` stays literal. No other markup is interpreted.
pub fn parse_emphasis(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(rel) = text[cursor..].find("**") {
        let open = cursor + rel;
        let inner_start = open + 2;
        let line_end = text[inner_start..]
            .find('\n')
            .map_or(text.len(), |i| inner_start + i);

        match text[inner_start..line_end].find("**") {
            Some(close_rel) => {
                let close = inner_start + close_rel;
                if open > plain_start {
                    segments.push(Segment::Plain(text[plain_start..open].to_string()));
                }
                segments.push(Segment::Emphasis(text[inner_start..close].to_string()));
                cursor = close + 2;
                plain_start = cursor;
            }
            // '*' is one byte, so open + 1 is a char boundary.
            None => cursor = open + 1,
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::Plain(text[plain_start..].to_string()));
    }
    segments
}

/// View model of the result screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Report heading.
    pub title: String,
    /// Status banner; `None` before the first render.
    pub status: Option<StatusBanner>,
    /// Metabolic, hypertension and diabetes gauges.
    pub gauges: [GaugeView; 3],
    /// Risk-factor items, bullet included.
    pub factors: Vec<String>,
    /// Recommendation items.
    pub recommendations: Vec<Vec<Segment>>,
}

impl ResultView {
    /// An unrendered result screen.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            status: None,
            gauges: GaugeKind::ALL.map(GaugeView::new),
            factors: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Renders `result` for `name`.
    ///
    /// Gauges keep their previous width until the next frame so the bar
    /// moves from where it was.
    pub fn render(&mut self, result: &AssessmentResult, name: &str, locale: Locale) {
        self.title = locale.result_title(name);

        let tier = Tier::classify(result.scores.metabolic);
        self.status = Some(StatusBanner {
            tier,
            text: locale.tier_label(tier),
        });

        for gauge in &mut self.gauges {
            gauge.update(gauge.kind.score(result));
        }

        self.factors.clear();
        if result.factors.is_empty() {
            self.factors
                .push(format!("{BULLET}{}", locale.strings().no_factors));
        } else {
            self.factors
                .extend(result.factors.iter().map(|f| format!("{BULLET}{f}")));
        }

        self.recommendations.clear();
        self.recommendations
            .extend(result.recommendations.iter().map(|r| parse_emphasis(r)));
    }

    /// The gauge for `kind`.
    pub fn gauge(&self, kind: GaugeKind) -> &GaugeView {
        match kind {
            GaugeKind::Metabolic => &self.gauges[0],
            GaugeKind::Hypertension => &self.gauges[1],
            GaugeKind::Diabetes => &self.gauges[2],
        }
    }

    /// Applies deferred gauge widths.
    ///
    /// # Returns
    /// `true` if any gauge changed.
    pub fn on_frame_rendered(&mut self) -> bool {
        let mut changed = false;
        for gauge in &mut self.gauges {
            changed |= gauge.width.on_frame_rendered();
        }
        changed
    }
}

impl Default for ResultView {
    fn default() -> Self {
        Self::new()
    }
}
