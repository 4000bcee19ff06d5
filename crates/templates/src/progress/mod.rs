//! Progress indicators: linear bar, circle, ring, step list and
//! multi-segment bar.

pub mod geometry;
mod render;


use cellsense_core::{Node, TemplateConfig, Variant};
use serde::{Deserialize, Serialize};

use crate::accessor::{accessor, Accessor};
use crate::common::trim_number;
use crate::id::TemplateId;

pub use render::render_progress;

pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_DIAMETER: f64 = 48.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;

/// Segments narrower than this (in percent) render without a label.
pub const MIN_LABELED_SEGMENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressType {
    #[default]
    Linear,
    Circular,
    Ring,
    Steps,
    MultiSegment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// `42%`
    #[default]
    Percent,
    /// `42`
    Value,
    /// `42 / 100`
    ValueOfMax,
}

/// One part of a multi-segment bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSegment {
    pub value: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub variant: Option<Variant>,
}

impl ProgressSegment {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            variant: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Pending,
    Active,
    Completed,
    Error,
}

impl StepState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepState::Pending => "pending",
            StepState::Active => "active",
            StepState::Completed => "completed",
            StepState::Error => "error",
        }
    }
}

/// One step of a step list as supplied by the host. Only `Completed` and
/// `Error` are meaningful as explicit states; the rest is derived from the
/// current step index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStep {
    pub label: String,
    #[serde(default)]
    pub state: Option<StepState>,
}

impl ProgressStep {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: None,
        }
    }

    pub fn with_state(mut self, state: StepState) -> Self {
        self.state = Some(state);
        self
    }
}

/// A step with its resolved state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepView {
    pub label: String,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressContext {
    pub value: f64,
    pub max: f64,
    /// Always in `[0, 100]`.
    pub percentage: f64,
    pub variant: Variant,
    pub progress_type: ProgressType,
    pub label: Option<String>,
    pub segments: Vec<ProgressSegment>,
    pub steps: Vec<StepView>,
    pub diameter: f64,
    pub stroke_width: f64,
    pub striped: bool,
    pub animated: bool,
    pub indeterminate: bool,
}

pub struct ProgressTemplate<T> {
    id: TemplateId,
    value: Accessor<T, f64>,
    max: Option<Accessor<T, Option<f64>>>,
    variant: Option<Accessor<T, Option<Variant>>>,
    segments: Option<Accessor<T, Vec<ProgressSegment>>>,
    steps: Option<Accessor<T, Vec<ProgressStep>>>,
    current_step: Option<Accessor<T, usize>>,
    label: Option<Accessor<T, String>>,
    static_max: f64,
    progress_type: ProgressType,
    diameter: f64,
    stroke_width: f64,
    show_label: bool,
    label_format: LabelFormat,
    striped: bool,
    animated: bool,
    indeterminate: bool,
    thresholds: Vec<(f64, Variant)>,
}

/// Percentage → variant, largest key not above the percentage wins.
pub fn default_thresholds() -> Vec<(f64, Variant)> {
    vec![
        (0.0, Variant::Error),
        (25.0, Variant::Warning),
        (50.0, Variant::Info),
        (75.0, Variant::Primary),
        (100.0, Variant::Success),
    ]
}

impl<T> ProgressTemplate<T> {
    pub fn new<F>(_config: &TemplateConfig, value: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        Self {
            id: TemplateId::new(),
            value: accessor(value),
            max: None,
            variant: None,
            segments: None,
            steps: None,
            current_step: None,
            label: None,
            static_max: DEFAULT_MAX,
            progress_type: ProgressType::default(),
            diameter: DEFAULT_DIAMETER,
            stroke_width: DEFAULT_STROKE_WIDTH,
            show_label: true,
            label_format: LabelFormat::default(),
            striped: false,
            animated: false,
            indeterminate: false,
            thresholds: default_thresholds(),
        }
    }

    /// Per-item maximum. `None` keeps the static maximum.
    pub fn with_max<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Option<f64> + Send + Sync + 'static,
    {
        self.max = Some(accessor(f));
        self
    }

    pub fn with_static_max(mut self, max: f64) -> Self {
        self.static_max = max;
        self
    }

    /// Explicit variant. `None` falls back to the threshold table.
    pub fn with_variant<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Option<Variant> + Send + Sync + 'static,
    {
        self.variant = Some(accessor(f));
        self
    }

    /// A non-empty result switches the item to a multi-segment bar.
    pub fn with_segments<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Vec<ProgressSegment> + Send + Sync + 'static,
    {
        self.segments = Some(accessor(f));
        self
    }

    /// A non-empty result switches the item to a step list.
    pub fn with_steps<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Vec<ProgressStep> + Send + Sync + 'static,
    {
        self.steps = Some(accessor(f));
        self
    }

    /// Zero-based index of the active step.
    pub fn with_current_step<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> usize + Send + Sync + 'static,
    {
        self.current_step = Some(accessor(f));
        self
    }

    /// Custom label text, replacing the formatted value.
    pub fn with_label<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.label = Some(accessor(f));
        self
    }

    pub fn with_type(mut self, progress_type: ProgressType) -> Self {
        self.progress_type = progress_type;
        self
    }

    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn show_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    pub fn with_label_format(mut self, format: LabelFormat) -> Self {
        self.label_format = format;
        self
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Replace the percentage → variant table. Entries are sorted by key;
    /// an empty table keeps the default one.
    pub fn with_thresholds(mut self, mut thresholds: Vec<(f64, Variant)>) -> Self {
        thresholds.retain(|(k, _)| k.is_finite());
        if !thresholds.is_empty() {
            thresholds.sort_by(|a, b| a.0.total_cmp(&b.0));
            self.thresholds = thresholds;
        }
        self
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn context(&self, item: &T) -> ProgressContext {
        let value = (self.value)(item);
        let max = self
            .max
            .as_ref()
            .and_then(|f| f(item))
            .unwrap_or(self.static_max);
        let pct = percentage(value, max);
        let variant = self
            .variant
            .as_ref()
            .and_then(|f| f(item))
            .unwrap_or_else(|| variant_for(pct, &self.thresholds));

        let segments = self.segments.as_ref().map(|f| f(item)).unwrap_or_default();
        let steps = self.steps.as_ref().map(|f| f(item)).unwrap_or_default();
        let current = self.current_step.as_ref().map(|f| f(item)).unwrap_or(0);

        let progress_type = if !steps.is_empty() {
            ProgressType::Steps
        } else if !segments.is_empty() {
            ProgressType::MultiSegment
        } else {
            self.progress_type
        };

        let label = self.show_label.then(|| match &self.label {
            Some(f) => f(item),
            None => format_label(self.label_format, value, max, pct),
        });

        ProgressContext {
            value,
            max,
            percentage: pct,
            variant,
            progress_type,
            label,
            segments,
            steps: resolve_steps(steps, current),
            diameter: self.diameter,
            stroke_width: self.stroke_width,
            striped: self.striped,
            animated: self.animated,
            indeterminate: self.indeterminate,
        }
    }

    pub fn render(&self, item: &T) -> Node {
        render_progress(&self.context(item))
    }
}

/// `value / max * 100`, clamped into `[0, 100]` whatever the signs. A zero
/// or NaN max and a non-finite ratio give 0.
pub fn percentage(value: f64, max: f64) -> f64 {
    if max.is_nan() || max == 0.0 {
        return 0.0;
    }
    let ratio = value / max * 100.0;
    if ratio.is_finite() {
        ratio.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Variant of the largest threshold key not above `percentage`. Below the
/// first key the first entry applies.
pub fn variant_for(percentage: f64, thresholds: &[(f64, Variant)]) -> Variant {
    thresholds
        .iter()
        .rev()
        .find(|(k, _)| *k <= percentage)
        .or_else(|| thresholds.first())
        .map(|(_, v)| *v)
        .unwrap_or_default()
}

/// Explicit error beats completed (earlier than `current`, or explicit),
/// which beats active (`index == current`); everything else is pending.
pub fn step_state(index: usize, current: usize, explicit: Option<StepState>) -> StepState {
    match explicit {
        Some(StepState::Error) => StepState::Error,
        Some(StepState::Completed) => StepState::Completed,
        _ if index < current => StepState::Completed,
        _ if index == current => StepState::Active,
        _ => StepState::Pending,
    }
}

fn resolve_steps(steps: Vec<ProgressStep>, current: usize) -> Vec<StepView> {
    steps
        .into_iter()
        .enumerate()
        .map(|(i, step)| StepView {
            state: step_state(i, current, step.state),
            label: step.label,
        })
        .collect()
}

fn format_label(format: LabelFormat, value: f64, max: f64, percentage: f64) -> String {
    match format {
        LabelFormat::Percent => format!("{}%", percentage.round()),
        LabelFormat::Value => trim_number(value, 2),
        LabelFormat::ValueOfMax => format!("{} / {}", trim_number(value, 2), trim_number(max, 2)),
    }
}
