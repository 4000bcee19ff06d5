//! Kind-agnostic construction: build any template from generic
//! [`FieldValue`] accessors once a suggestion has been accepted.

use cellsense_core::{FieldValue, Node, TemplateConfig, TemplateKind, Variant};
use tracing::debug;

use crate::accessor::{accessor, Accessor, ChangeCallback};
use crate::avatar::AvatarTemplate;
use crate::badge::BadgeTemplate;
use crate::currency::CurrencyTemplate;
use crate::id::TemplateId;
use crate::progress::{ProgressSegment, ProgressStep, ProgressTemplate};
use crate::rating::RatingTemplate;
use crate::stack::StackTemplate;

/// Field accessors a host binds for [`create_definition`]. Only `primary`
/// is required; each kind reads the bindings it understands and ignores
/// the rest. Segments and steps are typed since no single field holds
/// them; binding a change callback makes a rating interactive. Knobs
/// without a binding (diameter, icon maps, thresholds) need the per-kind
/// builders.
pub struct Bindings<T> {
    primary: Accessor<T, FieldValue>,
    secondary: Option<Accessor<T, FieldValue>>,
    tertiary: Option<Accessor<T, FieldValue>>,
    icon: Option<Accessor<T, FieldValue>>,
    variant: Option<Accessor<T, FieldValue>>,
    max: Option<Accessor<T, FieldValue>>,
    currency_code: Option<Accessor<T, FieldValue>>,
    image: Option<Accessor<T, FieldValue>>,
    badge_count: Option<Accessor<T, FieldValue>>,
    label: Option<Accessor<T, FieldValue>>,
    current_step: Option<Accessor<T, FieldValue>>,
    segments: Option<Accessor<T, Vec<ProgressSegment>>>,
    steps: Option<Accessor<T, Vec<ProgressStep>>>,
    on_change: Option<ChangeCallback<T>>,
}

macro_rules! binding {
    ($(#[$doc:meta])* $method:ident => $field:ident) => {
        $(#[$doc])*
        pub fn $method<F>(mut self, f: F) -> Self
        where
            F: Fn(&T) -> FieldValue + Send + Sync + 'static,
        {
            self.$field = Some(accessor(f));
            self
        }
    };
}

impl<T> Bindings<T> {
    pub fn new<F>(primary: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            primary: accessor(primary),
            secondary: None,
            tertiary: None,
            icon: None,
            variant: None,
            max: None,
            currency_code: None,
            image: None,
            badge_count: None,
            label: None,
            current_step: None,
            segments: None,
            steps: None,
            on_change: None,
        }
    }

    binding!(with_secondary => secondary);
    binding!(with_tertiary => tertiary);
    binding!(with_icon => icon);
    binding!(
        /// Text parsed as a [`Variant`]; unparseable values fall back to the
        /// kind's own color rule.
        with_variant => variant
    );
    binding!(with_max => max);
    binding!(with_currency_code => currency_code);
    binding!(with_image => image);
    binding!(with_badge_count => badge_count);
    binding!(with_label => label);
    binding!(
        /// Zero-based; negative or non-numeric values mean the first step.
        with_current_step => current_step
    );

    pub fn with_segments<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Vec<ProgressSegment> + Send + Sync + 'static,
    {
        self.segments = Some(accessor(f));
        self
    }

    pub fn with_steps<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Vec<ProgressStep> + Send + Sync + 'static,
    {
        self.steps = Some(accessor(f));
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, u32) + Send + Sync + 'static,
    {
        self.on_change = Some(std::sync::Arc::new(f));
        self
    }
}

/// A template of any kind.
pub enum TemplateDefinition<T> {
    Badge(BadgeTemplate<T>),
    Currency(CurrencyTemplate<T>),
    Stack(StackTemplate<T>),
    Avatar(AvatarTemplate<T>),
    Progress(ProgressTemplate<T>),
    Rating(RatingTemplate<T>),
}

impl<T> TemplateDefinition<T> {
    pub fn kind(&self) -> TemplateKind {
        match self {
            TemplateDefinition::Badge(_) => TemplateKind::Badge,
            TemplateDefinition::Currency(_) => TemplateKind::Currency,
            TemplateDefinition::Stack(_) => TemplateKind::Stack,
            TemplateDefinition::Avatar(_) => TemplateKind::Avatar,
            TemplateDefinition::Progress(_) => TemplateKind::Progress,
            TemplateDefinition::Rating(_) => TemplateKind::Rating,
        }
    }

    pub fn id(&self) -> TemplateId {
        match self {
            TemplateDefinition::Badge(t) => t.id(),
            TemplateDefinition::Currency(t) => t.id(),
            TemplateDefinition::Stack(t) => t.id(),
            TemplateDefinition::Avatar(t) => t.id(),
            TemplateDefinition::Progress(t) => t.id(),
            TemplateDefinition::Rating(t) => t.id(),
        }
    }

    pub fn render(&self, item: &T) -> Node {
        match self {
            TemplateDefinition::Badge(t) => t.render(item),
            TemplateDefinition::Currency(t) => t.render(item),
            TemplateDefinition::Stack(t) => t.render(item),
            TemplateDefinition::Avatar(t) => t.render(item),
            TemplateDefinition::Progress(t) => t.render(item),
            TemplateDefinition::Rating(t) => t.render(item),
        }
    }

    /// The rating template, for hosts that route interactions.
    pub fn as_rating(&self) -> Option<&RatingTemplate<T>> {
        match self {
            TemplateDefinition::Rating(t) => Some(t),
            _ => None,
        }
    }
}

/// Build a template of `kind` from `bindings`. `TemplateKind::None` yields
/// no template.
pub fn create_definition<T: 'static>(
    kind: TemplateKind,
    bindings: Bindings<T>,
    config: &TemplateConfig,
) -> Option<TemplateDefinition<T>> {
    let Bindings {
        primary,
        secondary,
        tertiary,
        icon,
        variant,
        max,
        currency_code,
        image,
        badge_count,
        label,
        current_step,
        segments,
        steps,
        on_change,
    } = bindings;

    let definition = match kind {
        TemplateKind::None => {
            debug!("no template for unclassified field");
            return None;
        }
        TemplateKind::Badge => {
            let mut t = BadgeTemplate::new(config, text(primary));
            if let Some(f) = icon {
                t = t.with_icon(text(f));
            }
            if let Some(f) = variant {
                t = t.with_variant(variant_of(f));
            }
            TemplateDefinition::Badge(t)
        }
        TemplateKind::Currency => {
            let mut t = CurrencyTemplate::new(config, move |item: &T| primary(item));
            if let Some(f) = currency_code {
                t = t.with_code(text(f));
            }
            TemplateDefinition::Currency(t)
        }
        TemplateKind::Stack => {
            let mut t = StackTemplate::new(config, text(primary));
            if let Some(f) = secondary {
                t = t.with_secondary(text(f));
            }
            if let Some(f) = tertiary {
                t = t.with_tertiary(text(f));
            }
            if let Some(f) = icon {
                t = t.with_icon(text(f));
            }
            TemplateDefinition::Stack(t)
        }
        TemplateKind::Avatar => {
            let mut t = AvatarTemplate::new(config, text(primary));
            if let Some(f) = image {
                t = t.with_image(text(f));
            }
            if let Some(f) = variant {
                t = t.with_color(variant_of(f));
            }
            if let Some(f) = badge_count {
                t = t.with_badge_count(move |item: &T| {
                    f(item)
                        .as_f64()
                        .map(|n| n.clamp(0.0, f64::from(u32::MAX)) as u32)
                        .unwrap_or(0)
                });
            }
            TemplateDefinition::Avatar(t)
        }
        TemplateKind::Progress => {
            let mut t = ProgressTemplate::new(config, number(primary));
            if let Some(f) = max {
                t = t.with_max(move |item: &T| f(item).as_f64());
            }
            if let Some(f) = variant {
                t = t.with_variant(variant_of(f));
            }
            if let Some(f) = label {
                t = t.with_label(text(f));
            }
            if let Some(f) = segments {
                t = t.with_segments(move |item: &T| f(item));
            }
            if let Some(f) = steps {
                t = t.with_steps(move |item: &T| f(item));
            }
            if let Some(f) = current_step {
                t = t.with_current_step(move |item: &T| {
                    f(item).as_f64().map(|n| n.max(0.0) as usize).unwrap_or(0)
                });
            }
            TemplateDefinition::Progress(t)
        }
        TemplateKind::Rating => {
            let mut t = RatingTemplate::new(config, number(primary));
            if let Some(cb) = on_change {
                t = t
                    .interactive(true)
                    .on_change(move |item: &T, value| cb(item, value));
            }
            TemplateDefinition::Rating(t)
        }
    };

    debug!(kind = %kind, id = %definition.id(), "created template definition");
    Some(definition)
}

fn text<T: 'static>(f: Accessor<T, FieldValue>) -> impl Fn(&T) -> String + Send + Sync + 'static {
    move |item: &T| f(item).to_string()
}

fn number<T: 'static>(f: Accessor<T, FieldValue>) -> impl Fn(&T) -> f64 + Send + Sync + 'static {
    move |item: &T| f(item).as_f64().unwrap_or(0.0)
}

fn variant_of<T: 'static>(
    f: Accessor<T, FieldValue>,
) -> impl Fn(&T) -> Option<Variant> + Send + Sync + 'static {
    move |item: &T| f(item).as_str().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        value: FieldValue,
    }

    fn bindings() -> Bindings<Row> {
        Bindings::new(|r: &Row| r.value.clone())
    }

    #[test]
    fn none_kind_builds_nothing() {
        let def = create_definition(TemplateKind::None, bindings(), &TemplateConfig::default());
        assert!(def.is_none());
    }

    #[test]
    fn every_kind_builds_a_matching_definition() {
        let config = TemplateConfig::default();
        for kind in TemplateKind::ALL {
            let def = create_definition(kind, bindings(), &config).unwrap();
            assert_eq!(def.kind(), kind);
            assert!(def.render(&Row { value: FieldValue::Null }).as_element().is_some());
        }
    }

    #[test]
    fn variant_binding_is_parsed() {
        let def = create_definition(
            TemplateKind::Badge,
            bindings().with_variant(|_: &Row| FieldValue::from("danger")),
            &TemplateConfig::default(),
        )
        .unwrap();
        let node = def.render(&Row { value: "Anything".into() });
        assert!(node.as_element().unwrap().has_class("cs-badge-error"));
    }

    #[test]
    fn only_ratings_expose_interaction() {
        let config = TemplateConfig::default();
        let rating = create_definition(TemplateKind::Rating, bindings(), &config).unwrap();
        let badge = create_definition(TemplateKind::Badge, bindings(), &config).unwrap();
        assert_eq!(rating.as_rating().map(|r| r.id()), Some(rating.id()));
        assert!(badge.as_rating().is_none());
    }

    #[test]
    fn progress_bindings_reach_segments_and_steps() {
        use crate::progress::{ProgressType, StepState};

        let config = TemplateConfig::default();
        let row = Row { value: FieldValue::Integer(40) };

        let segmented = create_definition(
            TemplateKind::Progress,
            bindings().with_segments(|_: &Row| {
                vec![ProgressSegment::new(3.0, "done"), ProgressSegment::new(1.0, "left")]
            }),
            &config,
        )
        .unwrap();
        match &segmented {
            TemplateDefinition::Progress(t) => {
                assert_eq!(t.context(&row).progress_type, ProgressType::MultiSegment)
            }
            _ => panic!("expected a progress definition"),
        }

        let stepped = create_definition(
            TemplateKind::Progress,
            bindings()
                .with_steps(|_: &Row| {
                    vec![ProgressStep::new("a"), ProgressStep::new("b"), ProgressStep::new("c")]
                })
                .with_current_step(|_: &Row| FieldValue::Integer(1))
                .with_label(|_: &Row| FieldValue::from("two of three")),
            &config,
        )
        .unwrap();
        match &stepped {
            TemplateDefinition::Progress(t) => {
                let ctx = t.context(&row);
                assert_eq!(ctx.progress_type, ProgressType::Steps);
                let states: Vec<StepState> = ctx.steps.iter().map(|s| s.state).collect();
                assert_eq!(
                    states,
                    [StepState::Completed, StepState::Active, StepState::Pending]
                );
                assert_eq!(ctx.label.as_deref(), Some("two of three"));
            }
            _ => panic!("expected a progress definition"),
        }
    }

    #[test]
    fn change_callback_makes_rating_interactive() {
        use crate::interaction::HoverState;
        use cellsense_core::Interaction;
        use std::sync::{Arc, Mutex};

        let picked = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&picked);
        let def = create_definition(
            TemplateKind::Rating,
            bindings().on_change(move |_: &Row, v| sink.lock().unwrap().push(v)),
            &TemplateConfig::default(),
        )
        .unwrap();

        let rating = def.as_rating().unwrap();
        let row = Row { value: FieldValue::Integer(2) };
        let mut hover = HoverState::default();
        assert_eq!(rating.handle(&row, Interaction::Select(4), &mut hover), Some(4));
        assert_eq!(*picked.lock().unwrap(), [4]);

        let plain = create_definition(TemplateKind::Rating, bindings(), &TemplateConfig::default())
            .unwrap();
        let plain = plain.as_rating().unwrap();
        assert_eq!(plain.handle(&row, Interaction::Select(4), &mut hover), None);
    }
}
