//! Presentation templates for data cells.
//!
//! Each template binds accessor closures over a host item type `T`, resolves
//! them per item into a context, and renders that context into an abstract
//! [`Node`](cellsense_core::Node) tree. Templates are immutable once built
//! and can be shared across threads; per-row interaction state lives in
//! [`InteractionState`].

pub mod accessor;
pub mod avatar;
pub mod badge;
mod common;
pub mod currency;
pub mod definition;
mod id;
pub mod interaction;
pub mod progress;
pub mod rating;
pub mod stack;

pub use accessor::{accessor, Accessor, ChangeCallback};
pub use avatar::{AvatarContext, AvatarShape, AvatarTemplate, Presence};
pub use badge::{BadgeContext, BadgeTemplate};
pub use currency::{looks_like_currency_field, CurrencyContext, CurrencyTemplate};
pub use definition::{create_definition, Bindings, TemplateDefinition};
pub use id::TemplateId;
pub use interaction::{HoverState, InteractionState};
pub use progress::{
    LabelFormat, ProgressContext, ProgressSegment, ProgressStep, ProgressTemplate, ProgressType,
    StepState,
};
pub use rating::{RatingContext, RatingTemplate, RatingType};
pub use stack::{Align, Density, StackContext, StackTemplate};
