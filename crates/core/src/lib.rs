//! Shared vocabulary for cellsense: field values, template kinds, style
//! tokens, the abstract node tree and the process-wide template config.

pub mod config;
pub mod error;
pub mod keywords;
pub mod kind;
pub mod node;
pub mod style;
pub mod value;

pub use config::{
    load_dotenv, BadgeDefaults, CurrencyDefaults, DetectionThresholds, StackDefaults,
    TemplateConfig, TemplateConfigBuilder, MAX_SAMPLE_LIMIT,
};
pub use error::*;
pub use keywords::{Keyword, KeywordTable};
pub use kind::TemplateKind;
pub use node::{DomEvent, Element, Handler, Interaction, Node};
pub use style::{Size, Variant};
pub use value::FieldValue;
