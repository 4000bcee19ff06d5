use anyhow::{anyhow, Context, Result};
use cellsense_classify::{classify_fields, suggest, Suggestion};
use cellsense_core::{FieldValue, Node, TemplateConfig, TemplateKind};
use cellsense_templates::{create_definition, Bindings};
use tracing::info;

use crate::dataset::{Dataset, Row};

/// Suggestions for every field of `dataset`, best first.
pub fn suggestions(dataset: &Dataset, config: &TemplateConfig) -> Vec<Suggestion> {
    let samples: Vec<Vec<FieldValue>> = dataset
        .fields
        .iter()
        .map(|f| dataset.samples(&f.name))
        .collect();
    let fields = dataset
        .fields
        .iter()
        .zip(&samples)
        .map(|(field, s)| (field, (!s.is_empty()).then_some(s.as_slice())));
    classify_fields(fields, config)
}

/// Rows rendered by one field's template.
#[derive(Debug)]
pub struct Rendered {
    pub field: String,
    pub kind: TemplateKind,
    pub nodes: Vec<Node>,
}

/// Render the first `limit` rows of `field`. Without an explicit `kind`
/// the field's suggestion decides, and an unclassified field is an error.
pub fn render_field(
    dataset: &Dataset,
    field: &str,
    kind: Option<&str>,
    limit: usize,
    config: &TemplateConfig,
) -> Result<Rendered> {
    let descriptor = dataset
        .field(field)
        .ok_or_else(|| anyhow!("unknown field '{}'", field))?;
    let name = descriptor.name.clone();

    let kind = match kind {
        Some(k) => k
            .parse::<TemplateKind>()
            .with_context(|| format!("invalid --kind for field '{}'", name))?,
        None => {
            let samples = dataset.samples(&name);
            let suggestion = suggest(descriptor, Some(&samples[..]), config);
            info!(
                field = %name,
                kind = %suggestion.kind,
                confidence = suggestion.confidence,
                "using suggested template"
            );
            suggestion.kind
        }
    };

    let key = name.clone();
    let bindings = Bindings::new(move |row: &Row| row.get(&key).cloned().unwrap_or_default());
    let definition = create_definition(kind, bindings, config)
        .ok_or_else(|| anyhow!("no template for field '{}'; pass --kind", name))?;

    let nodes = dataset
        .rows
        .iter()
        .take(limit)
        .map(|row| definition.render(row))
        .collect();
    Ok(Rendered {
        field: name,
        kind,
        nodes,
    })
}
