use cellsense_core::{Element, Node};

use super::CurrencyContext;
use crate::common::class;

pub fn render_currency(ctx: &CurrencyContext) -> Node {
    let mut root = Element::new("span")
        .class(class("currency"))
        .attr("data-value", ctx.value.to_string())
        .attr("data-currency", ctx.code.as_str());
    if let Some(variant) = ctx.variant {
        root = root.class(class(&format!("currency-{}", variant)));
    }

    root.child(
        Element::new("span")
            .class(class("currency-amount"))
            .text(ctx.formatted.as_str()),
    )
    .child_opt(ctx.show_code.then(|| {
        Element::new("span")
            .class(class("currency-code"))
            .text(ctx.code.as_str())
    }))
    .into()
}
