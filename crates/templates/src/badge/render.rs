use cellsense_core::{Element, Node};

use super::BadgeContext;
use crate::common::{class, icon};

pub fn render_badge(ctx: &BadgeContext) -> Node {
    Element::new("span")
        .class(class("badge"))
        .class(class(&format!("badge-{}", ctx.variant)))
        .class(class(&format!("badge-{}", ctx.size.as_str())))
        .class_if(ctx.pill, class("badge-pill"))
        .class_if(ctx.outlined, class("badge-outlined"))
        .attr_opt("title", ctx.tooltip.as_deref())
        .child_opt(ctx.icon.as_deref().map(icon))
        .child(
            Element::new("span")
                .class(class("badge-text"))
                .text(ctx.text.as_str()),
        )
        .into()
}
