use cellsense_core::{Element, Node};

use super::StackContext;
use crate::common::{class, icon};

pub fn render_stack(ctx: &StackContext) -> Node {
    let lines = ctx.lines.iter().map(|line| {
        Element::new("span")
            .class(class(&format!("stack-{}", line.role.as_str())))
            .class_if(line.full_text.is_some(), class("stack-truncated"))
            .attr_opt("title", line.full_text.as_deref())
            .text(line.text.as_str())
    });

    Element::new("div")
        .class(class("stack"))
        .class(class(&format!("stack-{}", ctx.density.as_str())))
        .class(class(&format!("stack-align-{}", ctx.align.as_str())))
        .child_opt(ctx.icon.as_deref().map(icon))
        .child(Element::new("div").class(class("stack-lines")).children(lines))
        .into()
}
