use cellsense_core::{Element, Node};

use super::AvatarContext;
use crate::common::class;

pub fn render_avatar(ctx: &AvatarContext) -> Node {
    let initials = Element::new("span")
        .class(class("avatar-initials"))
        .text(ctx.initials.as_str());

    let face = match &ctx.image_url {
        Some(url) => Element::new("span")
            .class(class("avatar-face"))
            .child(
                Element::new("img")
                    .class(class("avatar-image"))
                    .attr("src", url.as_str())
                    .attr("alt", ctx.name.as_str()),
            )
            // Shown by the host when the image fails to load.
            .child(initials.class(class("avatar-fallback"))),
        None => Element::new("span")
            .class(class("avatar-face"))
            .child(initials),
    };

    let face = face
        .class(class(&format!("avatar-{}", ctx.variant)))
        .attr_opt("title", (!ctx.name.is_empty()).then_some(ctx.name.as_str()))
        .child_opt(ctx.presence.map(|p| {
            Element::new("span")
                .class(class("avatar-status"))
                .class(class(&format!("avatar-status-{}", p)))
                .attr("aria-label", p.as_str())
        }))
        .child_opt(ctx.badge_label().map(|label| {
            Element::new("span")
                .class(class("avatar-badge"))
                .text(label)
        }));

    Element::new("div")
        .class(class("avatar"))
        .class(class(&format!("avatar-{}", ctx.shape.as_str())))
        .class(class(&format!("avatar-{}", ctx.size.as_str())))
        .child(face)
        .child_opt((ctx.show_name && !ctx.name.is_empty()).then(|| {
            Element::new("span")
                .class(class("avatar-name"))
                .text(ctx.name.as_str())
        }))
        .into()
}
