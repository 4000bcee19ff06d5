use cellsense_core::{DomEvent, Element, Interaction, Node};

use super::icons::{default_icon, fill_for, icon_for, Fill};
use super::{RatingContext, RatingType};
use crate::common::{class, trim_number, width_style};

/// Render a rating. `hover` is the host-owned hovered position; when set,
/// icons up to and including it are drawn filled.
pub fn render_rating(ctx: &RatingContext, hover: Option<u32>) -> Node {
    let root = Element::new("div")
        .class(class("rating"))
        .class(class(&format!("rating-{}", ctx.rating_type.as_str())))
        .class(class(&format!("rating-{}", ctx.color)))
        .class(class(&format!("rating-{}", ctx.size.as_str())))
        .class_if(ctx.interactive, class("rating-interactive"))
        .attr(
            "aria-label",
            format!("{} of {}", trim_number(ctx.value, 1), ctx.max_rating),
        );

    let root = match ctx.rating_type {
        RatingType::Stars | RatingType::Hearts | RatingType::Emoji | RatingType::Custom => {
            icon_row(root, ctx, hover)
        }
        RatingType::Thumbs => thumbs(root, ctx),
        RatingType::Numeric => root.child(
            Element::new("span")
                .class(class("rating-numeric"))
                .text(format!("{} / {}", trim_number(ctx.value, 1), ctx.max_rating)),
        ),
        RatingType::Bar => root
            .child(
                Element::new("div").class(class("rating-bar")).child(
                    Element::new("div")
                        .class(class("rating-bar-fill"))
                        .attr("style", width_style(ctx.percentage)),
                ),
            )
            .child_opt(value_label(ctx)),
    };
    root.into()
}

fn value_label(ctx: &RatingContext) -> Option<Element> {
    ctx.show_value.then(|| {
        Element::new("span")
            .class(class("rating-value"))
            .text(trim_number(ctx.value, 1))
    })
}

fn icon_row(root: Element, ctx: &RatingContext, hover: Option<u32>) -> Element {
    let icons = (1..=ctx.max_rating).map(|position| {
        let fill = match hover {
            Some(h) if position <= h => Fill::Full,
            Some(_) => Fill::Empty,
            None => fill_for(position, ctx.value, ctx.allow_half),
        };
        let glyph = icon_for(ctx.rating_type, &ctx.icons, position, ctx.max_rating, fill);
        let icon = Element::new(if ctx.interactive { "button" } else { "span" })
            .class(class("rating-icon"))
            .class(class(&format!("rating-{}", fill.as_str())))
            .class_if(hover.is_some_and(|h| position <= h), class("rating-hover"))
            .attr("data-position", position.to_string())
            .text(glyph);
        if ctx.interactive {
            icon.attr("type", "button")
                .attr("aria-label", format!("Rate {} of {}", position, ctx.max_rating))
                .on(DomEvent::Click, Interaction::Select(position))
                .on(DomEvent::MouseEnter, Interaction::Hover(position))
        } else {
            icon
        }
    });

    let row = Element::new("span")
        .class(class("rating-icons"))
        .children(icons);
    let row = if ctx.interactive {
        row.on(DomEvent::MouseLeave, Interaction::ClearHover)
    } else {
        row
    };
    root.child(row).child_opt(value_label(ctx))
}

fn thumbs(root: Element, ctx: &RatingContext) -> Element {
    let thumb = |up: bool| {
        let (position, name, active) = if up {
            (1, "up", ctx.value >= 1.0)
        } else {
            (0, "down", ctx.value <= 0.0)
        };
        let el = Element::new(if ctx.interactive { "button" } else { "span" })
            .class(class("rating-thumb"))
            .class(class(&format!("rating-thumb-{}", name)))
            .class_if(active, class("rating-active"))
            .text(default_icon(RatingType::Thumbs, position, 1, Fill::Full));
        if ctx.interactive {
            el.attr("type", "button")
                .attr("aria-label", format!("Thumbs {}", name))
                .on(DomEvent::Click, Interaction::Select(position))
        } else {
            el
        }
    };
    root.child(thumb(true)).child(thumb(false))
}
