use cellsense_core::{Size, TemplateConfig, Variant};

use super::*;

struct User {
    name: &'static str,
    photo: &'static str,
    status: &'static str,
    unread: u32,
}

fn user(name: &'static str) -> User {
    User {
        name,
        photo: "",
        status: "",
        unread: 0,
    }
}

fn template() -> AvatarTemplate<User> {
    AvatarTemplate::new(&TemplateConfig::default(), |u: &User| u.name.to_string())
}

#[test]
fn initials_rules() {
    assert_eq!(initials(""), "?");
    assert_eq!(initials("   "), "?");
    assert_eq!(initials("Ada"), "AD");
    assert_eq!(initials("x"), "X");
    assert_eq!(initials("Ada Lovelace"), "AL");
    assert_eq!(initials("ada king lovelace"), "AL");
    assert_eq!(initials("émile zola"), "ÉZ");
}

#[test]
fn explicit_initials_win_unless_blank() {
    let t = template().with_initials(|u: &User| if u.name == "Ada" { "al".into() } else { String::new() });
    assert_eq!(t.context(&user("Ada")).initials, "AL");
    assert_eq!(t.context(&user("Grace Hopper")).initials, "GH");
}

#[test]
fn hash_color_is_stable_and_from_fixed_set() {
    for name in ["Ada Lovelace", "Grace Hopper", "", "Linus"] {
        let a = hash_variant(name);
        assert_eq!(a, hash_variant(name));
        assert!(HASH_VARIANTS.contains(&a));
    }
    assert_eq!(template().context(&user("Ada")).variant, hash_variant("Ada"));
}

#[test]
fn color_precedence() {
    let t = template()
        .with_name_color("ada", Variant::Muted)
        .with_color(|u: &User| (u.name == "Grace").then_some(Variant::Warning));
    assert_eq!(t.context(&user("Grace")).variant, Variant::Warning);
    assert_eq!(t.context(&user("Ada")).variant, Variant::Muted);
    assert_eq!(t.context(&user("Linus")).variant, hash_variant("Linus"));
}

#[test]
fn presence_parses_and_ignores_unknown() {
    let t = template().with_presence(|u: &User| u.status.to_string());
    let mut u = user("Ada");
    u.status = "Busy";
    assert_eq!(t.context(&u).presence, Some(Presence::Busy));
    u.status = "on a boat";
    assert_eq!(t.context(&u).presence, None);
}

#[test]
fn badge_count_is_capped() {
    let t = template().with_badge_count(|u: &User| u.unread);
    let mut u = user("Ada");
    assert_eq!(t.context(&u).badge_label(), None);
    u.unread = 7;
    assert_eq!(t.context(&u).badge_label().as_deref(), Some("7"));
    u.unread = 150;
    assert_eq!(t.context(&u).badge_label().as_deref(), Some("99+"));
}

#[test]
fn renders_image_with_initials_fallback() {
    let t = template()
        .with_image(|u: &User| u.photo.to_string())
        .with_shape(AvatarShape::Rounded)
        .with_size(Size::Large)
        .show_name(true);
    let mut u = user("Ada Lovelace");
    u.photo = "https://img.example/ada.png";
    let node = t.render(&u);

    let root = node.as_element().unwrap();
    assert!(root.has_class("cs-avatar-rounded"));
    assert!(root.has_class("cs-avatar-lg"));
    let img = node.find_by_tag("img")[0];
    assert_eq!(img.get_attr("src"), Some("https://img.example/ada.png"));
    assert_eq!(node.find_by_class("cs-avatar-fallback").len(), 1);
    assert_eq!(
        node.find_by_class("cs-avatar-name")[0].children,
        vec![Node::Text("Ada Lovelace".into())]
    );
}

#[test]
fn renders_initials_status_and_badge() {
    let t = template()
        .with_presence(|u: &User| u.status.to_string())
        .with_badge_count(|u: &User| u.unread);
    let mut u = user("Grace Hopper");
    u.status = "online";
    u.unread = 3;
    let node = t.render(&u);

    assert!(node.find_by_tag("img").is_empty());
    assert_eq!(node.find_by_class("cs-avatar-initials").len(), 1);
    assert_eq!(node.find_by_class("cs-avatar-status-online").len(), 1);
    assert_eq!(node.text_content(), "GH3");
    assert!(node.find_by_class("cs-avatar-name").is_empty());
}
