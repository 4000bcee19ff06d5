//! Default icon sets for the icon-based rating modes.

use indexmap::IndexMap;
use serde::Serialize;

use super::RatingType;

/// Five-level emoji scale, worst to best.
pub const EMOJI_SCALE: [&str; 5] = ["😞", "😕", "😐", "🙂", "😄"];

/// How much of one icon position is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Full,
    Half,
    Empty,
}

impl Fill {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fill::Full => "full",
            Fill::Half => "half",
            Fill::Empty => "empty",
        }
    }
}

/// Fill of the 1-based `position` for `value`.
pub fn fill_for(position: u32, value: f64, allow_half: bool) -> Fill {
    let position = f64::from(position);
    if value >= position {
        Fill::Full
    } else if allow_half && value >= position - 0.5 {
        Fill::Half
    } else {
        Fill::Empty
    }
}

/// The icon map the emoji mode always uses: every position of `max`
/// mapped through [`emoji_for_position`].
pub fn emoji_icons(max: u32) -> IndexMap<u32, String> {
    (1..=max)
        .map(|position| (position, emoji_for_position(position, max).to_string()))
        .collect()
}

/// Emoji for `position` out of `max`, by its share of the scale.
pub fn emoji_for_position(position: u32, max: u32) -> &'static str {
    if max == 0 {
        return EMOJI_SCALE[0];
    }
    let levels = EMOJI_SCALE.len() as u64;
    let level = (u64::from(position) * levels).div_ceil(u64::from(max));
    EMOJI_SCALE[(level.clamp(1, levels) - 1) as usize]
}

/// Built-in glyph for one position.
pub fn default_icon(rating_type: RatingType, position: u32, max: u32, fill: Fill) -> &'static str {
    match rating_type {
        RatingType::Hearts => match fill {
            Fill::Empty => "♡",
            Fill::Full | Fill::Half => "♥",
        },
        RatingType::Emoji => emoji_for_position(position, max),
        RatingType::Thumbs => {
            if position == 0 {
                "👎"
            } else {
                "👍"
            }
        }
        RatingType::Stars | RatingType::Custom | RatingType::Numeric | RatingType::Bar => {
            match fill {
                Fill::Empty => "☆",
                Fill::Full | Fill::Half => "★",
            }
        }
    }
}

/// Icon for a position: the custom entry if there is one, else the type's
/// default glyph.
pub fn icon_for(
    rating_type: RatingType,
    custom: &IndexMap<u32, String>,
    position: u32,
    max: u32,
    fill: Fill,
) -> String {
    custom
        .get(&position)
        .filter(|icon| !icon.is_empty())
        .cloned()
        .unwrap_or_else(|| default_icon(rating_type, position, max, fill).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills() {
        assert_eq!(fill_for(3, 3.0, false), Fill::Full);
        assert_eq!(fill_for(4, 3.5, false), Fill::Empty);
        assert_eq!(fill_for(4, 3.5, true), Fill::Half);
        assert_eq!(fill_for(4, 3.4, true), Fill::Empty);
    }

    #[test]
    fn emoji_scale_by_share() {
        let five: Vec<&str> = (1..=5).map(|i| emoji_for_position(i, 5)).collect();
        assert_eq!(five, EMOJI_SCALE);

        let ten: Vec<&str> = (1..=10).map(|i| emoji_for_position(i, 10)).collect();
        assert_eq!(ten[0], "😞");
        assert_eq!(ten[1], "😞");
        assert_eq!(ten[2], "😕");
        assert_eq!(ten[9], "😄");

        assert_eq!(emoji_for_position(1, 3), "😕");
        assert_eq!(emoji_for_position(3, 3), "😄");
    }

    #[test]
    fn emoji_map_covers_every_position() {
        for max in [1, 3, 5, 10] {
            let map = emoji_icons(max);
            assert_eq!(map.len(), max as usize);
            for (position, emoji) in &map {
                assert_eq!(emoji, emoji_for_position(*position, max));
            }
            assert_eq!(map[&max], "😄");
        }
        assert_eq!(emoji_icons(5).values().cloned().collect::<Vec<_>>(), EMOJI_SCALE);
    }

    #[test]
    fn custom_entries_fall_back_per_position() {
        let mut custom = IndexMap::new();
        custom.insert(2, "🍕".to_string());
        assert_eq!(icon_for(RatingType::Custom, &custom, 2, 5, Fill::Full), "🍕");
        assert_eq!(icon_for(RatingType::Custom, &custom, 3, 5, Fill::Empty), "☆");
        assert_eq!(icon_for(RatingType::Hearts, &custom, 1, 5, Fill::Full), "♥");
    }
}
