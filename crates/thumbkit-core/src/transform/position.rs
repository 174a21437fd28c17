//! Crop anchoring from CMS position keywords such as `top-left`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl fmt::Display for VAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VAlign::Top => "top",
            VAlign::Middle => "middle",
            VAlign::Bottom => "bottom",
        })
    }
}

impl fmt::Display for HAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        })
    }
}

const VERTICAL: [(&str, VAlign); 3] = [
    ("top", VAlign::Top),
    ("center", VAlign::Middle),
    ("bottom", VAlign::Bottom),
];

const HORIZONTAL: [(&str, HAlign); 3] = [
    ("left", HAlign::Left),
    ("center", HAlign::Center),
    ("right", HAlign::Right),
];

/// Finds the first `<vertical>-<horizontal>` pair anywhere in `position`.
///
/// The vertical `center` keyword maps to Thumbor's `middle`; the horizontal
/// one stays `center`.
pub fn parse_position(position: &str) -> Option<(VAlign, HAlign)> {
    (0..position.len())
        .filter(|&i| position.is_char_boundary(i))
        .find_map(|i| match_at(&position[i..]))
}

fn match_at(rest: &str) -> Option<(VAlign, HAlign)> {
    let (v, after) = VERTICAL.iter().find_map(|(kw, v)| {
        rest.strip_prefix(kw)
            .and_then(|r| r.strip_prefix('-'))
            .map(|r| (*v, r))
    })?;
    let h = HORIZONTAL
        .iter()
        .find(|(kw, _)| after.starts_with(kw))
        .map(|(_, h)| *h)?;
    Some((v, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        assert_eq!(parse_position("top-left"), Some((VAlign::Top, HAlign::Left)));
        assert_eq!(
            parse_position("bottom-right"),
            Some((VAlign::Bottom, HAlign::Right))
        );
    }

    #[test]
    fn vertical_center_becomes_middle() {
        assert_eq!(
            parse_position("center-center"),
            Some((VAlign::Middle, HAlign::Center))
        );
        assert_eq!(
            parse_position("center-left"),
            Some((VAlign::Middle, HAlign::Left))
        );
    }

    #[test]
    fn matches_inside_longer_string() {
        assert_eq!(
            parse_position("crop-top-right"),
            Some((VAlign::Top, HAlign::Right))
        );
    }

    #[test]
    fn rejects_unknown_and_reversed() {
        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("left-top"), None);
        assert_eq!(parse_position("top"), None);
        assert_eq!(parse_position("middle-left"), None);
    }

    #[test]
    fn display_keywords() {
        assert_eq!(VAlign::Middle.to_string(), "middle");
        assert_eq!(HAlign::Center.to_string(), "center");
    }
}
