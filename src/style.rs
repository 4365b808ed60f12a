//! Icon style extraction from a KML `Style` subtree

use crate::xml::XmlValue;
use serde::Serialize;

/// Marker styling pulled from a placemark's `Style/IconStyle` block.
///
/// Both fields serialize as explicit `null` when absent, never as omitted
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Style {
    /// Marker color (`IconStyle/color`).
    pub color: Option<String>,
    /// Icon image reference (`IconStyle/Icon/href`).
    pub href: Option<String>,
}

/// Extract icon color and href from an optional `Style` subtree.
///
/// Every traversal step is null-guarded: a missing `Style`, `IconStyle`,
/// `color`, `Icon`, or `href` — or an empty text value — yields `None` for
/// the corresponding field.
pub fn extract_style(style: Option<&XmlValue>) -> Style {
    let icon_style = style.and_then(|style| style.get("IconStyle"));

    let color = icon_style
        .and_then(|icon_style| icon_style.get("color"))
        .and_then(XmlValue::as_text)
        .filter(|text| !text.is_empty())
        .map(str::to_owned);

    let href = icon_style
        .and_then(|icon_style| icon_style.get("Icon"))
        .and_then(|icon| icon.get("href"))
        .and_then(XmlValue::as_text)
        .filter(|text| !text.is_empty())
        .map(str::to_owned);

    Style { color, href }
}
