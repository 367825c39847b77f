//! Stroke icons drawn inline so the UI ships without an icon font.

use dioxus::prelude::*;
use fraudwatch::view::StatIcon;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconKind {
    TrendingUp,
    AlertTriangle,
    AlertCircle,
    Shield,
}

impl From<StatIcon> for IconKind {
    fn from(icon: StatIcon) -> Self {
        match icon {
            StatIcon::TrendingUp => IconKind::TrendingUp,
            StatIcon::AlertTriangle => IconKind::AlertTriangle,
            StatIcon::AlertCircle => IconKind::AlertCircle,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, class: String) -> Element {
    let shape = match kind {
        IconKind::TrendingUp => rsx! {
            polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
            polyline { points: "16 7 22 7 22 13" }
        },
        IconKind::AlertTriangle => rsx! {
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        },
        IconKind::AlertCircle => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 8v4" }
            path { d: "M12 16h.01" }
        },
        IconKind::Shield => rsx! {
            path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {shape}
        }
    }
}
