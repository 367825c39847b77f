use dioxus::prelude::*;
use fraudwatch::chart::{PlotPoint, Viewport};
use fraudwatch::format::plain_number;
use fraudwatch::view::ChartModel;

const TOOLTIP_WIDTH: f64 = 130.0;
const TOOLTIP_HEIGHT: f64 = 44.0;
const TOOLTIP_OFFSET: f64 = 10.0;
const TICK_LENGTH: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
struct Tooltip {
    cursor_x: f64,
    box_x: f64,
    box_y: f64,
    text_x: f64,
    label_y: f64,
    value_y: f64,
    label: String,
    value: String,
}

impl Tooltip {
    /// Sits right of the point, or left of it when it would overflow.
    fn place(point: &PlotPoint, viewport: &Viewport) -> Self {
        let box_x = if point.x + TOOLTIP_OFFSET + TOOLTIP_WIDTH > viewport.width {
            point.x - TOOLTIP_OFFSET - TOOLTIP_WIDTH
        } else {
            point.x + TOOLTIP_OFFSET
        };
        let box_y = (point.y - TOOLTIP_HEIGHT / 2.0)
            .min(viewport.plot_bottom() - TOOLTIP_HEIGHT)
            .max(viewport.plot_top());
        Self {
            cursor_x: point.x,
            box_x,
            box_y,
            text_x: box_x + 10.0,
            label_y: box_y + 17.0,
            value_y: box_y + 34.0,
            label: point.label.clone(),
            value: plain_number(point.value),
        }
    }
}

/// Single-series line chart drawn as inline SVG. The viewBox scales with
/// the container; hovering a column shows that point's tooltip.
#[component]
pub fn LineChart(model: ChartModel) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let geometry = &model.geometry;
    let viewport = geometry.viewport;
    let view_box = viewport.view_box();
    let (left, right) = (viewport.plot_left(), viewport.plot_right());
    let (top, bottom) = (viewport.plot_top(), viewport.plot_bottom());
    let plot_height = viewport.plot_height();
    let tick_start = left - TICK_LENGTH;
    let y_label_x = left - 8.0;
    let x_label_y = bottom + 18.0;

    let y_ticks: Vec<(String, f64, f64)> = geometry
        .y_ticks
        .iter()
        .map(|t| (t.label.clone(), t.position, t.position + 4.0))
        .collect();
    let bands = geometry.hover_bands();
    let tooltip = hovered()
        .and_then(|i| geometry.points.get(i))
        .map(|point| Tooltip::place(point, &viewport));

    rsx! {
        div { class: "card chart-card",
            h3 { class: "card-title", "{model.title}" }
            div { class: "chart-frame",
                svg {
                    class: "chart-svg",
                    view_box: "{view_box}",
                    width: "100%",
                    height: "100%",
                    onmouseleave: move |_| hovered.set(None),

                    line {
                        x1: "{left}",
                        y1: "{top}",
                        x2: "{left}",
                        y2: "{bottom}",
                        class: "chart-axis",
                    }
                    for (label, y, label_y) in y_ticks {
                        g { key: "y-{label}",
                            line {
                                x1: "{tick_start}",
                                y1: "{y}",
                                x2: "{left}",
                                y2: "{y}",
                                class: "chart-axis",
                            }
                            text {
                                x: "{y_label_x}",
                                y: "{label_y}",
                                text_anchor: "end",
                                class: "chart-tick",
                                "{label}"
                            }
                        }
                    }

                    line {
                        x1: "{left}",
                        y1: "{bottom}",
                        x2: "{right}",
                        y2: "{bottom}",
                        class: "chart-axis",
                    }
                    for tick in geometry.x_ticks.iter() {
                        text {
                            key: "x-{tick.label}",
                            x: "{tick.position}",
                            y: "{x_label_y}",
                            text_anchor: "middle",
                            class: "chart-tick",
                            "{tick.label}"
                        }
                    }

                    if let Some(tip) = tooltip.as_ref() {
                        line {
                            x1: "{tip.cursor_x}",
                            y1: "{top}",
                            x2: "{tip.cursor_x}",
                            y2: "{bottom}",
                            class: "chart-cursor",
                        }
                    }

                    path {
                        d: "{geometry.path}",
                        fill: "none",
                        stroke: "{model.stroke}",
                        stroke_width: "{model.stroke_width}",
                    }

                    for point in geometry.points.iter() {
                        circle {
                            key: "dot-{point.label}",
                            cx: "{point.x}",
                            cy: "{point.y}",
                            r: "3",
                            fill: "#ffffff",
                            stroke: "{model.stroke}",
                            stroke_width: "{model.stroke_width}",
                        }
                    }

                    if let Some(tip) = tooltip.as_ref() {
                        g { class: "chart-tooltip",
                            rect {
                                x: "{tip.box_x}",
                                y: "{tip.box_y}",
                                width: "{TOOLTIP_WIDTH}",
                                height: "{TOOLTIP_HEIGHT}",
                                rx: "4",
                            }
                            text {
                                x: "{tip.text_x}",
                                y: "{tip.label_y}",
                                class: "tooltip-label",
                                "{tip.label}"
                            }
                            text {
                                x: "{tip.text_x}",
                                y: "{tip.value_y}",
                                fill: "{model.stroke}",
                                class: "tooltip-value",
                                "{model.series} : {tip.value}"
                            }
                        }
                    }

                    // hover targets last so they sit above the line
                    for band in bands {
                        rect {
                            key: "band-{band.index}",
                            x: "{band.x}",
                            y: "{top}",
                            width: "{band.width}",
                            height: "{plot_height}",
                            fill: "transparent",
                            onmouseenter: move |_| hovered.set(Some(band.index)),
                        }
                    }
                }
            }
        }
    }
}
