use dioxus::prelude::*;
use fraudwatch::view::HeaderModel;
use fraudwatch::Timeframe;

use crate::widgets::icon::{Icon, IconKind};

#[component]
pub fn Header(model: HeaderModel, on_timeframe_change: EventHandler<Timeframe>) -> Element {
    rsx! {
        header { class: "dashboard-header",
            div {
                h1 { class: "dashboard-title", "{model.title}" }
                p { class: "dashboard-subtitle", "{model.subtitle}" }
            }
            div { class: "header-actions",
                select {
                    class: "timeframe-select",
                    onchange: move |e: Event<FormData>| match e.value().parse::<Timeframe>() {
                        Ok(timeframe) => on_timeframe_change.call(timeframe),
                        Err(err) => warn!("Ignoring timeframe selection: {}", err),
                    },
                    for opt in model.options {
                        option {
                            key: "{opt.value}",
                            value: "{opt.value}",
                            selected: opt.selected,
                            "{opt.label}"
                        }
                    }
                }
                button { class: "alert-button",
                    Icon { kind: IconKind::AlertTriangle, class: "icon-sm" }
                    "{model.alert_badge}"
                }
            }
        }
    }
}
