use dioxus::prelude::*;
use fraudwatch::view::StatCardModel;

use crate::widgets::icon::{Icon, IconKind};

#[component]
pub fn StatCard(model: StatCardModel) -> Element {
    let icon_class = format!("icon {}", model.color.icon_class());

    rsx! {
        div { class: "card stat-card",
            div { class: "stat-card-top",
                p { class: "stat-title", "{model.title}" }
                Icon { kind: IconKind::from(model.icon), class: icon_class }
            }
            div { class: "stat-card-body",
                h3 { class: "stat-value", "{model.value}" }
                span { class: "stat-change {model.change_class}", "{model.change}" }
            }
        }
    }
}
