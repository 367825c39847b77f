use dioxus::prelude::*;
use fraudwatch::view::TransactionTable as TableModel;

use crate::widgets::icon::{Icon, IconKind};

const COLUMNS: [&str; 6] = ["Time", "Amount", "Sender", "Recipient", "Risk Score", "Flags"];

#[component]
pub fn TransactionTable(model: TableModel) -> Element {
    rsx! {
        div { class: "card table-card",
            div { class: "table-header",
                div { class: "table-heading",
                    Icon { kind: IconKind::Shield, class: "icon text-red-500" }
                    h3 { class: "card-title", "{model.title}" }
                }
                span { class: "badge badge-red", "{model.badge}" }
            }
            div { class: "table-scroll",
                table { class: "tx-table",
                    thead {
                        tr {
                            for column in COLUMNS {
                                th { key: "{column}", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for row in model.rows {
                            tr { key: "{row.id}",
                                td { class: "cell-muted", "{row.time}" }
                                td { class: "cell-strong", "{row.amount}" }
                                td { class: "cell-muted", "{row.sender}" }
                                td { class: "cell-muted", "{row.recipient}" }
                                td {
                                    div { class: "risk-badge", "{row.risk_badge}" }
                                }
                                td {
                                    div { class: "flag-list",
                                        for (idx, flag) in row.flags.iter().enumerate() {
                                            span { key: "{idx}", class: "flag-chip", "{flag}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
