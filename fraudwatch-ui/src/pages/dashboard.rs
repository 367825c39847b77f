use dioxus::prelude::*;
use fraudwatch::chart::Viewport;
use fraudwatch::{sample, DashboardView};

use crate::config::Config;
use crate::widgets::header::Header;
use crate::widgets::line_chart::LineChart;
use crate::widgets::stat_card::StatCard;
use crate::widgets::transaction_table::TransactionTable;

#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<Config>();

    // Built once per mount; re-renders reuse the same snapshot.
    let mut view = use_signal(move || {
        let snapshot = match config.seed {
            Some(seed) => sample::seeded_snapshot(seed),
            None => sample::snapshot(),
        };
        info!(
            "Dashboard snapshot ready: {} hourly points, {} flagged transactions",
            snapshot.hourly_data.len(),
            snapshot.suspicious_transactions.len()
        );
        DashboardView::new(snapshot, config.display.clone())
    });

    let header = view.read().header();
    let cards = view.read().stat_cards();
    let volume = view.read().volume_chart(Viewport::default());
    let risk = view.read().risk_chart(Viewport::default());
    let table = view.read().table();

    rsx! {
        div { class: "page",
            div { class: "page-inner",
                Header {
                    model: header,
                    on_timeframe_change: move |timeframe| {
                        info!("Timeframe selected: {}", timeframe);
                        view.write().select_timeframe(timeframe);
                    },
                }

                div { class: "stats-grid",
                    for card in cards {
                        StatCard { key: "{card.title}", model: card }
                    }
                }

                div { class: "charts-grid",
                    LineChart { model: volume }
                    LineChart { model: risk }
                }

                TransactionTable { model: table }
            }
        }
    }
}
