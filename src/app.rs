use std::collections::BTreeSet;
use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::domain::entities::edit::FieldChange;
use crate::domain::entities::quote::{ClubCosting, QuoteId, Supplier};
use crate::infra::baseline::file::FileBaselineSource;
use crate::infra::sqlite::repo::SqliteSlotStore;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::format::{
    committed_label, date_input_value, format_currency, format_quote_date, parse_amount_draft,
    parse_amount_input, quote_date_from_input,
};
use crate::ui::state::app_state::{toggle_expanded, AppState, LoadState};
use crate::ui::state::view::{
    clamp_page, page_count, page_range, row_views, MaterialDetailView, QuoteRowView,
};
use crate::usecase::services::bootstrap::BootstrapService;
use crate::usecase::services::persistence::PersistenceGateway;
use crate::usecase::services::quote_store::QuoteStore;

const COLUMN_TITLES: [&str; 9] = [
    "Expand/Collapse",
    "Quote Name",
    "Item Name",
    "Supplier",
    "Quote Date",
    "First Cost ($)",
    "Retail Price ($)",
    "Committed",
    "Actions",
];

pub fn table_header_cell_style() -> &'static str {
    "border: 1px solid #f0f0f0; padding: 8px; background: #fafafa; text-align: left; font-weight: 600;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #f0f0f0; padding: 8px; vertical-align: middle;"
}

fn change_field(mut store: Signal<Option<QuoteStore>>, id: &QuoteId, change: FieldChange) {
    let mut guard = store.write();
    let Some(current) = guard.as_mut() else {
        return;
    };
    if let Err(err) = current.change_field(id, change) {
        debug!(quote_id = %id, error = %err, "ignored field change");
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| AppConfig::load().map_err(|err| format!("{err:#}")));
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to resolve configuration: {err}" }
                }
            };
        }
    };

    let AppState {
        mut store,
        mut load_state,
        expanded,
        mut page,
        mut status,
    } = AppState::new();

    let config_for_init = config.clone();
    use_effect(move || {
        let slots = Arc::new(SqliteSlotStore::new(config_for_init.db_path.clone()));
        let gateway = PersistenceGateway::new(slots, config_for_init.storage_key.clone());
        let source = Arc::new(FileBaselineSource::new(
            config_for_init.baseline_path.clone(),
        ));
        let bootstrap = BootstrapService::new(source, gateway.clone());

        match run_blocking("bootstrap", || bootstrap.load()) {
            Ok(loaded) => {
                status.set(loaded.origin.message().to_string());
                store.set(Some(QuoteStore::new(loaded.quotes, gateway)));
                load_state.set(LoadState::Ready);
            }
            Err(err) => {
                error!(error = %err, "failed to load quotes");
                load_state.set(LoadState::Failed(err.to_string()));
            }
        }
    });

    match load_state() {
        LoadState::Loading => {
            return rsx! {
                div { style: "padding: 20px; text-align: center;", "Loading quotes..." }
            };
        }
        LoadState::Failed(message) => {
            return rsx! {
                div { style: "padding: 20px; color: red; text-align: center;", "Error: {message}" }
            };
        }
        LoadState::Ready => {}
    }

    let page_size = config.page_size;
    let (total, rows) = {
        let guard = store.read();
        match guard.as_ref() {
            Some(current) if !current.is_empty() => {
                let total = current.len();
                (total, row_views(current, page_range(page(), total, page_size)))
            }
            _ => (0, Vec::new()),
        }
    };

    if total == 0 {
        return rsx! {
            div { style: "padding: 20px; text-align: center;", "No quote data" }
        };
    }

    let current_page = clamp_page(page(), total, page_size);
    let pages = page_count(total, page_size);

    rsx! {
        div { style: "padding: 24px; background-color: #f5f5f5; min-height: 100vh;",
            div { style: "padding: 16px; background: #fff;",
                h4 { style: "margin: 0 0 16px 0;", "Product Quote Management Table" }
                div { style: "margin-bottom: 8px; color: #555;", "{status}" }
                table { style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            for title in COLUMN_TITLES {
                                th { style: "{table_header_cell_style()}", "{title}" }
                            }
                        }
                    }
                    tbody {
                        for row in rows {
                            QuoteRow {
                                key: "{row.id}",
                                row: row.clone(),
                                store,
                                expanded,
                                status,
                            }
                        }
                    }
                }
                div { style: "display: flex; gap: 8px; justify-content: flex-end; align-items: center; margin-top: 12px;",
                    button {
                        disabled: current_page == 0,
                        onclick: move |_| page.set(current_page.saturating_sub(1)),
                        "Previous"
                    }
                    span { "Page {current_page + 1} of {pages}" }
                    button {
                        disabled: current_page + 1 >= pages,
                        onclick: move |_| page.set(current_page + 1),
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn QuoteRow(
    row: QuoteRowView,
    store: Signal<Option<QuoteStore>>,
    expanded: Signal<BTreeSet<QuoteId>>,
    status: Signal<String>,
) -> Element {
    let mut store = store;
    let mut expanded = expanded;
    let mut status = status;

    let is_expanded = expanded.read().contains(&row.id);
    let detail = if is_expanded {
        store
            .read()
            .as_ref()
            .and_then(|current| current.get(&row.id))
            .map(MaterialDetailView::from_quote)
    } else {
        None
    };

    let fields = row.fields.clone();
    let toggle_label = if is_expanded { "▲" } else { "▼" };
    let quote_date_label = format_quote_date(&fields.quote_date);
    let quote_date_input = date_input_value(&fields.quote_date);
    let first_cost_label = format_currency(fields.costing.first_cost);
    let retail_price_label = format_currency(fields.club_costing.retail_price);
    let committed_text = committed_label(fields.committed_flag);
    let committed_color = if fields.committed_flag {
        "#52c41a"
    } else {
        "#faad14"
    };

    let id_for_toggle = row.id.clone();
    let id_for_quote_name = row.id.clone();
    let id_for_item_name = row.id.clone();
    let id_for_supplier = row.id.clone();
    let id_for_quote_date = row.id.clone();
    let id_for_first_cost = row.id.clone();
    let id_for_retail_price = row.id.clone();
    let id_for_committed = row.id.clone();
    let id_for_save = row.id.clone();
    let id_for_cancel = row.id.clone();
    let id_for_edit = row.id.clone();
    let costing_for_first_cost = fields.costing.clone();

    let detail_row = match detail {
        Some(detail) => rsx! {
            tr {
                td { colspan: "9", style: "{table_cell_style()} background: #fcfcfc;",
                    MaterialDetail { detail }
                }
            }
        },
        None => rsx! {},
    };

    rsx! {
        tr {
            td { style: "{table_cell_style()} text-align: center;",
                button {
                    onclick: move |_| toggle_expanded(&mut expanded.write(), &id_for_toggle),
                    "{toggle_label}"
                }
            }
            td { style: "{table_cell_style()}",
                if row.editing {
                    input {
                        style: "width: 100%;",
                        value: "{fields.quote_name}",
                        oninput: move |event| {
                            change_field(store, &id_for_quote_name, FieldChange::QuoteName(event.value()));
                        },
                    }
                } else {
                    strong { "{fields.quote_name}" }
                }
            }
            td { style: "{table_cell_style()} width: 200px;",
                if row.editing {
                    input {
                        style: "width: 100%;",
                        value: "{fields.item_name}",
                        oninput: move |event| {
                            change_field(store, &id_for_item_name, FieldChange::ItemName(event.value()));
                        },
                    }
                } else {
                    "{fields.item_name}"
                }
            }
            td { style: "{table_cell_style()}",
                if row.editing {
                    input {
                        style: "width: 100%;",
                        value: "{fields.supplier.name}",
                        oninput: move |event| {
                            change_field(
                                store,
                                &id_for_supplier,
                                FieldChange::Supplier(Supplier { name: event.value() }),
                            );
                        },
                    }
                } else {
                    "{fields.supplier.name}"
                }
            }
            td { style: "{table_cell_style()}",
                if row.editing {
                    input {
                        r#type: "date",
                        style: "width: 100%;",
                        value: "{quote_date_input}",
                        onchange: move |event| {
                            change_field(
                                store,
                                &id_for_quote_date,
                                FieldChange::QuoteDate(quote_date_from_input(&event.value())),
                            );
                        },
                    }
                } else {
                    "{quote_date_label}"
                }
            }
            td { style: "{table_cell_style()}",
                if row.editing {
                    AmountInput {
                        initial: fields.costing.first_cost,
                        on_commit: move |amount| {
                            let mut costing = costing_for_first_cost.clone();
                            costing.first_cost = amount;
                            change_field(store, &id_for_first_cost, FieldChange::Costing(costing));
                        },
                    }
                } else {
                    "{first_cost_label}"
                }
            }
            td { style: "{table_cell_style()}",
                if row.editing {
                    AmountInput {
                        initial: fields.club_costing.retail_price,
                        on_commit: move |amount| {
                            change_field(
                                store,
                                &id_for_retail_price,
                                FieldChange::ClubCosting(ClubCosting { retail_price: amount }),
                            );
                        },
                    }
                } else {
                    "{retail_price_label}"
                }
            }
            td { style: "{table_cell_style()} text-align: center;",
                if row.editing {
                    input {
                        r#type: "checkbox",
                        checked: fields.committed_flag,
                        onchange: move |event| {
                            let checked = event.value().parse::<bool>().unwrap_or(false);
                            change_field(store, &id_for_committed, FieldChange::CommittedFlag(checked));
                        },
                    }
                } else {
                    span { style: "color: {committed_color};", "{committed_text}" }
                }
            }
            td { style: "{table_cell_style()} white-space: nowrap;",
                if row.editing {
                    button {
                        style: "margin-right: 8px;",
                        onclick: move |_| {
                            let result = match store.write().as_mut() {
                                Some(current) => current.save(&id_for_save),
                                None => return,
                            };
                            match result {
                                Ok(receipt) => status.set(receipt.message()),
                                Err(err) => debug!(error = %err, "ignored save"),
                            }
                        },
                        "Save"
                    }
                    button {
                        style: "color: #d24;",
                        onclick: move |_| {
                            if let Some(current) = store.write().as_mut() {
                                if let Err(err) = current.cancel(&id_for_cancel) {
                                    debug!(error = %err, "ignored cancel");
                                }
                            }
                        },
                        "Cancel"
                    }
                } else {
                    button {
                        onclick: move |_| {
                            if let Some(current) = store.write().as_mut() {
                                if let Err(err) = current.begin_edit(&id_for_edit) {
                                    debug!(error = %err, "ignored edit");
                                }
                            }
                        },
                        "Edit"
                    }
                }
            }
        }
        {detail_row}
    }
}

/// Number input that keeps the typed text locally. Parseable text is
/// committed as it is typed; blank or partial text is committed as zero
/// only when the input loses focus.
#[component]
fn AmountInput(initial: f64, on_commit: EventHandler<f64>) -> Element {
    let mut draft = use_signal(|| initial.to_string());

    rsx! {
        input {
            r#type: "number",
            step: "0.01",
            style: "width: 100%;",
            value: "{draft}",
            oninput: move |event| {
                let text = event.value();
                if let Some(amount) = parse_amount_draft(&text) {
                    on_commit.call(amount);
                }
                draft.set(text);
            },
            onchange: move |event| on_commit.call(parse_amount_input(&event.value())),
        }
    }
}

#[component]
fn MaterialDetail(detail: MaterialDetailView) -> Element {
    rsx! {
        div { style: "border: 1px solid #f0f0f0; border-radius: 8px; padding: 12px;",
            div { style: "font-weight: 600; margin-bottom: 8px;", "Component Material Costing Details" }
            table { style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        th { style: "{table_header_cell_style()}", "Material Description" }
                        th { style: "{table_header_cell_style()}", "Unit Cost ($)" }
                    }
                }
                tbody {
                    for (idx, line) in detail.lines.iter().enumerate() {
                        tr { key: "{idx}",
                            td { style: "{table_cell_style()}", "{line.description}" }
                            td { style: "{table_cell_style()}", "{line.unit_cost}" }
                        }
                    }
                }
            }
            div { style: "margin-top: 16px; text-align: right;",
                strong { "Total Material Cost: {detail.total}" }
            }
        }
    }
}
