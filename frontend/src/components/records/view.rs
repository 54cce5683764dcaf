//! View rendering for the record manager screen.
//!
//! Top to bottom: the action bar, the add/edit form (only while open), the
//! table with its filter row, and the notification modal. User-facing text is
//! Persian and the page is laid out right-to-left.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::grid::{cell, Column, GridView, SortDirection};
use common::manager::{Msg as ManagerMsg, RecordManager};
use common::model::record::{DraftField, Record, RecordId};

use crate::components::notification::NotificationModal;

use super::messages::Msg;
use super::state::RecordsComponent;

pub fn view(component: &RecordsComponent, ctx: &Context<RecordsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="records-root" dir="rtl">
            { build_action_bar(link) }
            { build_form(&component.manager, link) }
            { build_table(component, link) }
            { build_notification(&component.manager, link) }
        </div>
    }
}

fn build_action_bar(link: &Scope<RecordsComponent>) -> Html {
    html! {
        <div class="action-bar">
            { action_button("سطر جدید", "btn-success", link.callback(|_| Msg::Manager(ManagerMsg::BeginCreate))) }
            { action_button("ویرایش", "btn-warning", link.callback(|_| Msg::Manager(ManagerMsg::BeginEdit))) }
            { action_button("حذف", "btn-danger", link.callback(|_| Msg::Manager(ManagerMsg::Delete))) }
        </div>
    }
}

fn action_button(label: &'static str, class: &'static str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button type="button" class={classes!("btn", class)} {onclick}>{ label }</button>
    }
}

fn column_label(column: Column) -> &'static str {
    match column {
        Column::Title => "عنوان",
        Column::Author => "مدرس",
        Column::StudentNumber => "تعداد دانش آموز",
    }
}

fn placeholder(field: DraftField) -> &'static str {
    match field {
        DraftField::Title => "عنوان",
        DraftField::Author => "مدرس",
        DraftField::StudentNumber => "تعداد دانشجو",
    }
}

/// Form with one input per draft field. Rendered only while the form is open;
/// the submit label follows the form mode.
fn build_form(manager: &RecordManager, link: &Scope<RecordsComponent>) -> Html {
    let Some(label) = manager.form.submit_label() else {
        return html! {};
    };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Manager(ManagerMsg::Submit)
    });

    html! {
        <form class="record-form" {onsubmit}>
            { for DraftField::ALL.iter().map(|&field| draft_input(manager, link, field)) }
            <button type="submit" class="btn btn-primary">{ label }</button>
        </form>
    }
}

fn draft_input(manager: &RecordManager, link: &Scope<RecordsComponent>, field: DraftField) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Manager(ManagerMsg::EditDraft(field, input.value()))
    });

    html! {
        <input
            type="text"
            placeholder={placeholder(field)}
            value={manager.draft.get(field).to_string()}
            {oninput}
        />
    }
}

fn build_table(component: &RecordsComponent, link: &Scope<RecordsComponent>) -> Html {
    let rows = component.grid.rows(&component.manager.records);

    html! {
        <table class="records-table">
            <thead>
                <tr>
                    <th style="width:60px;">{ "ردیف" }</th>
                    { for Column::ALL.iter().map(|&column| header_cell(&component.grid, link, column)) }
                </tr>
                <tr class="filter-row">
                    <th></th>
                    { for Column::ALL.iter().map(|&column| filter_cell(&component.grid, link, column)) }
                </tr>
            </thead>
            <tbody>
                { for rows.into_iter().enumerate().map(|(index, record)| body_row(&component.manager, link, index, record)) }
            </tbody>
        </table>
    }
}

fn header_cell(grid: &GridView, link: &Scope<RecordsComponent>, column: Column) -> Html {
    if !GridView::is_sortable(column) {
        return html! { <th>{ column_label(column) }</th> };
    }

    let arrow = match grid.sort_direction(column) {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    };
    let onclick = link.callback(move |_| Msg::ToggleSort(column));

    html! {
        <th class="sortable" {onclick}>{ column_label(column) }{ arrow }</th>
    }
}

fn filter_cell(grid: &GridView, link: &Scope<RecordsComponent>, column: Column) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetFilter(column, input.value())
    });

    html! {
        <th>
            <input type="text" value={grid.filter(column).to_string()} {oninput} />
        </th>
    }
}

/// Keeps the selection checkbox out of hit testing, so a click on it lands on
/// the row. A disabled input would swallow the click in some browsers.
const SELECTION_MARK_STYLE: &str = "pointer-events:none;";

fn row_key(index: usize, id: Option<&RecordId>) -> String {
    match id {
        Some(RecordId::Number(n)) => format!("n:{}", n),
        Some(RecordId::Text(s)) => format!("s:{}", s),
        None => format!("row:{}", index),
    }
}

/// One table row. Clicking anywhere on it toggles its selection; the leading
/// checkbox only mirrors the selection. A row without an id has no click
/// handler and is never selected.
fn body_row(
    manager: &RecordManager,
    link: &Scope<RecordsComponent>,
    index: usize,
    record: &Record,
) -> Html {
    let selected = record.id.as_ref().is_some_and(|id| manager.is_selected(id));
    let onclick = record.id.clone().map(|id| {
        link.callback(move |_: MouseEvent| Msg::Manager(ManagerMsg::ToggleSelect(id.clone())))
    });

    html! {
        <tr key={row_key(index, record.id.as_ref())} class={classes!(selected.then_some("selected"))} {onclick}>
            <td><input type="checkbox" checked={selected} tabindex="-1" style={SELECTION_MARK_STYLE} /></td>
            { for Column::ALL.iter().map(|&column| html! { <td>{ cell(record, column).to_string() }</td> }) }
        </tr>
    }
}

fn build_notification(manager: &RecordManager, link: &Scope<RecordsComponent>) -> Html {
    match manager.notification {
        Some(notification) => html! {
            <NotificationModal
                message={notification.message()}
                on_dismiss={link.callback(|_| Msg::Manager(ManagerMsg::DismissNotification))}
            />
        },
        None => html! {},
    }
}
