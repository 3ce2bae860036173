pub mod app;
pub mod cot_panel;
pub mod expansions_panel;
pub mod favors_panel;
pub mod highlight_panel;
pub mod menu_screen;
pub mod mines_view;
pub mod monitor_view;
pub mod monuments_panel;
pub mod province;
pub mod recipes_view;
pub mod wars_panel;

use yew::prelude::*;

/// `<tr>` of `<th>` cells.
pub(crate) fn table_head(cells: Vec<Html>) -> Html {
    html! { <tr>{ for cells.into_iter().map(|c| html! { <th>{ c }</th> }) }</tr> }
}

/// Header row from space-separated labels.
pub(crate) fn table_head_text(labels: &str) -> Html {
    table_head(
        labels
            .split_whitespace()
            .map(|l| html! { <>{ l.to_string() }</> })
            .collect(),
    )
}

pub(crate) fn abbr(title: &str, text: &str) -> Html {
    html! { <abbr title={title.to_string()}>{ text.to_string() }</abbr> }
}
