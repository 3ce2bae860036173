use super::{abbr, table_head};
use crate::model::War;
use crate::state::PanelRegistry;
use crate::util::cell;
use serde_json::Value;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WarsPanelProps {
    pub wars: Vec<War>,
    pub panels: PanelRegistry,
    pub on_toggle: Callback<(String, bool)>,
}

fn unit_table(head: Html, rows: &[Vec<Value>]) -> Html {
    html! {
        <table border="1">
            { head }
            { for rows.iter().map(|row| {
                // First cell is the participant marker, carried as a row class
                // so stylesheets can pick out the player's own forces.
                let class = row.first().map(cell).unwrap_or_default().replace(',', "-");
                html! {
                    <tr class={class}>
                        { for row.iter().skip(1).map(|c| html! { <td>{ cell(c) }</td> }) }
                    </tr>
                }
            }) }
        </table>
    }
}

fn army_head() -> Html {
    table_head(vec![
        html! { "Country" },
        html! { "Infantry" },
        html! { "Cavalry" },
        html! { "Artillery" },
        abbr("Merc infantry", "Inf $$"),
        abbr("Merc cavalry", "Cav $$"),
        abbr("Merc artillery", "Art $$"),
        html! { "Total" },
        html! { "Manpower" },
        abbr("Army professionalism", "Prof"),
        abbr("Army tradition", "Trad"),
    ])
}

fn navy_head() -> Html {
    table_head(vec![
        html! { "Country" },
        html! { "Heavy" },
        html! { "Light" },
        html! { "Galley" },
        html! { "Transport" },
        html! { "Total" },
        html! { "Sailors" },
        abbr("Navy tradition", "Trad"),
    ])
}

/// One collapsible panel per war, keyed so collapsing one survives updates
/// without disturbing the rest.
#[function_component(WarsPanel)]
pub fn wars_panel(props: &WarsPanelProps) -> Html {
    html! {
        <details id="wars">
            <summary>{ format!("Wars: {}", props.wars.len()) }</summary>
            { for props.wars.iter().map(|war| {
                let key = war.key();
                let open = props.panels.is_open(&key);
                let toggle = {
                    let cb = props.on_toggle.clone();
                    let key = key.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        cb.emit((key.clone(), !open));
                    })
                };
                // Sword/shield markers follow any player involvement on
                // either side, not just the monitored country.
                let glyphs = format!(
                    "{}{}",
                    if war.atk { "\u{1f5e1}\u{fe0f}" } else { "" },
                    if war.def { "\u{1f6e1}\u{fe0f}" } else { "" },
                );
                html! {
                    <details key={key.clone()} open={open}>
                        <summary onclick={toggle}>{ format!("{} {}", glyphs, war.name) }</summary>
                        { unit_table(army_head(), &war.armies) }
                        { unit_table(navy_head(), &war.navies) }
                    </details>
                }
            }) }
        </details>
    }
}
