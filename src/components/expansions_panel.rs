use super::province::ProvinceName;
use super::table_head_text;
use crate::model::Highlight;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ExpansionsPanelProps {
    pub highlight: Highlight,
    pub on_goto: Callback<u32>,
}

/// Provinces that could be developed to fit the highlighted building, or a
/// hint when no building is picked.
#[function_component(ExpansionsPanel)]
pub fn expansions_panel(props: &ExpansionsPanelProps) -> Html {
    let h = &props.highlight;
    if h.id.is_none() {
        return html! {
            <details id="expansions">
                <summary>{"Building expansions"}</summary>
                <p>{"To search for provinces that could be developed to build something, choose a building in the top right options."}</p>
            </details>
        };
    }
    html! {
        <details id="expansions">
            <summary>{ format!("Building expansions: {}", h.name) }</summary>
            <p>{ format!("If developed, these places could support a new {}:", h.name) }</p>
            <table border="1">
                { table_head_text("Province Buildings Devel") }
                { for h.provinces.iter().map(|prov| html! {
                    <tr>
                        <td><ProvinceName id={prov.id} name={prov.name.clone()} on_goto={props.on_goto.clone()} /></td>
                        <td>{ format!("{}/{}", prov.buildings, prov.maxbuildings) }</td>
                        <td>{ prov.dev }</td>
                    </tr>
                }) }
            </table>
        </details>
    }
}
