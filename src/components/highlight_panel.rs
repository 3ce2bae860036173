use crate::model::Building;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HighlightPanelProps {
    pub buildings: BTreeMap<String, Building>,
    /// Id of the currently highlighted building, if any.
    pub selected: Option<String>,
    pub on_pick: Callback<String>,
}

/// Building picker pinned to the top corner; picking the active building
/// again clears the highlight.
#[function_component(HighlightPanel)]
pub fn highlight_panel(props: &HighlightPanelProps) -> Html {
    html! {
        <div id="options" style="position:fixed; top:56px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; max-width:260px;">
            <details id="highlight">
                <summary>{"Building highlight"}</summary>
                <p>{"Need more of a building? Choose one to highlight places that could be expanded to build it."}</p>
                <ul style="list-style:none; margin:0; padding:0;">
                    { for props.buildings.values().map(|b| {
                        let picked = props.selected.as_deref() == Some(b.id.as_str());
                        let pick = {
                            let cb = props.on_pick.clone();
                            let next = if picked { "none".to_string() } else { b.id.clone() };
                            Callback::from(move |_: MouseEvent| cb.emit(next.clone()))
                        };
                        let class = if picked { "pickbuilding highlight" } else { "pickbuilding" };
                        html! {
                            <li class={class} onclick={pick} style="cursor:pointer; padding:2px 0;">
                                { format!("{} ({})", b.name, b.cost) }
                            </li>
                        }
                    }) }
                </ul>
            </details>
        </div>
    }
}
