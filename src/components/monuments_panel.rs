use super::province::ProvinceName;
use super::table_head_text;
use crate::model::Monument;
use crate::util::cell;
use serde_json::Value;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MonumentsPanelProps {
    pub monuments: Vec<Monument>,
    pub on_goto: Callback<u32>,
}

#[function_component(MonumentsPanel)]
pub fn monuments_panel(props: &MonumentsPanelProps) -> Html {
    html! {
        <details id="monuments">
            <summary>{ format!("Monuments [{}]", props.monuments.len()) }</summary>
            <table border="1">
                { table_head_text("Province Tier Project Upgrading") }
                { for props.monuments.iter().map(|m| {
                    let id = m.get(1).and_then(Value::as_u64).unwrap_or(0) as u32;
                    let name = m.get(3).map(cell).unwrap_or_default();
                    html! {
                        <tr>
                            <td><ProvinceName id={id} name={name} on_goto={props.on_goto.clone()} /></td>
                            <td>{ m.get(2).map(cell).unwrap_or_default() }</td>
                            <td>{ m.get(4).map(cell).unwrap_or_default() }</td>
                            <td>{ m.get(5).map(cell).unwrap_or_default() }</td>
                        </tr>
                    }
                }) }
            </table>
        </details>
    }
}
