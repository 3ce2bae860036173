use super::province::ProvinceName;
use crate::model::{Cot, CotReport};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CotPanelProps {
    pub report: CotReport,
    pub on_goto: Callback<u32>,
}

fn cot_table(title: &str, cots: &[Cot], on_goto: &Callback<u32>) -> Html {
    if cots.is_empty() {
        return html! {};
    }
    html! {
        <table border="1">
            <tr><th colspan="4">{ format!("{title} CoTs:") }</th></tr>
            { for cots.iter().map(|cot| {
                // An empty noupgrade string means the center can level up now.
                let class = if cot.noupgrade.is_empty() { "highlight" } else { "" };
                html! {
                    <tr class={class}>
                        <td><ProvinceName id={cot.id} name={cot.name.clone()} on_goto={on_goto.clone()} /></td>
                        <td>{ format!("Lvl {}", cot.level) }</td>
                        <td>{ format!("Dev {}", cot.dev) }</td>
                        <td>{ cot.noupgrade.clone() }</td>
                    </tr>
                }
            }) }
        </table>
    }
}

#[function_component(CotPanel)]
pub fn cot_panel(props: &CotPanelProps) -> Html {
    html! {
        <details id="cot">
            <summary>{ format!("Max level CoTs [{}/{}]", props.report.level3, props.report.max) }</summary>
            { cot_table("Upgradeable", &props.report.upgradeable, &props.on_goto) }
            { cot_table("Developable", &props.report.developable, &props.on_goto) }
        </details>
    }
}
