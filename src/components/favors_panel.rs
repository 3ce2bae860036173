use super::table_head_text;
use crate::model::{CappedValue, Favors, compare_capped};
use crate::util::fmt3;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FavorsPanelProps {
    pub favors: Favors,
}

fn capped_cell(value: f64, cap: Option<f64>) -> Html {
    match compare_capped(value, cap) {
        CappedValue::Plain(v) => html! { <td>{ fmt3(v) }</td> },
        CappedValue::Capped { shown, uncapped } => html! {
            <td><abbr title={format!("{} before cap", fmt3(uncapped))}>{ fmt3(shown) }</abbr></td>
        },
    }
}

#[function_component(FavorsPanel)]
pub fn favors_panel(props: &FavorsPanelProps) -> Html {
    let favors = &props.favors;
    let s = favors.summary();
    html! {
        <details id="favors">
            <summary>{ format!("Favors [{}/3 available, {}/{} owe ten]", s.free, s.owing_ten, s.total) }</summary>
            <table border="1">
                { for favors.cooldowns.iter().map(|cd| {
                    let class = if cd.get(1).is_some_and(|v| v == "---") { "highlight" } else { "" };
                    html! {
                        <tr class={class}>
                            { for cd.iter().skip(1).map(|c| html! { <td>{ c.clone() }</td> }) }
                        </tr>
                    }
                }) }
            </table>
            <table border="1">
                { table_head_text("Country Favors Ducats Manpower Sailors") }
                { for favors.owed_sorted().into_iter().map(|(country, vals)| {
                    let class = if vals.first().copied().unwrap_or(0.0) >= 10.0 { "highlight" } else { "" };
                    html! {
                        <tr class={class}>
                            <td>{ country.clone() }</td>
                            { for vals.iter().enumerate().map(|(i, v)| capped_cell(*v, favors.cap_for(i))) }
                        </tr>
                    }
                }) }
            </table>
        </details>
    }
}
