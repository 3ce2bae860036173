use crate::state::RecipeDraft;
use crate::state::recipe::{MACHINES, RESOURCES, Slot};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Input,
    Output,
}

fn resource_select(slot: &Slot, onchange: Callback<Event>) -> Html {
    html! {
        <select onchange={onchange}>
            { for RESOURCES.iter().map(|r| html! {
                <option value={r.id} selected={slot.resource == r.id}>{ r.name }</option>
            }) }
        </select>
    }
}

/// Per-recipe sink/energy calculator in the style of the in-game tooltips.
#[function_component(RecipesView)]
pub fn recipes_view() -> Html {
    let draft = use_state(|| RecipeDraft::for_machine(&MACHINES[0]));

    let select_machine = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let mut next = (*draft).clone();
            next.select_machine(&input.value());
            draft.set(next);
        })
    };

    let set_resource = {
        let draft = draft.clone();
        move |side: Side, i: usize| {
            let draft = draft.clone();
            Callback::from(move |e: Event| {
                let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                    return;
                };
                let mut next = (*draft).clone();
                let slots = match side {
                    Side::Input => &mut next.inputs,
                    Side::Output => &mut next.outputs,
                };
                if let Some(slot) = slots.get_mut(i) {
                    slot.resource = select.value();
                }
                draft.set(next);
            })
        }
    };

    let set_qty = {
        let draft = draft.clone();
        move |side: Side, i: usize| {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                    return;
                };
                let mut next = (*draft).clone();
                let slots = match side {
                    Side::Input => &mut next.inputs,
                    Side::Output => &mut next.outputs,
                };
                if let Some(slot) = slots.get_mut(i) {
                    slot.qty = input.value().parse().unwrap_or(0);
                }
                draft.set(next);
            })
        }
    };

    let input_total = RecipeDraft::totals(&draft.inputs);
    let output_total = RecipeDraft::totals(&draft.outputs);

    html! {
        <div style="padding:12px 16px;">
            <h2>{"Recipe calculator"}</h2>
            <div id="machines" style="display:flex; gap:12px; margin-bottom:8px;">
                { for MACHINES.iter().map(|m| html! {
                    <label style="cursor:pointer;">
                        <input type="radio" name="machine" value={m.id}
                            checked={draft.machine.id == m.id} onchange={select_machine.clone()} />
                        { format!(" {} ({} MW)", m.name, m.cost) }
                    </label>
                }) }
            </div>
            <div id="recipe">
                <table border="1">
                    { for draft.inputs.iter().enumerate().map(|(i, slot)| html! {
                        <tr>
                            <td>{"Input"}</td>
                            <td>
                                { resource_select(slot, set_resource(Side::Input, i)) }
                                <input type="number" value={slot.qty.to_string()}
                                    oninput={set_qty(Side::Input, i)} style="width:60px;" />
                            </td>
                        </tr>
                    }) }
                    <tr><td>{"Total"}</td><td id="input_total">{ input_total.label() }</td></tr>
                    <tr><td colspan="2"></td></tr>
                    { for draft.outputs.iter().enumerate().map(|(i, slot)| html! {
                        <tr>
                            <td>{"Output"}</td>
                            <td>
                                { resource_select(slot, set_resource(Side::Output, i)) }
                                <input type="number" value={slot.qty.to_string()}
                                    oninput={set_qty(Side::Output, i)} style="width:60px;" />
                            </td>
                        </tr>
                    }) }
                    <tr><td>{"Total"}</td><td id="output_total">{ output_total.label() }</td></tr>
                </table>
            </div>
        </div>
    }
}
