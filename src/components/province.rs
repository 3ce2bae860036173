use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProvinceNameProps {
    pub id: u32,
    pub name: String,
    pub on_goto: Callback<u32>,
}

/// Province cell: the name plus a goto control that asks the game client to
/// jump to the province.
#[function_component(ProvinceName)]
pub fn province_name(props: &ProvinceNameProps) -> Html {
    let goto = {
        let cb = props.on_goto.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    html! {
        <div class="province">
            { props.name.clone() }
            <span class="goto-province" title={format!("Go to #{}", props.id)} onclick={goto}
                style="cursor:pointer; margin-left:6px; color:#58a6ff;">{"\u{2933}"}</span>
        </div>
    }
}
