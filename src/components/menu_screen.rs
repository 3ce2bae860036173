use yew::prelude::*;

fn tag_link(dest: &str) -> Html {
    let href = format!("/tag/{}", String::from(js_sys::encode_uri_component(dest)));
    html! { <a href={href}>{ dest.to_string() }</a> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MenuScreenProps {
    pub entries: Vec<(String, String)>,
}

/// Nation-pick screen shown once a save is parsed but no tag is monitored.
#[function_component(MenuScreen)]
pub fn menu_screen(props: &MenuScreenProps) -> Html {
    html! {
        <div id="menu" style="padding:12px 16px;">
            { "Save file parsed. Pick a player nation to monitor, or search for a country:" }
            <ul>
                { for props.entries.iter().map(|(tag, name)| html! {
                    <li>{ tag_link(tag) }{ " - " }{ tag_link(name) }</li>
                }) }
            </ul>
            <form>
                <label>{"Enter tag or name:"}<input name="q" placeholder="SPA" /></label>
                <input type="submit" value="Search" />
            </form>
        </div>
    }
}
