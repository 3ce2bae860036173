use super::mines_view::MinesView;
use super::monitor_view::MonitorView;
use super::recipes_view::RecipesView;
use crate::model::{Command, DashAction, Dashboard};
use crate::sync::WsSync;
use crate::util::clog;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum View {
    Monitor,
    Mines,
    Recipes,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Monitor);
    let dashboard = use_reducer(Dashboard::default);
    let ws = use_mut_ref(|| None::<WsSync>);

    // Open the sync socket once; dropping the handle on unmount closes it.
    {
        let dashboard = dashboard.clone();
        let ws = ws.clone();
        use_effect_with((), move |_| {
            let on_update = {
                let dashboard = dashboard.clone();
                Callback::from(move |update| dashboard.dispatch(DashAction::Apply(update)))
            };
            match WsSync::url_from_location() {
                Some(url) => match WsSync::connect(&url, on_update) {
                    Ok(conn) => *ws.borrow_mut() = Some(conn),
                    Err(err) => clog(&format!("ws_sync: connect failed: {err:?}")),
                },
                None => clog("ws_sync: no window location"),
            }
            let ws = ws.clone();
            move || drop(ws.borrow_mut().take())
        });
    }

    let on_command = {
        let ws = ws.clone();
        Callback::from(move |cmd: Command| {
            if let Some(conn) = ws.borrow().as_ref() {
                conn.send(&cmd);
            }
        })
    };

    let tab = |target: View, label: &'static str| {
        let view = view.clone();
        let active = *view == target;
        let onclick = Callback::from(move |_: MouseEvent| view.set(target));
        html! {
            <button onclick={onclick}
                style={if active { "font-weight:600; border-bottom:2px solid #58a6ff;" } else { "" }}>
                { label }
            </button>
        }
    };

    html! {
        <div id="root">
            <nav id="top-bar" style="display:flex; gap:8px; padding:8px 16px; border-bottom:1px solid #30363d;">
                { tab(View::Monitor, "Savefile monitor") }
                { tab(View::Mines, "Minesweeper") }
                { tab(View::Recipes, "Recipes") }
            </nav>
            {
                match *view {
                    View::Monitor => html! { <MonitorView dashboard={dashboard.clone()} on_command={on_command.clone()} /> },
                    View::Mines => html! { <MinesView /> },
                    View::Recipes => html! { <RecipesView /> },
                }
            }
        </div>
    }
}
