use super::cot_panel::CotPanel;
use super::expansions_panel::ExpansionsPanel;
use super::favors_panel::FavorsPanel;
use super::highlight_panel::HighlightPanel;
use super::menu_screen::MenuScreen;
use super::monuments_panel::MonumentsPanel;
use super::wars_panel::WarsPanel;
use crate::model::{Command, DashAction, Dashboard, Screen};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MonitorViewProps {
    pub dashboard: UseReducerHandle<Dashboard>,
    pub on_command: Callback<Command>,
}

/// The savefile dashboard. Renders whichever screen the retained state calls
/// for; on the report screen each section appears once its data has arrived.
#[function_component(MonitorView)]
pub fn monitor_view(props: &MonitorViewProps) -> Html {
    let dash = &*props.dashboard;
    let parsing_note = if dash.parsing {
        html! { <div id="now_parsing" style="padding:4px 16px; opacity:0.7;">{"Parsing savefile..."}</div> }
    } else {
        html! {}
    };
    match dash.screen() {
        Screen::Error(msg) => html! {
            <div id="error" style="margin:16px; padding:12px; border:1px solid #f85149; border-radius:8px; color:#f85149;">{ msg }</div>
        },
        Screen::Menu(entries) => html! {
            <>
                { parsing_note }
                <MenuScreen entries={entries.to_vec()} />
            </>
        },
        Screen::Report => {
            let on_goto = {
                let on_command = props.on_command.clone();
                let tag = dash.tag.clone().unwrap_or_default();
                Callback::from(move |province: u32| {
                    on_command.emit(Command::Goto {
                        tag: tag.clone(),
                        province,
                    })
                })
            };
            let on_toggle = {
                let dashboard = props.dashboard.clone();
                Callback::from(move |(key, open): (String, bool)| {
                    dashboard.dispatch(DashAction::ToggleWar { key, open })
                })
            };
            let on_pick = {
                let on_command = props.on_command.clone();
                Callback::from(move |building: String| {
                    on_command.emit(Command::Highlight { building })
                })
            };
            html! {
                <main style="padding:12px 16px; max-width:960px;">
                    { parsing_note }
                    { if let Some(player) = &dash.player {
                        html! { <h1 id="player">{ player.clone() }</h1> }
                    } else { html! {} } }
                    { if let Some(report) = &dash.cot {
                        html! { <CotPanel report={report.clone()} on_goto={on_goto.clone()} /> }
                    } else { html! {} } }
                    { if let Some(monuments) = &dash.monuments {
                        html! { <MonumentsPanel monuments={monuments.clone()} on_goto={on_goto.clone()} /> }
                    } else { html! {} } }
                    { if let Some(favors) = &dash.favors {
                        html! { <FavorsPanel favors={favors.clone()} /> }
                    } else { html! {} } }
                    { if let Some(wars) = &dash.wars {
                        html! { <WarsPanel wars={wars.clone()} panels={dash.panels.clone()} on_toggle={on_toggle} /> }
                    } else { html! {} } }
                    { if let Some(highlight) = &dash.highlight {
                        html! { <ExpansionsPanel highlight={highlight.clone()} on_goto={on_goto.clone()} /> }
                    } else { html! {} } }
                    { if let Some(buildings) = &dash.buildings_available {
                        html! { <HighlightPanel
                            buildings={buildings.clone()}
                            selected={dash.highlight.as_ref().and_then(|h| h.id.clone())}
                            on_pick={on_pick} /> }
                    } else { html! {} } }
                </main>
            }
        }
    }
}
