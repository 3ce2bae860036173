mod components;
mod model;
mod state;
mod sync;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
