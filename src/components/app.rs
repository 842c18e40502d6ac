use super::controls::Controls;
use super::game::Game;
use crate::config::Settings;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(Settings::default);

    let cloned_settings = settings.clone();
    let onchange = Callback::from(move |next: Settings| cloned_settings.set(next));

    html! {
        <div class="app">
            <h1>{"Memory"}</h1>
            <Controls settings={*settings} onchange={onchange} />
            <Game settings={*settings} />
        </div>
    }
}
