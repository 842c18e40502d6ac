use crate::config::{Difficulty, GridSize, Settings};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew::TargetCast;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub settings: Settings,
    pub onchange: Callback<Settings>,
}

fn selected_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}

#[function_component(Controls)]
pub fn controls(props: &Props) -> Html {
    let settings = props.settings;

    let onchange = props.onchange.clone();
    let on_grid_size = Callback::from(move |event: Event| {
        match selected_value(&event).parse::<GridSize>() {
            Ok(grid_size) => onchange.emit(Settings {
                grid_size,
                ..settings
            }),
            Err(err) => log::warn!("ignoring grid size: {}", err),
        }
    });

    let onchange = props.onchange.clone();
    let on_difficulty = Callback::from(move |event: Event| {
        match selected_value(&event).parse::<Difficulty>() {
            Ok(difficulty) => onchange.emit(Settings {
                difficulty,
                ..settings
            }),
            Err(err) => log::warn!("ignoring difficulty: {}", err),
        }
    });

    let grid_sizes = GridSize::all().map(|size| {
        html! {
            <option value={size.get().to_string()} selected={size == settings.grid_size}>
                {format!("{0}×{0}", size.get())}
            </option>
        }
    });
    let difficulties = Difficulty::ALL.into_iter().map(|difficulty| {
        html! {
            <option value={difficulty.name()} selected={difficulty == settings.difficulty}>
                {difficulty.name()}
            </option>
        }
    });

    html! {
        <div class="controls">
            <label>
                {"Grid "}
                <select onchange={on_grid_size}>{for grid_sizes}</select>
            </label>
            <label>
                {"Difficulty "}
                <select onchange={on_difficulty}>{for difficulties}</select>
            </label>
        </div>
    }
}
