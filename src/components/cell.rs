use crate::game::{Tile, TileState};
use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub tile: Tile,
    pub onselect: Callback<usize>,
}

#[function_component(Cell)]
pub fn cell(props: &Props) -> Html {
    let Props { tile, onselect } = props.clone();
    let Tile {
        index,
        label,
        state,
    } = tile;

    let onclick = Callback::from(move |_: MouseEvent| onselect.emit(index));
    let flipped = (state != TileState::Hidden).then_some("flipped");
    let matched = (state == TileState::Matched).then_some("matched");

    html! {
        <div class={classes!("card", flipped, matched)} onclick={onclick}>
            <div class="card-inner">
                <div class="card-face card-front"></div>
                <div class="card-face card-back">{label}</div>
            </div>
        </div>
    }
}
