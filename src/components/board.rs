use super::cell::Cell;
use crate::config::tile_size;
use crate::game::Tile;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub tiles: Vec<Tile>,
    pub grid_size: usize,
    pub locked: bool,
    pub mismatch: bool,
    pub onselect: Callback<usize>,
}

#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let Props {
        tiles,
        grid_size,
        locked,
        mismatch,
        onselect,
    } = props;
    let size = tile_size(*grid_size);
    let style = format!(
        "grid-template-columns: repeat({0}, {1}px); grid-template-rows: repeat({0}, {1}px);",
        grid_size, size
    );

    let cells = tiles.iter().map(|tile| {
        html! {
            <Cell key={tile.index.to_string()} tile={tile.clone()} onselect={onselect.clone()} />
        }
    });

    let class = classes!(
        "grid",
        locked.then_some("locked"),
        mismatch.then_some("mismatch")
    );

    html! {
        <div class={class} style={style}>
            {for cells}
        </div>
    }
}
