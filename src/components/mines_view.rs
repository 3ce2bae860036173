use crate::state::Board;
use crate::util::clog;
use yew::prelude::*;

const WIDTH: usize = 10;
const HEIGHT: usize = 10;
const MINES: usize = 10;

#[function_component(MinesView)]
pub fn mines_view() -> Html {
    let board = use_state(|| Board::generate(WIDTH, HEIGHT, MINES));
    let new_game = {
        let board = board.clone();
        Callback::from(move |_: MouseEvent| board.set(Board::generate(WIDTH, HEIGHT, MINES)))
    };
    html! {
        <div style="padding:12px 16px;">
            <h2>{"Minesweeper"}</h2>
            <div style="display:flex; gap:12px; align-items:center; margin-bottom:8px;">
                <button onclick={new_game}>{"New game"}</button>
                <span style="opacity:0.7;">{ format!("Mines: {}", board.mine_count()) }</span>
            </div>
            <table id="board" style="border-collapse:collapse;">
                { for (0..board.height).map(|y| html! {
                    <tr>
                        { for (0..board.width).map(|x| {
                            let mined = board.is_mine(x, y);
                            let clicked = Callback::from(move |_: MouseEvent| {
                                clog(&format!("Clicked {x} {y}"));
                                if mined {
                                    clog("mine hit");
                                }
                            });
                            html! {
                                <td style="padding:0;">
                                    <button onclick={clicked} style="width:26px; height:26px;"></button>
                                </td>
                            }
                        }) }
                    </tr>
                }) }
            </table>
        </div>
    }
}
