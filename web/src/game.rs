use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use memorize_core as game;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(&self) -> bool;
}

impl<E> HasUpdate for Result<game::Step, E> {
    fn has_update(&self) -> bool {
        self.as_ref().map_or(false, |step| step.has_update())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    Play,
    CardClick(game::CardIndex),
    TimerElapsed(game::TimerToken),
}

impl Msg {
    fn to_event(self) -> game::GameEvent {
        match self {
            Msg::Play => game::GameEvent::Play,
            Msg::CardClick(index) => game::GameEvent::Guess(index),
            Msg::TimerElapsed(token) => game::GameEvent::TimerElapsed(token),
        }
    }
}

const fn glyph_text(glyph: game::CardGlyph) -> &'static str {
    use game::CardGlyph::*;
    match glyph {
        Check => "\u{2714}",
        Cross | Camouflaged => "\u{2716}",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    card: game::CardView,
    #[prop_or_default]
    clickable: bool,
    callback: Callback<game::CardIndex>,
}

#[function_component(CardCell)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        card,
        clickable,
        callback,
    } = props.clone();

    let class = classes!(
        "card",
        clickable.then_some("clickable"),
        match card.glyph {
            game::CardGlyph::Check => Some("correct"),
            game::CardGlyph::Cross => Some("incorrect"),
            game::CardGlyph::Camouflaged => None,
        }
    );
    let style = format!("background-color: {}", card.fill);
    let glyph_style = format!("color: {}", card.glyph_color());

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", card.index);
        callback.emit(card.index);
    });

    html! {
        <td {class} {style} {onclick}>
            <span class="glyph" style={glyph_style}>{glyph_text(card.glyph)}</span>
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How long the colors stay visible, in milliseconds
    #[arg(long, default_value_t = game::Timings::DEFAULT_MEMORIZE_MS)]
    pub memorize_ms: u32,

    /// How long the verdict stays visible, in milliseconds
    #[arg(long, default_value_t = game::Timings::DEFAULT_RESULT_MS)]
    pub result_ms: u32,
}

impl GameProps {
    pub fn timings(&self) -> game::Timings {
        game::Timings {
            memorize_ms: self.memorize_ms,
            result_ms: self.result_ms,
        }
    }
}

impl Default for GameProps {
    fn default() -> Self {
        let timings = game::Timings::default();
        Self {
            seed: None,
            memorize_ms: timings.memorize_ms,
            result_ms: timings.result_ms,
        }
    }
}

pub struct GameView {
    game: game::MemoryGame<SmallRng>,
    timeout: Option<Timeout>,
}

impl GameView {
    fn arm_timer(&mut self, ctx: &Context<Self>, schedule: game::Schedule) {
        let link = ctx.link().clone();
        let game::Schedule { token, delay_ms } = schedule;
        log::trace!("arming timer {:?} for {}ms", token, delay_ms);
        // replacing the previous timeout drops and thereby cancels it
        self.timeout = Some(Timeout::new(delay_ms, move || {
            link.send_message(Msg::TimerElapsed(token))
        }));
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        Self {
            game: game::MemoryGame::new(SmallRng::seed_from_u64(seed), props.timings()),
            timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let event = msg.to_event();
        let result = self.game.handle(event);

        match result {
            Ok(game::Step::Scheduled(schedule)) => self.arm_timer(ctx, schedule),
            Ok(_) => {}
            Err(err) => log::trace!("ignored {:?}: {}", event, err),
        }
        if self.game.pending_timer().is_none() {
            self.timeout = None;
        }

        result.has_update()
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.game.cancel_pending();
        self.timeout.take();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let board = self.game.board();
        let cards_clickable = board.cards_clickable;

        let cb_play = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Play
        });
        let cb_card = ctx.link().callback(Msg::CardClick);

        html! {
            <div class="memorize">
                <nav>
                    <h1>{"Memorize-It"}</h1>
                    <button class="play" onclick={cb_play} disabled={!board.play_enabled}>{"Play"}</button>
                </nav>
                <p class="status">{board.status}</p>
                <section>
                    <table class={cards_clickable.then_some("guessing")}>
                        {
                            for board.rows().map(|row| html! {
                                <tr>
                                    {
                                        for row.iter().map(|&card| {
                                            let callback = cb_card.clone();
                                            html! {
                                                <CardCell {card} clickable={cards_clickable} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </table>
                    if let Some(color) = board.swatch {
                        <aside class="swatch" style={format!("background-color: {}", color)}/>
                    }
                </section>
            </div>
        }
    }
}
