use super::board::Board;
use crate::config::Settings;
use crate::game::{self, format_time, GameAction, GameEvent, Phase, Sound, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn raf_loop(mut func: impl FnMut() + 'static) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    let request_animation_frame = |window: &web_sys::Window, f: &Closure<dyn FnMut()>| {
        if let Err(err) = window.request_animation_frame(f.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
    };

    let Some(window) = web_sys::window() else {
        log::error!("no window, game clock not started");
        return;
    };
    let cloned_window = window.clone();
    *f.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        func();
        if let Some(closure) = g.borrow().as_ref() {
            request_animation_frame(&cloned_window, closure);
        }
    }) as Box<dyn FnMut()>));
    if let Some(closure) = f.borrow().as_ref() {
        request_animation_frame(&window, closure);
    };
}

struct Audio {
    context: Rc<web_sys::AudioContext>,
    buf: web_sys::AudioBuffer,
}

impl Audio {
    fn new(context: Rc<web_sys::AudioContext>, buf: web_sys::AudioBuffer) -> Self {
        Audio { context, buf }
    }

    fn play(&self) -> Result<(), JsValue> {
        let node = self.context.create_buffer_source()?;
        node.set_buffer(Some(&self.buf));
        node.connect_with_audio_node(&self.context.destination())?;
        node.start()
    }
}

struct LazyAudio {
    context: Rc<web_sys::AudioContext>,
    src: String,
    audio: RefCell<Option<Audio>>,
}

async fn resolve_promise<T: From<JsValue>>(promise: js_sys::Promise) -> Result<T, JsValue> {
    Ok(wasm_bindgen_futures::JsFuture::from(promise).await?.into())
}

impl LazyAudio {
    fn new(src: &str, context: Rc<web_sys::AudioContext>) -> LazyAudio {
        LazyAudio {
            context,
            src: src.to_string(),
            audio: RefCell::new(None),
        }
    }

    async fn load(&self) -> Result<(), JsValue> {
        if self.audio.borrow().is_some() {
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let res: web_sys::Response = resolve_promise(window.fetch_with_str(&self.src)).await?;
        let array_buffer: js_sys::ArrayBuffer = resolve_promise(res.array_buffer()?).await?;
        let buffer: web_sys::AudioBuffer =
            resolve_promise(self.context.decode_audio_data(&array_buffer)?).await?;
        *self.audio.borrow_mut() = Some(Audio::new(self.context.clone(), buffer));
        Ok(())
    }

    /// Silent until loaded.
    fn play(&self) -> Result<(), JsValue> {
        match self.audio.borrow().as_ref() {
            Some(audio) => audio.play(),
            None => Ok(()),
        }
    }
}

struct SoundBank {
    context: Rc<web_sys::AudioContext>,
    sounds: Vec<(Sound, LazyAudio)>,
}

impl SoundBank {
    fn new() -> Option<Self> {
        let context = match web_sys::AudioContext::new() {
            Ok(context) => Rc::new(context),
            Err(err) => {
                log::warn!("audio disabled: {:?}", err);
                return None;
            }
        };
        let sounds = Sound::ALL
            .into_iter()
            .map(|sound| (sound, LazyAudio::new(&sound.src(), context.clone())))
            .collect();
        Some(SoundBank { context, sounds })
    }

    async fn load(&self) {
        for (sound, audio) in &self.sounds {
            if let Err(err) = audio.load().await {
                log::warn!("could not load {:?} sound: {:?}", sound, err);
            }
        }
    }

    fn play(&self, sound: Sound) {
        // A context created before the first user gesture starts suspended.
        if let Err(err) = self.context.resume() {
            log::warn!("could not resume audio: {:?}", err);
        }
        let audio = self.sounds.iter().find(|(candidate, _)| *candidate == sound);
        if let Some((_, audio)) = audio {
            if let Err(err) = audio.play() {
                log::warn!("could not play {:?} sound: {:?}", sound, err);
            }
        }
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub settings: Settings,
}

#[function_component(Game)]
pub fn game_component(props: &Props) -> Html {
    let Props { settings } = props.clone();

    let game = use_reducer(game::Game::from_entropy);
    let sounds = use_ref(SoundBank::new);

    let cloned_sounds = sounds.clone();
    use_effect_with_deps(
        move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(bank) = &*cloned_sounds {
                    bank.load().await;
                }
            });
            || ()
        },
        (),
    );

    let cloned_game = game.clone();
    use_effect_with_deps(
        move |_| {
            raf_loop(move || cloned_game.dispatch(GameAction::Tick(js_sys::Date::now())));
            || ()
        },
        (),
    );

    let cloned_game = game.clone();
    use_effect_with_deps(
        move |settings| {
            cloned_game.dispatch(GameAction::NewGame(*settings));
            || ()
        },
        settings,
    );

    for event in game.events() {
        match event {
            GameEvent::Sound(sound) => {
                if let Some(bank) = &*sounds {
                    bank.play(sound);
                }
            }
            GameEvent::Completed(summary) => log::info!(
                "finished with {} pairs in {} after {} flips",
                summary.score,
                format_time(summary.elapsed_seconds),
                summary.flip_count
            ),
            GameEvent::TileChanged { .. } | GameEvent::CountersChanged(_) => {}
        }
    }

    let cloned_game = game.clone();
    let onselect = Callback::from(move |index: usize| {
        cloned_game.dispatch(GameAction::Select {
            index,
            now: js_sys::Date::now(),
        })
    });

    let cloned_game = game.clone();
    let onrestart = Callback::from(move |_: MouseEvent| cloned_game.dispatch(GameAction::Restart));

    let session = &game.session;
    let counters = session.counters();
    let summary = session.summary();
    let board = session.board();
    let mismatch = matches!(
        session.phase(),
        Phase::Resolving {
            stage: Stage::FlippingBack,
            ..
        }
    );

    let rejected = match &game.rejected {
        Some(message) => html! { <p class="error">{message.clone()}</p> },
        None => html! {},
    };

    html! {
        <div class="game">
            <div class="stats">
                <span>{"Score: "}<strong>{counters.score.to_string()}</strong></span>
                <span>{"Flips: "}<strong>{counters.flip_count.to_string()}</strong></span>
                <span>{"Time: "}<strong>{format_time(counters.elapsed_seconds)}</strong></span>
                <button class="reset" onclick={onrestart.clone()}>{"Reset"}</button>
            </div>
            {rejected}
            <Board
                tiles={board.tiles().to_vec()}
                grid_size={board.grid_size()}
                locked={session.is_locked()}
                mismatch={mismatch}
                onselect={onselect} />
            if session.is_complete() {
                <div class="game-over">
                    <h2>{"All pairs found!"}</h2>
                    <p>{format!("Score: {}", summary.score)}</p>
                    <p>{format!("Time: {}", format_time(summary.elapsed_seconds))}</p>
                    <p>{format!("Flips: {}", summary.flip_count)}</p>
                    <button onclick={onrestart}>{"Play again"}</button>
                </div>
            }
        </div>
    }
}
