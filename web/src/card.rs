use std::cell::RefCell;
use std::rc::Rc;

use bingo_core::{Populate, Session};
use gloo::events::EventListener;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::Element;
use yew::prelude::*;

use crate::analytics::Gtag;
use crate::clues::fetch_clues;
use crate::storage::{BrowserStore, save_session};
use crate::utils::*;

/// Page events after which the card is written to local storage.
const TEARDOWN_EVENTS: [&str; 2] = ["unload", "pagehide"];

pub(crate) enum Msg {
    Toggle { index: usize, offset: f64 },
    Reset,
    CluesLoaded {
        generation: u32,
        result: anyhow::Result<Vec<String>>,
    },
}

#[derive(Properties, Clone, PartialEq)]
struct HeadingProps {
    title: AttrValue,
}

/// One `<span>` per character so each letter can be styled on its own.
#[function_component(Heading)]
fn heading(props: &HeadingProps) -> Html {
    html! {
        <h1>
            { for props.title.chars().map(|ch| html! { <span>{ ch.to_string() }</span> }) }
        </h1>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: usize,
    text: AttrValue,
    marked: bool,
    dauber: Option<f64>,
    callback: Callback<(usize, f64)>,
}

/// Where the click landed, as a fraction of the clicked element's width.
fn click_offset(e: &MouseEvent) -> Option<f64> {
    let target: Element = e.target_dyn_into()?;
    let rect = target.get_bounding_client_rect();
    (rect.width() > 0.0).then(|| (f64::from(e.client_x()) - rect.left()) / rect.width())
}

#[function_component(CellView)]
fn cell_view(props: &CellProps) -> Html {
    let CellProps {
        index,
        text,
        marked,
        dauber,
        callback,
    } = props.clone();

    let class = classes!(marked.then_some("marked"));
    let style = dauber.map(|percent| format!("background-position-x: {percent}%"));

    let onclick = Callback::from(move |e: MouseEvent| {
        let offset = click_offset(&e).unwrap_or(0.5);
        log::trace!("cell {} click at {:.2}", index, offset);
        callback.emit((index, offset));
    });

    html! {
        <div {class} {style} {onclick}>
            <div>{text}</div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CardProps {
    pub title: AttrValue,
    pub clues: AttrValue,
}

pub(crate) struct BingoCard {
    session: Rc<RefCell<Session>>,
    error: Option<String>,
    _teardown: [EventListener; 2],
}

impl BingoCard {
    fn start_load(ctx: &Context<Self>, generation: u32, url: String) {
        log::debug!("loading clues from {} (load {})", url, generation);
        ctx.link().send_future(async move {
            let result = fetch_clues(&url).await;
            Msg::CluesLoaded { generation, result }
        });
    }

    fn listen_for_teardown(session: &Rc<RefCell<Session>>) -> [EventListener; 2] {
        let window = gloo::utils::window();
        TEARDOWN_EVENTS.map(|name| {
            let session = session.clone();
            EventListener::new(&window, name, move |_| save_session(&session))
        })
    }
}

impl Component for BingoCard {
    type Message = Msg;
    type Properties = CardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut session = Session::new(ctx.props().clues.to_string());

        match session.populate(&BrowserStore::local(), utc_now(), &Gtag) {
            Populate::Restored { age_secs } => log::info!("Restored card from {}s ago", age_secs),
            Populate::Load => {
                let generation = session.begin_load();
                Self::start_load(ctx, generation, session.clues().to_string());
            }
        }

        let session = Rc::new(RefCell::new(session));
        let teardown = Self::listen_for_teardown(&session);
        Self {
            session,
            error: None,
            _teardown: teardown,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Toggle { index, offset } => {
                match self.session.borrow_mut().toggle(index, offset, &Gtag) {
                    Ok(marked) => {
                        log::debug!("cell {} marked: {}", index, marked);
                        true
                    }
                    Err(err) => {
                        log::warn!("ignoring click: {}", err);
                        false
                    }
                }
            }
            Reset => {
                let (generation, url) = {
                    let mut session = self.session.borrow_mut();
                    (session.reset(&Gtag), session.clues().to_string())
                };
                Self::start_load(ctx, generation, url);
                self.error.take().is_some()
            }
            CluesLoaded { generation, result } => {
                if generation != self.session.borrow().generation() {
                    log::debug!("ignoring result of superseded load {}", generation);
                    return false;
                }
                let clues = match result {
                    Ok(clues) => clues,
                    Err(err) => {
                        log::error!("Could not load clues: {:#}", err);
                        self.error = Some(format!("Could not load clues: {err}"));
                        return true;
                    }
                };

                let mut rng = SmallRng::seed_from_u64(js_random_seed());
                let applied = self
                    .session
                    .borrow_mut()
                    .apply_clues(generation, clues, &mut rng, &Gtag);
                match applied {
                    Ok(true) => {
                        self.error = None;
                        true
                    }
                    Ok(false) => false,
                    Err(err) => {
                        log::error!("Could not deal a card: {}", err);
                        self.error = Some(err.to_string());
                        true
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = self.session.borrow();
        let callback = ctx
            .link()
            .callback(|(index, offset): (usize, f64)| Msg::Toggle { index, offset });
        let onreset = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Reset
        });

        html! {
            <div class="card">
                <Heading title={ctx.props().title.clone()}/>
                <div class="board">
                    {
                        for session.board().cells().enumerate().map(|(index, cell)| html! {
                            <CellView
                                {index}
                                text={AttrValue::from(cell.text.clone())}
                                marked={cell.marked}
                                dauber={cell.dauber}
                                callback={callback.clone()}
                            />
                        })
                    }
                </div>
                <div class="controls">
                    <button class="reset" onclick={onreset}>{"New card"}</button>
                    if let Some(error) = &self.error {
                        <p class="error">{error.clone()}</p>
                    }
                </div>
            </div>
        }
    }
}
