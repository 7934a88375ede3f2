use yew::{html, Component, Context, Html, Properties};

pub const PLAYGROUND_LABEL: &str = "游戏界面";

#[derive(Clone, Debug, PartialEq)]
pub struct Playground {
    visible: bool,
}

impl Playground {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct PlaygroundViewProps {
    pub visible: bool,
}

pub struct PlaygroundView;

impl Component for PlaygroundView {
    type Message = ();
    type Properties = PlaygroundViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let display = if ctx.props().visible { "block" } else { "none" };
        html! {
            <div class={"ac-game-playground"} style={format!("display: {}", display)}>
                {PLAYGROUND_LABEL}
            </div>
        }
    }
}
