use crate::capability::{Logout, LOGOUT_METHOD};
use crate::error::ShellError;
use crate::playground::Playground;

use std::fmt;

use strum::{EnumIter, EnumString, IntoEnumIterator};
use yew::{classes, html, Callback, Component, Context, Html, Properties};

#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq)]
pub enum MenuEntry {
    Single,
    Multi,
    Settings,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl MenuEntry {
    pub const fn class(&self) -> &'static str {
        match self {
            MenuEntry::Single => "ac-game-menu-field-item-single",
            MenuEntry::Multi => "ac-game-menu-field-item-multi",
            MenuEntry::Settings => "ac-game-menu-field-item-settings",
        }
    }

    /// Misspelled class that existing page stylesheets and scripts select on.
    pub const fn legacy_class(&self) -> &'static str {
        match self {
            MenuEntry::Single => "ac-game-menu-filed-item-single",
            MenuEntry::Multi => "ac-game-menu-filed-item-multi",
            MenuEntry::Settings => "ac-game-menu-filed-item-settings",
        }
    }

    pub const fn label(&self, settings: SettingsEntry) -> &'static str {
        match self {
            MenuEntry::Single => "单人模式",
            MenuEntry::Multi => "多人模式",
            MenuEntry::Settings => settings.label(),
        }
    }
}

/// What the third menu entry is: a settings placeholder or an exit button
/// that logs the player out through the hosting page.
#[derive(Copy, Clone, Debug, Default, EnumString, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum SettingsEntry {
    #[default]
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "exit")]
    Exit,
}

impl SettingsEntry {
    pub const fn label(&self) -> &'static str {
        match self {
            SettingsEntry::Settings => "设置",
            SettingsEntry::Exit => "退出",
        }
    }
}

/// Result of clicking a menu entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Activation {
    Transitioned,
    Unchanged,
    LoggedOut,
    /// The entry wanted an external capability that failed or was absent.
    Ignored(ShellError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Menu {
    visible: bool,
    settings: SettingsEntry,
}

impl Menu {
    pub fn new(settings: SettingsEntry) -> Self {
        Self {
            visible: true,
            settings,
        }
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

    pub fn settings(&self) -> SettingsEntry {
        self.settings
    }

    pub fn click(
        &mut self,
        entry: MenuEntry,
        playground: &mut Playground,
        logout: Option<&dyn Logout>,
    ) -> Activation {
        match entry {
            MenuEntry::Single => {
                if !self.visible && playground.is_visible() {
                    return Activation::Unchanged;
                }
                self.hide();
                playground.show();
                Activation::Transitioned
            }
            MenuEntry::Multi => Activation::Unchanged,
            MenuEntry::Settings => match (self.settings, logout) {
                (SettingsEntry::Settings, _) => Activation::Unchanged,
                (SettingsEntry::Exit, None) => {
                    Activation::Ignored(ShellError::MissingCapability(LOGOUT_METHOD.to_string()))
                }
                (SettingsEntry::Exit, Some(logout)) => match logout.logout_on_remote() {
                    Ok(()) => Activation::LoggedOut,
                    Err(err) => Activation::Ignored(err),
                },
            },
        }
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct MenuViewProps {
    pub visible: bool,
    pub settings: SettingsEntry,
    pub on_select: Callback<MenuEntry>,
}

pub struct MenuView;

impl Component for MenuView {
    type Message = MenuEntry;
    type Properties = MenuViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, entry: Self::Message) -> bool {
        gloo_console::debug!(format!("Menu clicked: {}", entry));
        ctx.props().on_select.emit(entry);
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let display = if ctx.props().visible { "block" } else { "none" };
        html! {
            <div class={"ac-game-menu"} style={format!("display: {}", display)}>
                <div class={"ac-game-menu-field"}>
                    {MenuEntry::iter().map(|entry| self.create_item(ctx, entry)).collect::<Html>()}
                </div>
            </div>
        }
    }
}

impl MenuView {
    fn create_item(&self, ctx: &Context<Self>, entry: MenuEntry) -> Html {
        let onclick = ctx.link().callback(move |_| entry);
        let class = classes!(
            "ac-game-menu-field-item",
            entry.class(),
            entry.legacy_class()
        );
        html! {
            <>
                <div {class} {onclick}>
                    {entry.label(ctx.props().settings)}
                </div>
                <br />
            </>
        }
    }
}
