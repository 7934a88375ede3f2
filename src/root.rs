use crate::capability::LogoutHook;
use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use crate::menu::{Activation, Menu, MenuEntry, MenuView, SettingsEntry};
use crate::playground::{Playground, PlaygroundView};

use web_sys::Element;
use yew::{html, AppHandle, Component, Context, Html, Properties};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    MenuActive,
    /// Terminal: nothing leads back to the menu.
    PlaygroundActive,
}

/// Owns the menu and the playground and routes clicks between them.
#[derive(Debug)]
pub struct AppRoot {
    id: String,
    pub menu: Menu,
    pub playground: Playground,
    logout: Option<LogoutHook>,
}

impl AppRoot {
    pub fn new(
        id: impl Into<String>,
        settings: SettingsEntry,
        logout: Option<LogoutHook>,
    ) -> Self {
        let playground = Playground::new();
        let menu = Menu::new(settings);
        Self {
            id: id.into(),
            menu,
            playground,
            logout,
        }
    }

    pub fn from_config(config: &ShellConfig, logout: Option<LogoutHook>) -> Self {
        Self::new(config.container_id.clone(), config.settings_entry, logout)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn select(&mut self, entry: MenuEntry) -> Activation {
        let logout = self.logout.as_ref().map(LogoutHook::as_logout);
        self.menu.click(entry, &mut self.playground, logout)
    }

    pub fn phase(&self) -> Phase {
        if self.playground.is_visible() && !self.menu.is_visible() {
            Phase::PlaygroundActive
        } else {
            Phase::MenuActive
        }
    }
}

#[derive(Debug)]
pub enum AcGameMsg {
    Select(MenuEntry),
}

#[derive(Clone, PartialEq, Properties)]
pub struct AcGameProps {
    pub config: ShellConfig,
    #[prop_or_default]
    pub logout: Option<LogoutHook>,
}

pub struct AcGame {
    root: AppRoot,
}

impl Component for AcGame {
    type Message = AcGameMsg;
    type Properties = AcGameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            root: AppRoot::from_config(&props.config, props.logout.clone()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        gloo_console::debug!(format!("Starting: {:?} ({:?})", msg, self.root.phase()));
        let AcGameMsg::Select(entry) = msg;
        let render = match self.root.select(entry) {
            Activation::Transitioned => {
                gloo_console::info!(format!("#{}: {:?}", self.root.id(), self.root.phase()));
                true
            }
            Activation::LoggedOut => {
                gloo_console::info!(format!("#{}: logged out", self.root.id()));
                false
            }
            Activation::Ignored(err) => {
                gloo_console::warn!(format!("#{}: {} ignored: {}", self.root.id(), entry, err));
                false
            }
            Activation::Unchanged => false,
        };
        gloo_console::debug!(format!("Finished: {} ({:?})", entry, self.root.phase()));
        render
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_select = ctx.link().callback(AcGameMsg::Select);
        html! {
            <>
                <MenuView
                    visible={self.root.menu.is_visible()}
                    settings={self.root.menu.settings()}
                    {on_select}
                />
                <PlaygroundView visible={self.root.playground.is_visible()} />
            </>
        }
    }
}

/// Finds the container by id and reads its configuration attributes.
fn resolve(container_id: &str) -> Result<(Element, ShellConfig)> {
    let window = web_sys::window().ok_or(ShellError::NoWindow)?;
    let document = window.document().ok_or(ShellError::NoDocument)?;
    let container = document.get_element_by_id(container_id).ok_or_else(|| {
        ShellError::configuration(format!("container #{} not found", container_id))
    })?;
    let config =
        ShellConfig::new(container_id).with_attributes(|name| container.get_attribute(name))?;
    Ok((container, config))
}

pub fn mount(container_id: &str) -> Result<AppHandle<AcGame>> {
    let (container, config) = resolve(container_id)?;
    let logout = config.logout_hook();
    gloo_console::info!(format!(
        "Mounting #{} (third entry: {:?}, settings object: {})",
        config.container_id, config.settings_entry, config.logout_global
    ));
    let props = AcGameProps { config, logout };
    Ok(yew::Renderer::<AcGame>::with_root_and_props(container, props).render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::testing::RecordingLogout;
    use crate::config::DEFAULT_CONTAINER_ID;

    use std::rc::Rc;

    fn visibility(root: &AppRoot) -> (bool, bool) {
        (root.menu.is_visible(), root.playground.is_visible())
    }

    #[test]
    fn menu_visible_and_playground_hidden_after_construction() {
        for settings in [SettingsEntry::Settings, SettingsEntry::Exit] {
            let root = AppRoot::new("ac_game", settings, None);
            assert_eq!(visibility(&root), (true, false));
            assert_eq!(root.phase(), Phase::MenuActive);
        }
    }

    #[test]
    fn single_player_scenario() {
        let mut root = AppRoot::from_config(&ShellConfig::default(), None);
        assert_eq!(root.id(), DEFAULT_CONTAINER_ID);
        assert_eq!(visibility(&root), (true, false));

        assert_eq!(root.select(MenuEntry::Single), Activation::Transitioned);
        assert_eq!(visibility(&root), (false, true));
        assert_eq!(root.phase(), Phase::PlaygroundActive);
    }

    #[test]
    fn second_single_click_changes_nothing() {
        let mut root = AppRoot::new("ac_game", SettingsEntry::Settings, None);
        root.select(MenuEntry::Single);
        let menu = root.menu.clone();
        let playground = root.playground.clone();

        assert_eq!(root.select(MenuEntry::Single), Activation::Unchanged);
        assert_eq!(root.menu, menu);
        assert_eq!(root.playground, playground);
    }

    #[test]
    fn single_click_from_any_state() {
        let mut root = AppRoot::new("ac_game", SettingsEntry::Settings, None);
        root.menu.hide();
        root.playground.hide();
        root.select(MenuEntry::Single);
        assert_eq!(visibility(&root), (false, true));

        root.menu.show();
        root.select(MenuEntry::Single);
        assert_eq!(visibility(&root), (false, true));
    }

    #[test]
    fn multiplayer_never_changes_visibility() {
        let mut root = AppRoot::new("ac_game", SettingsEntry::Exit, None);
        assert_eq!(root.select(MenuEntry::Multi), Activation::Unchanged);
        assert_eq!(visibility(&root), (true, false));

        root.select(MenuEntry::Single);
        assert_eq!(root.select(MenuEntry::Multi), Activation::Unchanged);
        assert_eq!(visibility(&root), (false, true));
    }

    #[test]
    fn exit_calls_logout_once_per_click() {
        let logout = Rc::new(RecordingLogout::default());
        let mut root = AppRoot::new(
            "ac_game",
            SettingsEntry::Exit,
            Some(LogoutHook::from(logout.clone())),
        );
        assert_eq!(root.select(MenuEntry::Settings), Activation::LoggedOut);
        assert_eq!(root.select(MenuEntry::Settings), Activation::LoggedOut);
        assert_eq!(logout.calls(), 2);
        assert_eq!(visibility(&root), (true, false));
    }

    #[test]
    fn settings_click_never_fails() {
        let failing = Rc::new(RecordingLogout::failing(ShellError::Logout("500".into())));
        let cases = [
            (SettingsEntry::Settings, None),
            (SettingsEntry::Settings, Some(LogoutHook::from(failing.clone()))),
            (SettingsEntry::Exit, None),
            (SettingsEntry::Exit, Some(LogoutHook::from(failing.clone()))),
        ];
        for (settings, logout) in cases {
            let mut root = AppRoot::new("ac_game", settings, logout);
            let outcome = root.select(MenuEntry::Settings);
            assert!(
                matches!(outcome, Activation::Unchanged | Activation::Ignored(_)),
                "{:?} gave {:?}",
                settings,
                outcome
            );
            assert_eq!(visibility(&root), (true, false));
        }
        assert_eq!(failing.calls(), 1);
    }
}
