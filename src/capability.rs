use crate::error::{Result, ShellError};

use std::fmt;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

pub const LOGOUT_METHOD: &str = "logout_on_remote";

/// Log-out operation owned by the settings component of the hosting page.
pub trait Logout {
    fn logout_on_remote(&self) -> Result<()>;
}

/// Shared handle to a [`Logout`] implementation, comparable by identity so it
/// can travel through component properties.
#[derive(Clone)]
pub struct LogoutHook(Rc<dyn Logout>);

impl LogoutHook {
    pub fn new(logout: impl Logout + 'static) -> Self {
        Self(Rc::new(logout))
    }

    pub fn as_logout(&self) -> &dyn Logout {
        self.0.as_ref()
    }
}

impl<L: Logout + 'static> From<Rc<L>> for LogoutHook {
    fn from(logout: Rc<L>) -> Self {
        Self(logout)
    }
}

impl PartialEq for LogoutHook {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LogoutHook {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LogoutHook({:p})", Rc::as_ptr(&self.0))
    }
}

/// Calls `window.<global>.logout_on_remote()`. The lookup happens on every
/// call, so the settings object may be installed after the shell mounts.
#[derive(Clone, Debug, PartialEq)]
pub struct JsSettingsBridge {
    global: String,
}

impl JsSettingsBridge {
    pub fn new(global: impl Into<String>) -> Self {
        Self {
            global: global.into(),
        }
    }

    fn missing(&self) -> ShellError {
        ShellError::MissingCapability(format!("{}.{}", self.global, LOGOUT_METHOD))
    }
}

impl Logout for JsSettingsBridge {
    fn logout_on_remote(&self) -> Result<()> {
        let window = web_sys::window().ok_or(ShellError::NoWindow)?;
        let settings = Reflect::get(&window, &JsValue::from_str(&self.global))
            .map_err(|_| self.missing())?;
        if settings.is_undefined() || settings.is_null() {
            return Err(self.missing());
        }
        let method = Reflect::get(&settings, &JsValue::from_str(LOGOUT_METHOD))
            .map_err(|_| self.missing())?;
        let method: Function = method.dyn_into().map_err(|_| self.missing())?;
        method
            .call0(&settings)
            .map_err(|e| ShellError::Logout(format!("{:?}", e)))?;
        Ok(())
    }
}
