// WebSocket link to the savefile parser server: inbound partial state
// updates, outbound command messages.

use crate::model::{Command, Update};
use crate::util::clog;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};
use yew::Callback;

pub struct WsSync {
    socket: WebSocket,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onerror: Closure<dyn FnMut(Event)>,
    _onclose: Closure<dyn FnMut(CloseEvent)>,
}

impl WsSync {
    /// `ws(s)://<host>/ws`, matching the page's own scheme.
    pub fn url_from_location() -> Option<String> {
        let loc = web_sys::window()?.location();
        let scheme = if loc.protocol().ok()? == "https:" {
            "wss:"
        } else {
            "ws:"
        };
        Some(format!("{scheme}//{}/ws", loc.host().ok()?))
    }

    pub fn connect(url: &str, on_update: Callback<Update>) -> Result<Self, JsValue> {
        let socket = WebSocket::new(url)?;

        let onmessage = {
            let on_update = on_update.clone();
            Closure::wrap(Box::new(move |e: MessageEvent| {
                let Some(text) = e.data().as_string() else {
                    return;
                };
                // A frame we cannot parse goes through the normal error
                // banner instead of vanishing.
                match serde_json::from_str::<Update>(&text) {
                    Ok(update) => on_update.emit(update),
                    Err(err) => on_update.emit(Update::from_error(format!("bad state update: {err}"))),
                }
            }) as Box<dyn FnMut(_)>)
        };
        socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let onerror = Closure::wrap(Box::new(move |_e: Event| {
            clog("ws_sync: socket error");
        }) as Box<dyn FnMut(_)>);
        socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        let onclose = Closure::wrap(Box::new(move |e: CloseEvent| {
            clog(&format!("ws_sync: closed ({})", e.code()));
        }) as Box<dyn FnMut(_)>);
        socket.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        Ok(Self {
            socket,
            _onmessage: onmessage,
            _onerror: onerror,
            _onclose: onclose,
        })
    }

    pub fn send(&self, cmd: &Command) {
        match serde_json::to_string(cmd) {
            Ok(json) => {
                if let Err(err) = self.socket.send_with_str(&json) {
                    clog(&format!("ws_sync: send failed: {err:?}"));
                }
            }
            Err(err) => clog(&format!("ws_sync: encode failed: {err}")),
        }
    }
}

impl Drop for WsSync {
    fn drop(&mut self) {
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        self.socket.set_onclose(None);
        let _ = self.socket.close();
    }
}
