use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;

use super::*;

#[derive(Serialize)]
struct PermissionQuery {
    name: &'static str,
}

fn js_err(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

fn has_property(target: &JsValue, name: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

fn method(target: &JsValue, name: &str) -> Result<Function, String> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_err)?
        .dyn_into::<Function>()
        .map_err(|_| format!("`{name}` is not callable"))
}

pub async fn current_position() -> Result<DevicePosition, GeolocationError> {
    let navigator = window()
        .map_err(|_| GeolocationError::Unsupported)?
        .navigator();
    if !has_property(&navigator, "geolocation") {
        return Err(GeolocationError::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    type Outcome = Result<DevicePosition, GeolocationError>;
    let (sender, receiver) = oneshot::channel::<Outcome>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let success_sender = Rc::clone(&sender);
    let on_success = Closure::once_into_js(move |position: web_sys::GeolocationPosition| {
        let coords = position.coords();
        let timestamp_ms = Reflect::get(&position, &JsValue::from_str("timestamp"))
            .ok()
            .and_then(|value| value.as_f64())
            .map(|value| value.max(0.0) as u64)
            .unwrap_or_else(bridge_host::unix_time_ms_now);
        let sample = DevicePosition {
            latitude: coords.latitude(),
            longitude: coords.longitude(),
            accuracy: coords.accuracy(),
            timestamp_ms,
        };
        if let Some(tx) = success_sender.borrow_mut().take() {
            let _ = tx.send(Ok(sample));
        }
    });

    let failure_sender = Rc::clone(&sender);
    let on_failure = Closure::once_into_js(move |error: web_sys::GeolocationPositionError| {
        let error = GeolocationError::from_code(error.code(), error.message());
        if let Some(tx) = failure_sender.borrow_mut().take() {
            let _ = tx.send(Err(error));
        }
    });

    geolocation
        .get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_failure.unchecked_ref()),
        )
        .map_err(|err| GeolocationError::Failed(js_err(err)))?;

    receiver
        .await
        .unwrap_or_else(|_| Err(GeolocationError::Failed("geolocation callback dropped".into())))
}

pub async fn geolocation_permission_state() -> Result<PermissionState, String> {
    let navigator: JsValue = window()?.navigator().into();
    if !has_property(&navigator, "permissions") {
        return Err("permissions API unavailable".to_string());
    }
    let permissions =
        Reflect::get(&navigator, &JsValue::from_str("permissions")).map_err(js_err)?;
    let query = method(&permissions, "query")?;
    let descriptor = serde_wasm_bindgen::to_value(&PermissionQuery {
        name: "geolocation",
    })
    .map_err(|e| e.to_string())?;
    let promise = query
        .call1(&permissions, &descriptor)
        .map_err(js_err)?
        .dyn_into::<Promise>()
        .map_err(|_| "permissions.query did not return a promise".to_string())?;
    let status = JsFuture::from(promise).await.map_err(js_err)?;
    let token = Reflect::get(&status, &JsValue::from_str("state"))
        .map_err(js_err)?
        .as_string()
        .unwrap_or_default();
    PermissionState::parse(&token).ok_or_else(|| format!("unknown permission state `{token}`"))
}

pub async fn read_clipboard_text() -> Result<String, String> {
    let navigator: JsValue = window()?.navigator().into();
    if !has_property(&navigator, "clipboard") {
        return Err("clipboard API unavailable".to_string());
    }
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_err)?;
    let read_text = method(&clipboard, "readText")?;
    let promise = read_text
        .call0(&clipboard)
        .map_err(js_err)?
        .dyn_into::<Promise>()
        .map_err(|_| "clipboard.readText did not return a promise".to_string())?;
    JsFuture::from(promise)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| "clipboard returned non-text data".to_string())
}

pub async fn sleep_ms(ms: u32) {
    let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        }
    });
    let _ = JsFuture::from(promise).await;
}

pub fn alert(message: &str) {
    if let Ok(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn prompt(message: &str, default_value: &str) -> Option<String> {
    window()
        .ok()
        .and_then(|w| w.prompt_with_message_and_default(message, default_value).ok())
        .flatten()
}

pub fn open_in_new_context(url: &str) -> Result<(), String> {
    match window()?.open_with_url_and_target(url, "_blank").map_err(js_err)? {
        Some(_) => Ok(()),
        None => Err(format!("new browsing context for `{url}` was blocked")),
    }
}

pub fn inner_height() -> Option<f64> {
    window().ok()?.inner_height().ok()?.as_f64()
}

pub fn set_body_background(color: &str) -> Result<(), String> {
    let body = window()?
        .document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| "document body unavailable".to_string())?;
    body.style()
        .set_property("background-color", color)
        .map_err(js_err)
}

pub fn dispatch_document_event(name: &str) -> Result<(), String> {
    let document = window()?
        .document()
        .ok_or_else(|| "document unavailable".to_string())?;
    let event = web_sys::Event::new(name).map_err(js_err)?;
    document.dispatch_event(&event).map_err(js_err)?;
    Ok(())
}

pub fn add_resize_listener(mut handler: Box<dyn FnMut(f64)>) -> Result<(), String> {
    let window = window()?;
    let listener_window = window.clone();
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        if let Some(height) = listener_window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
        {
            handler(height);
        }
    });
    window
        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .map_err(js_err)?;
    // Page-lifetime listener; the bridge is never torn down before the page.
    listener.forget();
    Ok(())
}
