use futures::future::{FutureExt, LocalBoxFuture};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use webapi_checker::catalog::{PermissionDescriptor, PresenceTest};
use webapi_checker::error::ProbeError;
use webapi_checker::probe::{FeatureHost, PermissionHost};
use webapi_checker::status::PermissionState;

/// The running browser, seen through `window` and `navigator`.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct BrowserHost;

impl FeatureHost for BrowserHost {
    fn evaluate(&self, test: PresenceTest) -> Result<bool, ProbeError> {
        let window = web_sys::window().ok_or(ProbeError::HostUnavailable("window"))?;
        match test {
            PresenceTest::NavigatorFlag(flag) => {
                let v = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str(flag))
                    .map_err(|e| presence_failed(flag, &e))?;
                Ok(v.as_bool().unwrap_or(false))
            }
            PresenceTest::WindowMember(name) => has_member(&window, name),
            PresenceTest::NavigatorMember(name) => has_member(&window.navigator(), name),
        }
    }
}

impl PermissionHost for BrowserHost {
    fn query(
        &self,
        descriptor: PermissionDescriptor,
    ) -> LocalBoxFuture<'_, Result<PermissionState, ProbeError>> {
        query_permission(descriptor).boxed_local()
    }

    fn sleep(&self, after: Duration) -> LocalBoxFuture<'_, ()> {
        let ms = after.as_millis().min(i32::MAX as u128) as i32;
        // Without a window the timer never fires, same as having no deadline.
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(w) = web_sys::window() {
                if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                {
                    tracing::warn!("Failed to arm query deadline: {}", js_error_text(&e));
                }
            }
        });
        async move {
            let _ = JsFuture::from(promise).await;
        }
        .boxed_local()
    }
}

fn has_member(target: &js_sys::Object, name: &'static str) -> Result<bool, ProbeError> {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).map_err(|e| presence_failed(name, &e))
}

fn presence_failed(test: &'static str, e: &JsValue) -> ProbeError {
    ProbeError::PresenceTestFailed {
        test,
        detail: js_error_text(e),
    }
}

fn rejected(name: &str, e: &JsValue) -> ProbeError {
    ProbeError::UnsupportedOrRejectedQuery {
        name: name.to_string(),
        detail: js_error_text(e),
    }
}

/// `String(e)` for a thrown value: `"NotSupportedError: ..."` for a DOMException.
pub(super) fn js_error_text(e: &JsValue) -> String {
    if let Some(s) = e.as_string() {
        return s;
    }
    if let Some(obj) = e.dyn_ref::<js_sys::Object>() {
        return String::from(obj.to_string());
    }
    format!("{e:?}")
}

fn descriptor_object(descriptor: PermissionDescriptor) -> Result<js_sys::Object, JsValue> {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(
        &obj,
        &JsValue::from_str("name"),
        &JsValue::from_str(descriptor.name),
    )?;
    if let Some(v) = descriptor.user_visible_only {
        js_sys::Reflect::set(
            &obj,
            &JsValue::from_str("userVisibleOnly"),
            &JsValue::from_bool(v),
        )?;
    }
    Ok(obj)
}

async fn query_permission(descriptor: PermissionDescriptor) -> Result<PermissionState, ProbeError> {
    let name = descriptor.name;
    let window = web_sys::window().ok_or(ProbeError::HostUnavailable("window"))?;
    let permissions = window
        .navigator()
        .permissions()
        .map_err(|_| ProbeError::HostUnavailable("navigator.permissions"))?;

    let desc = descriptor_object(descriptor).map_err(|e| rejected(name, &e))?;
    // Some engines throw synchronously on unknown names, others reject.
    let promise = permissions.query(&desc).map_err(|e| rejected(name, &e))?;
    let status = JsFuture::from(promise)
        .await
        .map_err(|e| rejected(name, &e))?
        .dyn_into::<web_sys::PermissionStatus>()
        .map_err(|v| rejected(name, &v))?;

    match status.state() {
        web_sys::PermissionState::Granted => Ok(PermissionState::Granted),
        web_sys::PermissionState::Denied => Ok(PermissionState::Denied),
        web_sys::PermissionState::Prompt => Ok(PermissionState::Prompt),
        _ => Err(ProbeError::UnsupportedOrRejectedQuery {
            name: name.to_string(),
            detail: "TypeError: unrecognized permission state".to_string(),
        }),
    }
}
