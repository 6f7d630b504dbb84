use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use shared::departments::{decode_stored, encode_stored, STORAGE_KEY};
use shared::{default_departments, Error, ErrorCode, Result};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Storage, Url, Window};

fn js_error(err: JsValue) -> Error {
    Error::with_details(ErrorCode::SystemError, "browser call failed", format!("{:?}", err))
}

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::new(ErrorCode::SystemError, "no window"))
}

fn local_storage() -> Result<Storage> {
    window()?
        .local_storage()
        .ok()
        .flatten()
        .ok_or_else(|| Error::new(ErrorCode::Storage, "localStorage is not available"))
}

pub fn load_departments() -> Vec<String> {
    let raw = match local_storage().and_then(|s| s.get_item(STORAGE_KEY).map_err(js_error)) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default_departments(),
        Err(e) => {
            warn!("reading cached departments failed: {}", e);
            return default_departments();
        }
    };
    decode_stored(&raw).unwrap_or_else(|| {
        warn!("ignoring unreadable cached departments");
        default_departments()
    })
}

pub fn save_departments(departments: &[String]) -> Result<()> {
    local_storage()?
        .set_item(STORAGE_KEY, &encode_stored(departments))
        .map_err(js_error)
}

pub fn origin() -> String {
    window()
        .ok()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn alert(message: &str) {
    if let Ok(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub async fn read_file(file: &File) -> Result<String> {
    JsFuture::from(file.text())
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| Error::new(ErrorCode::InvalidInput, "file is not text"))
}

pub fn download(bytes: &[u8], file_name: &str, mime: &str) -> Result<()> {
    let document = window()?
        .document()
        .ok_or_else(|| Error::new(ErrorCode::SystemError, "no document"))?;

    let parts = Array::of1(&Uint8Array::from(bytes));
    let mut options = BlobPropertyBag::new();
    options.type_(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| Error::new(ErrorCode::SystemError, "anchor element has the wrong type"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Timeout::new(1_000, move || {
        let _ = Url::revoke_object_url(&url);
    }).forget();
    Ok(())
}
