//! `/kontakt?vcard=true`: build the owner's contact card with a square
//! portrait and hand it to the browser as a download.

use crate::constants::PORTRAIT_SRC;
use crate::content;
use crate::core::constants::{PORTRAIT_JPEG_QUALITY, PORTRAIT_SIZE_PX};
use crate::core::route::{strip_vcard_param, wants_vcard};
use crate::core::vcard::{self, center_square, VCARD_MIME};
use anyhow::{anyhow, bail, Context};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// True when the current URL asks for the card.
pub fn requested(window: &web::Window) -> bool {
    window
        .location()
        .search()
        .map(|s| wants_vcard(&s))
        .unwrap_or(false)
}

async fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(src);
    JsFuture::from(promise)
        .await
        .map_err(|_| anyhow!("could not load {}", src))?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img)
}

/// Center-crops `img` to a square, scales it to `PORTRAIT_SIZE_PX` and
/// returns JPEG bytes.
fn crop_to_jpeg(document: &web::Document, img: &web::HtmlImageElement) -> anyhow::Result<Vec<u8>> {
    let (w, h) = (img.natural_width(), img.natural_height());
    if w == 0 || h == 0 {
        bail!("portrait has no pixels");
    }
    let crop = center_square(w, h);
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow!("canvas element has the wrong type"))?;
    canvas.set_width(PORTRAIT_SIZE_PX);
    canvas.set_height(PORTRAIT_SIZE_PX);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|_| anyhow!("2d context has the wrong type"))?;
    let edge = PORTRAIT_SIZE_PX as f64;
    ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        img,
        crop.x as f64,
        crop.y as f64,
        crop.size as f64,
        crop.size as f64,
        0.0,
        0.0,
        edge,
        edge,
    )
    .map_err(js_err)?;
    let url = canvas
        .to_data_url_with_type_and_encoder_options(
            "image/jpeg",
            &JsValue::from_f64(PORTRAIT_JPEG_QUALITY),
        )
        .map_err(js_err)?;
    let b64 = url
        .strip_prefix(JPEG_DATA_URL_PREFIX)
        .ok_or_else(|| anyhow!("canvas did not produce a JPEG"))?;
    BASE64.decode(b64).context("canvas produced invalid base64")
}

fn offer_download(document: &web::Document, text: &str, file_name: &str) -> anyhow::Result<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let opts = web::BlobPropertyBag::new();
    opts.set_type(VCARD_MIME);
    let blob = web::Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(js_err)?;
    let url = web::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow!("anchor element has the wrong type"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    if let Some(body) = document.body() {
        _ = body.append_child(&anchor);
        anchor.click();
        anchor.remove();
    }
    _ = web::Url::revoke_object_url(&url);
    Ok(())
}

/// Drops `vcard=…` from the address bar so reloads and back navigation do
/// not download again.
fn strip_trigger(window: &web::Window) -> anyhow::Result<()> {
    let location = window.location();
    let path = location.pathname().map_err(js_err)?;
    let search = location.search().map_err(js_err)?;
    let hash = location.hash().unwrap_or_default();
    let url = format!("{}{}{}", path, strip_vcard_param(&search), hash);
    window
        .history()
        .map_err(js_err)?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .map_err(js_err)
}

async fn build_and_download(document: &web::Document) -> anyhow::Result<()> {
    let img = load_image(PORTRAIT_SRC).await?;
    let jpeg = crop_to_jpeg(document, &img)?;
    let owner = content::owner();
    let text = vcard::render(&owner, Some(&jpeg));
    offer_download(document, &text, &owner.file_name())?;
    log::info!(
        "[vcard] offered {} ({} photo bytes)",
        owner.file_name(),
        jpeg.len()
    );
    Ok(())
}

pub async fn run(window: web::Window, document: web::Document) {
    if let Err(e) = build_and_download(&document).await {
        log::warn!("[vcard] no download: {:?}", e);
    }
    if let Err(e) = strip_trigger(&window) {
        log::warn!("[vcard] could not clean up URL: {:?}", e);
    }
}
