use fear_core::WEBCAM_CAPTURE_SIZE;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Open the default camera into a hidden, muted, autoplaying `<video>`.
///
/// The element is returned as soon as the stream is attached; it becomes
/// drawable once its metadata loads, which the canvas surface checks per frame.
pub async fn start_capture(document: &web::Document) -> anyhow::Result<web::HtmlVideoElement> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow::anyhow!("media devices: {:?}", e))?;

    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow::anyhow!("getUserMedia: {:?}", e))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("camera denied: {:?}", e))?
        .dyn_into::<web::MediaStream>()
        .map_err(|_| anyhow::anyhow!("getUserMedia did not return a stream"))?;

    let video = document
        .create_element("video")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlVideoElement>()
        .map_err(|_| anyhow::anyhow!("created element is not a video"))?;
    let (w, h) = WEBCAM_CAPTURE_SIZE;
    video.set_width(w);
    video.set_height(h);
    video.set_muted(true);
    video.set_autoplay(true);
    let _ = video.set_attribute("playsinline", "");
    let _ = video.set_attribute("style", "display:none");
    video.set_src_object(Some(&stream));
    if let Ok(p) = video.play() {
        let _ = JsFuture::from(p).await;
    }
    log::info!("[webcam] capture started");
    Ok(video)
}
