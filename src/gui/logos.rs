// src/gui/logos.rs
//
// Employer logo downloads. Whether a logo URL is actually reachable is
// unknown until we try it, so each card's Image-vs-Initial choice is
// driven by the per-URL state here: a download failure flips the state
// to Failed and the card renders the employer initial from then on.
// Declarative state, no touching of already-rendered output.

use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::logd;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

enum LogoState {
    /// Download in flight.
    Pending,
    /// Decoded pixels waiting for texture upload on the UI thread.
    Ready(ColorImage),
    /// Pixels handed to egui; the handle lives in `textures`.
    Uploaded,
    /// Download or decode failed. Terminal; we don't re-try dead links.
    Failed,
}

pub struct LogoStore {
    // workers write here
    states: Arc<Mutex<HashMap<String, LogoState>>>,
    // UI thread only
    textures: HashMap<String, TextureHandle>,
}

impl Default for LogoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoStore {
    pub fn new() -> Self {
        Self {
            states: Arc::new(Mutex::new(HashMap::new())),
            textures: HashMap::new(),
        }
    }

    /// Texture for a logo URL, if it has downloaded and decoded.
    ///
    /// First sight of a URL kicks off a download thread. Returns None
    /// while pending and after failure; the caller renders the
    /// employer initial in both cases.
    pub fn texture(&mut self, ctx: &egui::Context, url: &str) -> Option<TextureHandle> {
        if let Some(tex) = self.textures.get(url) {
            return Some(tex.clone());
        }

        let mut states = self.states.lock().unwrap();
        if !states.contains_key(url) {
            states.insert(s!(url), LogoState::Pending);
            drop(states);
            self.spawn_download(ctx, url);
            return None;
        }
        if !matches!(states.get(url), Some(LogoState::Ready(_))) {
            // Pending, Uploaded, or Failed
            return None;
        }

        let Some(LogoState::Ready(img)) = states.insert(s!(url), LogoState::Uploaded) else {
            return None;
        };
        drop(states);

        let tex = ctx.load_texture(url, img, TextureOptions::LINEAR);
        self.textures.insert(s!(url), tex.clone());
        Some(tex)
    }

    /// True once a download has conclusively failed.
    pub fn is_failed(&self, url: &str) -> bool {
        matches!(
            self.states.lock().unwrap().get(url),
            Some(LogoState::Failed)
        )
    }

    fn spawn_download(&self, ctx: &egui::Context, url: &str) {
        let states = self.states.clone();
        let ctx = ctx.clone();
        let url = s!(url);

        thread::spawn(move || {
            let state = match download_and_decode(&url) {
                Ok(img) => {
                    logd!("Logo: OK {url}");
                    LogoState::Ready(img)
                }
                Err(e) => {
                    logd!("Logo: Failed {url}: {e}");
                    LogoState::Failed
                }
            };
            states.lock().unwrap().insert(url, state);
            ctx.request_repaint();
        });
    }
}

fn download_and_decode(url: &str) -> Result<ColorImage, Box<dyn Error>> {
    let resp = reqwest::blocking::get(url)?;
    if !resp.status().is_success() {
        return Err(format!("HTTP {}", resp.status()).into());
    }
    let bytes = resp.bytes()?;

    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        rgba.as_raw(),
    ))
}
