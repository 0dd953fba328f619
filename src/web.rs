//! Browser bindings
//!
//! Exposes a [`WheelHandle`] to JavaScript. The page animates the wheel to
//! the rotation returned by `spin` and gets the winner through a callback
//! once the settle timer fires.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::lists::SavedLists;
use crate::palette::{Palette, Rgb};
use crate::settings::Settings;
use crate::wheel::{SegmentArc, SpinRequest, WheelSession};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Wheel of Names starting...");
}

/// Resolve after `ms` milliseconds without blocking the page
async fn sleep_ms(ms: u32) -> Result<(), JsValue> {
    let mut schedule = |resolve: js_sys::Function, reject: js_sys::Function| {
        let scheduled = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
            });
        if let Err(e) = scheduled {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    };
    JsFuture::from(js_sys::Promise::new(&mut schedule)).await?;
    Ok(())
}

#[wasm_bindgen]
pub struct WheelHandle {
    session: Rc<RefCell<WheelSession>>,
    settings: Settings,
    palette: Palette,
    lists: SavedLists,
}

impl Default for WheelHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WheelHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        log::info!("Wheel initialized with seed: {}", seed);
        Self {
            session: Rc::new(RefCell::new(WheelSession::from_settings(&settings, seed))),
            palette: Palette::from_hex_strings(&settings.custom_colors),
            lists: SavedLists::load(),
            settings,
        }
    }

    // === Names ===

    pub fn add_name(&mut self, name: &str) -> Result<usize, JsError> {
        Ok(self.session.borrow_mut().add_name(name)?)
    }

    pub fn remove_name(&mut self, index: usize) -> Result<String, JsError> {
        Ok(self.session.borrow_mut().remove_name(index)?)
    }

    pub fn names(&self) -> Vec<String> {
        self.session.borrow().roster().names().to_vec()
    }

    // === Spinning ===

    /// Start a spin. Returns the rotation to animate to, or `undefined`
    /// if a spin is already running. `on_settled(label, index)` fires once
    /// the settle duration has passed.
    pub fn spin(&mut self, on_settled: js_sys::Function) -> Result<Option<f64>, JsError> {
        let request = self.session.borrow_mut().spin()?;
        let SpinRequest::Started { target } = request else {
            return Ok(None);
        };

        let session = Rc::clone(&self.session);
        let settle_ms = self.settings.settle_duration_ms;
        spawn_local(async move {
            if let Err(e) = sleep_ms(settle_ms).await {
                log::error!("Settle timer failed: {:?}", e);
            }
            let settled = session.borrow_mut().settle();
            match settled {
                Ok(Some(winner)) => {
                    let label = JsValue::from_str(&winner.label);
                    let index = JsValue::from(winner.index as u32);
                    if let Err(e) = on_settled.call2(&JsValue::NULL, &label, &index) {
                        log::error!("on_settled callback failed: {:?}", e);
                    }
                }
                Ok(None) => {}
                Err(e) => log::error!("Could not resolve winner: {}", e),
            }
        });
        Ok(Some(target))
    }

    pub fn rotation(&self) -> f64 {
        self.session.borrow().rotation()
    }

    pub fn is_spinning(&self) -> bool {
        self.session.borrow().is_spinning()
    }

    pub fn settle_duration_ms(&self) -> u32 {
        self.settings.settle_duration_ms
    }

    pub fn winner(&self) -> Option<String> {
        self.session.borrow().winner().map(|w| w.label.clone())
    }

    pub fn result_visible(&self) -> bool {
        self.session.borrow().result_visible()
    }

    pub fn dismiss(&mut self) {
        self.session.borrow_mut().dismiss();
    }

    pub fn remove_winner(&mut self) -> Result<String, JsError> {
        Ok(self.session.borrow_mut().remove_winner()?.label)
    }

    /// Label angle for segment `index` in the unrotated wheel (degrees)
    pub fn segment_mid_angle(&self, index: usize) -> f64 {
        let count = self.session.borrow().roster().len().max(1);
        SegmentArc::in_wheel_frame(index, count).mid()
    }

    // === Colors ===

    pub fn segment_color(&self, index: usize) -> String {
        self.palette.color_for(index).to_hex()
    }

    pub fn segment_text_color(&self, index: usize) -> String {
        self.palette.color_for(index).text_color().to_hex()
    }

    pub fn custom_colors(&self) -> Vec<String> {
        self.palette.to_hex_strings()
    }

    pub fn add_random_color(&mut self) -> String {
        let seed = js_sys::Date::now() as u64 ^ self.palette.custom().len() as u64;
        let mut rng = crate::wheel::RngState::new(seed).to_rng();
        let color = self.palette.add_random(&mut rng);
        self.store_colors();
        color.to_hex()
    }

    pub fn update_color(&mut self, index: usize, hex: &str) -> Result<(), JsError> {
        let color: Rgb = hex.parse()?;
        self.palette.update(index, color)?;
        self.store_colors();
        Ok(())
    }

    pub fn remove_color(&mut self, index: usize) -> Result<(), JsError> {
        self.palette.remove(index)?;
        self.store_colors();
        Ok(())
    }

    pub fn reset_colors(&mut self) {
        self.palette.reset();
        self.store_colors();
    }

    fn store_colors(&mut self) {
        self.settings.custom_colors = self.palette.to_hex_strings();
        self.settings.save();
    }

    // === Saved lists ===

    pub fn save_list(&mut self, title: &str) -> Result<bool, JsError> {
        let replaced = self.lists.save_roster(title, self.session.borrow().roster())?;
        self.lists.save();
        Ok(replaced)
    }

    pub fn load_list(&mut self, title: &str) -> Result<(), JsError> {
        let names = self.lists.get(title)?.to_vec();
        self.session.borrow_mut().replace_names(names);
        Ok(())
    }

    pub fn delete_list(&mut self, title: &str) -> Result<(), JsError> {
        self.lists.delete(title)?;
        self.lists.save();
        Ok(())
    }

    pub fn list_titles(&self) -> Vec<String> {
        self.lists.titles().map(str::to_string).collect()
    }
}
