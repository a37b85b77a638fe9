//! Soda Can Shaker entry point
//!
//! Handles platform-specific initialization and wires the game to its inputs.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, MouseEvent};

    use soda_can_shaker::Settings;
    use soda_can_shaker::platform::web::{self, MotionSubscription};
    use soda_can_shaker::platform::{
        SENSOR_TIMEOUT_MS, SensorError, SensorListener, SensorWatchdog, apply_sensor_status,
    };
    use soda_can_shaker::sim::{AccelerationSample, Game};
    use soda_can_shaker::ui::{CanView, Toast};

    /// Screen state: the game plus what is currently drawn
    struct App {
        game: Game,
        settings: Settings,
        /// Sensor not (yet) known to be missing
        sensor_ok: bool,
        /// iOS permission prompt already shown
        permission_asked: bool,
        /// Whether motion events actually carry data
        watchdog: SensorWatchdog,
        /// Last rendered view (skip redundant DOM writes)
        last_view: Option<CanView>,
        /// Pending toast hide timer
        toast_timer: Option<i32>,
    }

    impl App {
        fn new(settings: Settings) -> Self {
            Self {
                game: Game::new(&settings),
                settings,
                sensor_ok: false,
                permission_asked: false,
                watchdog: SensorWatchdog::default(),
                last_view: None,
                toast_timer: None,
            }
        }

        /// Drain game events into toasts, then redraw
        fn flush(&mut self) {
            for event in self.game.drain_events() {
                if let Some(toast) = Toast::for_event(&event, self.settings.toast_duration_ms) {
                    self.show_toast(&toast);
                }
            }
            self.render();
        }

        /// Apply a watchdog verdict. A sensor already known to be missing is
        /// reported only once.
        fn settle_sensor(&mut self, verdict: Option<Result<(), SensorError>>) {
            let Some(status) = verdict else {
                return;
            };
            if !self.sensor_ok {
                return;
            }
            let ok = apply_sensor_status(&mut self.game, status);
            self.sensor_ok = ok;
            self.flush();
        }

        fn render(&mut self) {
            let view = CanView::from_state(&self.game.state());
            if self.last_view == Some(view) {
                return;
            }
            let Some(document) = document() else {
                return;
            };

            if let Some(img) = document.get_element_by_id(view.image.element_id()) {
                let _ = img.set_attribute("class", "can");
                let _ = img.set_attribute("alt", view.image.alt_text());
            }
            if let Some(img) = document.get_element_by_id(view.hidden_image().element_id()) {
                let _ = img.set_attribute("class", "can hidden");
            }
            if let Some(btn) = document.get_element_by_id("can-btn") {
                btn.set_text_content(Some(view.button_label));
            }
            if let Some(el) = document.query_selector("#shake-count .hud-value").ok().flatten() {
                el.set_text_content(Some(&view.shake_count.to_string()));
            }

            self.last_view = Some(view);
        }

        fn show_toast(&mut self, toast: &Toast) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(el) = window.document().and_then(|d| d.get_element_by_id("toast")) else {
                log::info!("{}", toast.message);
                return;
            };

            el.set_text_content(Some(toast.message));
            let _ = el.set_attribute("class", "toast");

            // Newer toast replaces the old one
            if let Some(handle) = self.toast_timer.take() {
                window.clear_timeout_with_handle(handle);
            }
            let closure = Closure::once(move || {
                let _ = el.set_attribute("class", "toast hidden");
            });
            self.toast_timer = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    toast.duration_ms as i32,
                )
                .ok();
            closure.forget();
        }
    }

    /// Forwards motion samples into the shared app and redraws on shakes
    struct ScreenListener(Rc<RefCell<App>>);

    impl SensorListener for ScreenListener {
        fn on_sensor_changed(&mut self, sample: AccelerationSample) {
            let mut app = self.0.borrow_mut();
            let verdict = app.watchdog.on_reading(Some(sample));
            app.settle_sensor(verdict);
            if app.game.observe(sample) {
                app.flush();
            }
        }

        fn on_empty_reading(&mut self) {
            let mut app = self.0.borrow_mut();
            let verdict = app.watchdog.on_reading(None);
            app.settle_sensor(verdict);
        }
    }

    type SubscriptionSlot = Rc<RefCell<Option<MotionSubscription>>>;

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Soda Can Shaker starting...");

        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let settings = Settings::load();
        let app = Rc::new(RefCell::new(App::new(settings)));

        {
            let mut a = app.borrow_mut();
            let status = web::accelerometer_available();
            let ok = apply_sensor_status(&mut a.game, status);
            a.sensor_ok = ok;
            a.flush();
        }

        let subscription: SubscriptionSlot = Rc::new(RefCell::new(None));
        subscribe(&app, &subscription);

        setup_can_button(app.clone(), subscription.clone());
        setup_visibility(app, subscription);

        log::info!("Soda Can Shaker running!");
    }

    /// Register the motion listener if we have a sensor and none is active
    fn subscribe(app: &Rc<RefCell<App>>, slot: &SubscriptionSlot) {
        let (sensor_ok, include_gravity) = {
            let a = app.borrow();
            (a.sensor_ok, a.settings.include_gravity)
        };
        if !sensor_ok || slot.borrow().is_some() {
            return;
        }

        match MotionSubscription::register(ScreenListener(app.clone()), include_gravity) {
            Ok(sub) => {
                *slot.borrow_mut() = Some(sub);
                // iOS stays silent until permission is granted; arm after that
                if !web::permission_required() {
                    arm_sensor_timeout(app, slot);
                }
            }
            Err(e) => {
                let mut a = app.borrow_mut();
                let ok = apply_sensor_status(&mut a.game, Err(e));
                a.sensor_ok = ok;
                a.flush();
            }
        }
    }

    /// Report a missing sensor if no reading shows up in time
    fn arm_sensor_timeout(app: &Rc<RefCell<App>>, slot: &SubscriptionSlot) {
        if !app.borrow().watchdog.is_pending() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        let app = app.clone();
        let slot = slot.clone();
        let closure = Closure::once(move || {
            // Page hidden meanwhile: the next subscribe re-arms
            if slot.borrow().is_none() {
                return;
            }
            let mut a = app.borrow_mut();
            let verdict = a.watchdog.on_timeout();
            a.settle_sensor(verdict);
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SENSOR_TIMEOUT_MS as i32,
        );
        closure.forget();
    }

    fn setup_can_button(app: Rc<RefCell<App>>, slot: SubscriptionSlot) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id("can-btn")) else {
            log::error!("No #can-btn element");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let ask_permission = {
                let mut a = app.borrow_mut();
                a.game.press_button();
                a.flush();

                let ask = a.sensor_ok && !a.permission_asked && web::permission_required();
                a.permission_asked |= ask;
                ask
            };

            // iOS only hands out motion access from inside a user gesture
            if ask_permission {
                let app = app.clone();
                let slot = slot.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match web::request_motion_permission().await {
                        Ok(()) => arm_sensor_timeout(&app, &slot),
                        Err(e) => {
                            let mut a = app.borrow_mut();
                            let ok = apply_sensor_status(&mut a.game, Err(e));
                            a.sensor_ok = ok;
                            a.flush();
                        }
                    }
                });
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Hold the sensor only while the page is visible
    fn setup_visibility(app: Rc<RefCell<App>>, slot: SubscriptionSlot) {
        let Some(document) = document() else {
            return;
        };

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                // Drop unregisters
                slot.borrow_mut().take();
            } else {
                subscribe(&app, &slot);
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use soda_can_shaker::Settings;
    use soda_can_shaker::platform::synthetic::{Motion, SyntheticSensor};
    use soda_can_shaker::sim::Game;

    env_logger::init();
    log::info!("Soda Can Shaker (native) starting...");
    log::info!("Native mode has no screen - playing a synthetic session. Use `trunk serve` on a phone for the real thing");

    let settings = Settings::load();
    let mut game = Game::new(&settings);

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut sensor = SyntheticSensor::new(seed);
    log::info!("Synthetic sensor seed: {}", seed);

    let needed = settings.explode_threshold as usize + 1;
    let rounds: [&[Motion]; 3] = [
        &[Motion::Rest(30), Motion::Shake(needed / 2)],
        &[Motion::Rest(10), Motion::Shake(needed)],
        &[Motion::Rest(5)],
    ];

    for script in rounds {
        sensor.play(script, &mut game);
        let event = game.press_button();
        log::info!("Pressed button: {:?} -> {:?}", event, game.state());
        for event in game.drain_events() {
            if let Some(toast) = soda_can_shaker::ui::Toast::for_event(&event, settings.toast_duration_ms) {
                println!("{}", toast.message);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
