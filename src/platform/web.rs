//! Browser motion sensor
//!
//! Uses `devicemotion` events. The subscription is a scoped resource:
//! hold it while the page is visible, drop it when hidden.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DeviceAcceleration, DeviceMotionEvent, Window};

use super::{SensorError, SensorListener};
use crate::sim::AccelerationSample;

const MOTION_EVENT: &str = "devicemotion";

// iOS 13+ gates motion events behind an explicit permission prompt that must
// be triggered from a user gesture.
#[wasm_bindgen(inline_js = "
    export function motion_permission_required() {
        return typeof DeviceMotionEvent !== 'undefined'
            && typeof DeviceMotionEvent.requestPermission === 'function';
    }

    export function request_motion_permission() {
        return DeviceMotionEvent.requestPermission();
    }
")]
extern "C" {
    fn motion_permission_required() -> bool;
    #[wasm_bindgen(js_name = request_motion_permission, catch)]
    fn js_request_motion_permission() -> Result<js_sys::Promise, JsValue>;
}

/// Ok if the browser exposes motion events at all. Most browsers do even
/// without a sensor; `SensorWatchdog` makes the final call.
pub fn accelerometer_available() -> Result<(), SensorError> {
    let window = web_sys::window().ok_or(SensorError::NoAccelerometer)?;
    match js_sys::Reflect::has(&window, &JsValue::from_str("DeviceMotionEvent")) {
        Ok(true) => Ok(()),
        _ => Err(SensorError::NoAccelerometer),
    }
}

/// Whether [`request_motion_permission`] must be called before samples arrive
pub fn permission_required() -> bool {
    motion_permission_required()
}

/// Ask for motion access where the browser requires it (iOS Safari).
/// Must be called from a user gesture handler.
pub async fn request_motion_permission() -> Result<(), SensorError> {
    if !motion_permission_required() {
        return Ok(());
    }

    let promise = js_request_motion_permission().map_err(|_| SensorError::PermissionDenied)?;
    match JsFuture::from(promise).await {
        Ok(state) if state.as_string().as_deref() == Some("granted") => {
            log::info!("Motion permission granted");
            Ok(())
        }
        Ok(state) => {
            log::warn!("Motion permission: {:?}", state.as_string());
            Err(SensorError::PermissionDenied)
        }
        Err(e) => {
            log::warn!("Motion permission request failed: {:?}", e);
            Err(SensorError::PermissionDenied)
        }
    }
}

/// Convert a motion event into a sample. None if the browser left an axis out.
fn sample_from_event(event: &DeviceMotionEvent, include_gravity: bool) -> Option<AccelerationSample> {
    let accel: DeviceAcceleration = if include_gravity {
        event.acceleration_including_gravity()?
    } else {
        event.acceleration()?
    };
    Some(AccelerationSample::new(
        accel.x()? as f32,
        accel.y()? as f32,
        accel.z()? as f32,
    ))
}

/// Live `devicemotion` registration. Unregisters on drop.
pub struct MotionSubscription {
    window: Window,
    closure: Closure<dyn FnMut(DeviceMotionEvent)>,
}

impl MotionSubscription {
    /// Start forwarding motion events to `listener`
    pub fn register<L: SensorListener + 'static>(
        mut listener: L,
        include_gravity: bool,
    ) -> Result<Self, SensorError> {
        let window = web_sys::window().ok_or(SensorError::NoAccelerometer)?;

        let closure = Closure::<dyn FnMut(_)>::new(move |event: DeviceMotionEvent| {
            match sample_from_event(&event, include_gravity) {
                Some(sample) => listener.on_sensor_changed(sample),
                None => listener.on_empty_reading(),
            }
        });

        window
            .add_event_listener_with_callback(MOTION_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| SensorError::Subscribe(format!("{:?}", e)))?;

        log::info!("Motion sensor registered");
        Ok(Self { window, closure })
    }
}

impl Drop for MotionSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(MOTION_EVENT, self.closure.as_ref().unchecked_ref());
        log::info!("Motion sensor unregistered");
    }
}
